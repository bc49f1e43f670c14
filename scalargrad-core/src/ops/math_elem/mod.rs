pub mod exp;
pub mod ln;
