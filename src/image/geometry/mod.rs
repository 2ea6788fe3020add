pub mod point;
pub mod line;
