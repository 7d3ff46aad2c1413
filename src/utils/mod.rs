pub mod date;
pub mod weight;
