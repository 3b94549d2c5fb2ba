pub mod connections;
pub mod ideas;
