pub mod ads;
pub mod articles;
