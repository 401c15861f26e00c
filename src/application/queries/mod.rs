pub mod ads;
pub mod articles;
pub mod audit;
