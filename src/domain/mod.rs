pub mod ad;
pub mod article;
pub mod audit;
pub mod errors;
pub mod user;
