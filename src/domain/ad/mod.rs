pub mod entity;
pub mod repository;

pub use entity::{Ad, AdId, AdUpdate, NewAd};
pub use repository::AdRepository;
