pub mod actor;
pub mod ads;
pub mod articles;
pub mod audit;

pub use actor::Actor;
pub use ads::AdDto;
pub use articles::{ArticleDto, PublishedArticleDto};
pub use audit::LogEntryDto;
