pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle, PublishState};
pub use repository::{ArticleReadRepository, ArticleWriteRepository, PublishedArticleFilter};
pub use value_objects::{ArticleContent, ArticleId, ArticleStatus, ArticleTitle, Category};
