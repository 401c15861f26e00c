mod search;
mod service;

pub use search::SearchArticlesQuery;
pub use service::ArticleQueryService;
