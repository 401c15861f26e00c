use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::audit::NewLogEntry;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Filter applied to the public article listing. Only published articles are
/// ever visible through this path; the repository enforces that regardless of
/// the filter contents.
#[derive(Debug, Clone, Default)]
pub struct PublishedArticleFilter {
    /// Case-insensitive substring matched against title, content, or any
    /// keyword token.
    pub keyword: Option<String>,
    /// Case-insensitive substring matched against the category.
    pub category: Option<String>,
    /// Inclusive publish-date window.
    pub publish_range: Option<(DateTime<Utc>, DateTime<Utc>)>,
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    /// Applies the update and appends the log entry in a single unit of
    /// work: either both land or neither does.
    async fn update_with_log(
        &self,
        update: ArticleUpdate,
        log: NewLogEntry,
    ) -> DomainResult<Article>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    /// Published articles matching the filter, newest publish date first.
    async fn search_published(&self, filter: PublishedArticleFilter)
    -> DomainResult<Vec<Article>>;
}
