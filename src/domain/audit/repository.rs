use crate::domain::article::ArticleId;
use crate::domain::audit::entity::LogEntry;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Read side of the audit log. Entries are only ever written together with
/// the article mutation they record, inside the article write repository's
/// unit of work.
#[async_trait]
pub trait LogEntryRepository: Send + Sync {
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<LogEntry>>;
}
