// src/application/queries/audit/list.rs
use super::AuditQueryService;
use crate::{
    application::{
        access::require_role,
        dto::{Actor, LogEntryDto},
        error::ApplicationResult,
    },
    domain::{article::ArticleId, user::Role},
};

pub struct ListArticleLogQuery {
    pub article_id: i64,
}

impl AuditQueryService {
    /// Audit trail of a single article, newest first. Admin only.
    pub async fn list_article_log(
        &self,
        actor: &Actor,
        query: ListArticleLogQuery,
    ) -> ApplicationResult<Vec<LogEntryDto>> {
        require_role(actor, &[Role::Admin])?;

        let article_id = ArticleId::new(query.article_id)?;
        let entries = self.repo.list_by_article(article_id).await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }
}
