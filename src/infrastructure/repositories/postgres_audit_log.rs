// src/infrastructure/repositories/postgres_audit_log.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::audit::{LogAction, LogEntry, LogEntryRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresLogEntryRepository {
    pool: PgPool,
}

impl PostgresLogEntryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct LogEntryRow {
    id: i64,
    article_id: i64,
    action: String,
    changed_by: i64,
    changes: Option<serde_json::Value>,
    created_at: DateTime<Utc>,
}

impl TryFrom<LogEntryRow> for LogEntry {
    type Error = DomainError;

    fn try_from(row: LogEntryRow) -> Result<Self, Self::Error> {
        Ok(LogEntry {
            id: row.id,
            article_id: ArticleId::new(row.article_id)?,
            action: row.action.parse::<LogAction>()?,
            changed_by: UserId::new(row.changed_by)?,
            changes: row.changes,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl LogEntryRepository for PostgresLogEntryRepository {
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<LogEntry>> {
        let rows = sqlx::query_as::<_, LogEntryRow>(
            "SELECT id, article_id, action, changed_by, changes, created_at
             FROM log_entries WHERE article_id = $1
             ORDER BY created_at DESC, id DESC",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(LogEntry::try_from).collect()
    }
}
