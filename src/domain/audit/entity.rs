// src/domain/audit/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};

/// Action recorded against an article. The log is append-only; entries are
/// never mutated or deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogAction {
    Publish,
    UpdateAfterPublish,
}

impl LogAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogAction::Publish => "publish",
            LogAction::UpdateAfterPublish => "updateAfterPublish",
        }
    }
}

impl fmt::Display for LogAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "publish" => Ok(LogAction::Publish),
            "updateAfterPublish" => Ok(LogAction::UpdateAfterPublish),
            other => Err(DomainError::Validation(format!(
                "unknown log action '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: i64,
    pub article_id: ArticleId,
    pub action: LogAction,
    pub changed_by: UserId,
    /// Field-name to new-value map; present only for `UpdateAfterPublish`.
    pub changes: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewLogEntry {
    pub article_id: ArticleId,
    pub action: LogAction,
    pub changed_by: UserId,
    pub changes: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl NewLogEntry {
    pub fn publish(article_id: ArticleId, changed_by: UserId, now: DateTime<Utc>) -> Self {
        Self {
            article_id,
            action: LogAction::Publish,
            changed_by,
            changes: None,
            created_at: now,
        }
    }

    pub fn update_after_publish(
        article_id: ArticleId,
        changed_by: UserId,
        changes: serde_json::Value,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if !changes.is_object() {
            return Err(DomainError::Validation(
                "log changes must be a field map".into(),
            ));
        }
        Ok(Self {
            article_id,
            action: LogAction::UpdateAfterPublish,
            changed_by,
            changes: Some(changes),
            created_at: now,
        })
    }
}
