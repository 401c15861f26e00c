use crate::domain::audit::LogEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogEntryDto {
    pub id: i64,
    pub article_id: i64,
    pub action: String,
    pub changed_by: i64,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub changes: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl From<LogEntry> for LogEntryDto {
    fn from(entry: LogEntry) -> Self {
        Self {
            id: entry.id,
            article_id: entry.article_id.into(),
            action: entry.action.as_str().to_string(),
            changed_by: entry.changed_by.into(),
            changes: entry.changes,
            created_at: entry.created_at,
        }
    }
}
