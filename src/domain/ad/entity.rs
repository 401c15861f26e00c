// src/domain/ad/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdId(pub i64);

impl AdId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("ad id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<AdId> for i64 {
    fn from(value: AdId) -> Self {
        value.0
    }
}

/// Advertisement slot content. No workflow, no status; plain CRUD.
#[derive(Debug, Clone)]
pub struct Ad {
    pub id: AdId,
    pub placement: String,
    pub content: String,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAd {
    pub placement: String,
    pub content: String,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

/// Presence-marked partial update, same semantics as `ArticleUpdate`.
#[derive(Debug, Clone)]
pub struct AdUpdate {
    pub id: AdId,
    pub placement: Option<String>,
    pub content: Option<String>,
}

impl AdUpdate {
    pub fn new(id: AdId) -> Self {
        Self {
            id,
            placement: None,
            content: None,
        }
    }

    pub fn with_placement(mut self, placement: impl Into<String>) -> Self {
        self.placement = Some(placement.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}
