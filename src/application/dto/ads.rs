use crate::domain::ad::Ad;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdDto {
    pub id: i64,
    pub placement: String,
    pub content: String,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Ad> for AdDto {
    fn from(ad: Ad) -> Self {
        Self {
            id: ad.id.into(),
            placement: ad.placement,
            content: ad.content,
            created_by: ad.created_by.into(),
            created_at: ad.created_at,
        }
    }
}
