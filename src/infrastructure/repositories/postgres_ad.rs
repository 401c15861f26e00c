// src/infrastructure/repositories/postgres_ad.rs
use super::map_sqlx;
use crate::domain::ad::{Ad, AdId, AdRepository, AdUpdate, NewAd};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresAdRepository {
    pool: PgPool,
}

impl PostgresAdRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AdRow {
    id: i64,
    placement: String,
    content: String,
    created_by: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<AdRow> for Ad {
    type Error = DomainError;

    fn try_from(row: AdRow) -> Result<Self, Self::Error> {
        Ok(Ad {
            id: AdId::new(row.id)?,
            placement: row.placement,
            content: row.content,
            created_by: UserId::new(row.created_by)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl AdRepository for PostgresAdRepository {
    async fn insert(&self, ad: NewAd) -> DomainResult<Ad> {
        let row = sqlx::query_as::<_, AdRow>(
            "INSERT INTO ads (placement, content, created_by, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, placement, content, created_by, created_at",
        )
        .bind(&ad.placement)
        .bind(&ad.content)
        .bind(i64::from(ad.created_by))
        .bind(ad.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ad::try_from(row)
    }

    async fn update(&self, update: AdUpdate) -> DomainResult<Ad> {
        let row = sqlx::query_as::<_, AdRow>(
            "UPDATE ads
             SET placement = COALESCE($2, placement),
                 content = COALESCE($3, content)
             WHERE id = $1
             RETURNING id, placement, content, created_by, created_at",
        )
        .bind(i64::from(update.id))
        .bind(update.placement)
        .bind(update.content)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("ad not found".into()))?;

        Ad::try_from(row)
    }

    async fn delete(&self, id: AdId) -> DomainResult<()> {
        // rows_affected is deliberately ignored: deletion is idempotent.
        sqlx::query("DELETE FROM ads WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn list_all(&self) -> DomainResult<Vec<Ad>> {
        let rows = sqlx::query_as::<_, AdRow>(
            "SELECT id, placement, content, created_by, created_at FROM ads ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Ad::try_from).collect()
    }
}
