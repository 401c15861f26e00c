// src/infrastructure/repositories/mod.rs
mod postgres_ad;
mod postgres_article;
mod postgres_audit_log;
mod postgres_user;

pub use postgres_ad::PostgresAdRepository;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_audit_log::PostgresLogEntryRepository;
pub use postgres_user::PostgresUserRepository;

use crate::domain::errors::DomainError;

pub(crate) fn map_sqlx(err: sqlx::Error) -> DomainError {
    match err {
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        other => DomainError::Persistence(other.to_string()),
    }
}
