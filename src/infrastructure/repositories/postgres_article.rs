// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleStatus, ArticleTitle,
    ArticleUpdate, ArticleWriteRepository, Category, NewArticle, PublishedArticleFilter,
};
use crate::domain::audit::NewLogEntry;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "id, title, content, category, keywords, status, publish_date, \
                               author_id, editor_id, created_at, updated_at";

/// Escapes LIKE metacharacters so filter input matches as a literal
/// substring. `%`, `_` and the escape character itself would otherwise act
/// as wildcards inside the ILIKE pattern.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    category: String,
    keywords: Vec<String>,
    status: String,
    publish_date: Option<DateTime<Utc>>,
    author_id: i64,
    editor_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content)?,
            category: Category::new(row.category)?,
            keywords: row.keywords,
            status: row.status.parse::<ArticleStatus>()?,
            publish_date: row.publish_date,
            author_id: UserId::new(row.author_id)?,
            editor_id: row.editor_id.map(UserId::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            content,
            category,
            keywords,
            status,
            publish_date,
            author_id,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, content, category, keywords, status, publish_date, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id, title, content, category, keywords, status, publish_date, author_id, editor_id, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(category.as_str())
        .bind(&keywords)
        .bind(status.as_str())
        .bind(publish_date)
        .bind(i64::from(author_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update_with_log(
        &self,
        update: ArticleUpdate,
        log: NewLogEntry,
    ) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            content,
            category,
            keywords,
            publish_state,
            updated_at,
        } = update;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }

        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(String::from(content));
        }

        if let Some(category) = category {
            builder.push(", category = ");
            builder.push_bind(String::from(category));
        }

        if let Some(keywords) = keywords {
            builder.push(", keywords = ");
            builder.push_bind(keywords);
        }

        if let Some(state) = publish_state {
            builder.push(", status = ");
            builder.push_bind(state.status.as_str());
            builder.push(", publish_date = ");
            builder.push_bind(state.publish_date);
            builder.push(", editor_id = ");
            builder.push_bind(state.editor_id.map(i64::from));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        sqlx::query(
            "INSERT INTO log_entries (article_id, action, changed_by, changes, created_at)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(i64::from(log.article_id))
        .bind(log.action.as_str())
        .bind(i64::from(log.changed_by))
        .bind(log.changes)
        .bind(log.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        Article::try_from(row)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, content, category, keywords, status, publish_date, author_id, editor_id, created_at, updated_at
             FROM articles WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn search_published(
        &self,
        filter: PublishedArticleFilter,
    ) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(ARTICLE_COLUMNS);
        builder.push(" FROM articles WHERE status = 'published'");

        if let Some(keyword) = &filter.keyword {
            let pattern = format!("%{}%", escape_like(keyword));
            builder.push(" AND (title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR content ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR EXISTS (SELECT 1 FROM unnest(keywords) AS kw WHERE kw ILIKE ");
            builder.push_bind(pattern);
            builder.push("))");
        }

        if let Some(category) = &filter.category {
            builder.push(" AND category ILIKE ");
            builder.push_bind(format!("%{}%", escape_like(category)));
        }

        if let Some((start, end)) = filter.publish_range {
            builder.push(" AND publish_date >= ");
            builder.push_bind(start);
            builder.push(" AND publish_date <= ");
            builder.push_bind(end);
        }

        builder.push(" ORDER BY publish_date DESC");

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
