use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub keywords: Vec<String>,
    pub status: String,
    pub publish_date: Option<DateTime<Utc>>,
    pub author_id: i64,
    #[serde(default)]
    pub editor_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            content: article.content.into(),
            category: article.category.into(),
            keywords: article.keywords,
            status: article.status.as_str().to_string(),
            publish_date: article.publish_date,
            author_id: article.author_id.into(),
            editor_id: article.editor_id.map(Into::into),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Public listing view: author and editor collapse to display names so no
/// other user fields leave the service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublishedArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub keywords: Vec<String>,
    pub publish_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub editor: Option<String>,
}

impl PublishedArticleDto {
    pub fn from_article(
        article: Article,
        author: Option<String>,
        editor: Option<String>,
    ) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            content: article.content.into(),
            category: article.category.into(),
            keywords: article.keywords,
            publish_date: article.publish_date,
            author,
            editor,
        }
    }
}
