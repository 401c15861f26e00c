// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleStatus, ArticleTitle, Category,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub category: Category,
    pub keywords: Vec<String>,
    pub status: ArticleStatus,
    pub publish_date: Option<DateTime<Utc>>,
    pub author_id: UserId,
    pub editor_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn publish(&mut self, editor_id: UserId, now: DateTime<Utc>) {
        self.status = ArticleStatus::Published;
        self.editor_id = Some(editor_id);
        self.publish_date = Some(now);
        self.updated_at = now;
    }

    pub fn is_published(&self) -> bool {
        self.status.is_published()
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub category: Category,
    pub keywords: Vec<String>,
    pub status: ArticleStatus,
    pub publish_date: Option<DateTime<Utc>>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    /// A fresh draft as produced by the newsroom: no editor, no publish date.
    pub fn draft(
        title: ArticleTitle,
        content: ArticleContent,
        category: Category,
        keywords: Vec<String>,
        author_id: UserId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            content,
            category,
            keywords,
            status: ArticleStatus::Draft,
            publish_date: None,
            author_id,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PublishState {
    pub status: ArticleStatus,
    pub publish_date: Option<DateTime<Utc>>,
    pub editor_id: Option<UserId>,
}

/// Partial update with explicit presence markers: `None` leaves the stored
/// column untouched, `Some` overwrites it.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub content: Option<ArticleContent>,
    pub category: Option<Category>,
    pub keywords: Option<Vec<String>>,
    pub publish_state: Option<PublishState>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            content: None,
            category: None,
            keywords: None,
            publish_state: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = Some(keywords);
        self
    }

    pub fn with_publish_state(
        mut self,
        status: ArticleStatus,
        publish_date: Option<DateTime<Utc>>,
        editor_id: Option<UserId>,
    ) -> Self {
        self.publish_state = Some(PublishState {
            status,
            publish_date,
            editor_id,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.category.is_none()
            && self.keywords.is_none()
            && self.publish_state.is_none()
    }
}
