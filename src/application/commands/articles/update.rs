// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        access::require_role,
        dto::{Actor, ArticleDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, ArticleContent, ArticleId, ArticleTitle, ArticleUpdate, Category},
        audit::NewLogEntry,
        user::Role,
    },
};
use serde_json::json;

/// Admin override of an already-published article. Fields are presence
/// marked: `None` leaves the stored value alone, `Some` overwrites it.
pub struct UpdatePublishedArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub keywords: Option<Vec<String>>,
}

impl ArticleCommandService {
    pub async fn update_published_article(
        &self,
        actor: &Actor,
        command: UpdatePublishedArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        // Gate before touching storage.
        require_role(actor, &[Role::Admin])?;

        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !article.is_published() {
            return Err(ApplicationError::invalid_state(
                "article is not published yet, no admin override needed",
            ));
        }

        let title = command.title.map(ArticleTitle::new).transpose()?;
        let content = command.content.map(ArticleContent::new).transpose()?;
        let category = command.category.map(Category::new).transpose()?;

        let now = self.clock.now();
        let (update, changes) = Self::build_update(
            &article,
            ArticleUpdate::new(id, now),
            title,
            content,
            category,
            command.keywords,
        );

        let log = NewLogEntry::update_after_publish(id, actor.id, changes, now)?;
        let updated = self.write_repo.update_with_log(update, log).await?;
        Ok(updated.into())
    }

    /// Collects the provided fields into the partial update and diffs them
    /// against the stored article: the change map holds exactly the provided
    /// fields whose new value differs from the old one.
    fn build_update(
        article: &Article,
        mut update: ArticleUpdate,
        title: Option<ArticleTitle>,
        content: Option<ArticleContent>,
        category: Option<Category>,
        keywords: Option<Vec<String>>,
    ) -> (ArticleUpdate, serde_json::Value) {
        let mut changes = serde_json::Map::new();

        if let Some(title) = title {
            if title != article.title {
                changes.insert("title".into(), json!(title.as_str()));
            }
            update = update.with_title(title);
        }

        if let Some(content) = content {
            if content != article.content {
                changes.insert("content".into(), json!(content.as_str()));
            }
            update = update.with_content(content);
        }

        if let Some(category) = category {
            if category != article.category {
                changes.insert("category".into(), json!(category.as_str()));
            }
            update = update.with_category(category);
        }

        if let Some(keywords) = keywords {
            if keywords != article.keywords {
                changes.insert("keywords".into(), json!(keywords));
            }
            update = update.with_keywords(keywords);
        }

        (update, serde_json::Value::Object(changes))
    }
}
