// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{Actor, ArticleDto},
        error::ApplicationResult,
    },
    domain::article::{ArticleContent, ArticleTitle, Category, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub category: String,
    pub keywords: Vec<String>,
}

impl ArticleCommandService {
    /// Create a draft attributed to the acting user. Any authenticated actor
    /// may start a draft; publication is a separate step.
    pub async fn create_article(
        &self,
        actor: &Actor,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let category = Category::new(command.category)?;
        let now = self.clock.now();

        let draft = NewArticle::draft(title, content, category, command.keywords, actor.id, now);

        let created = self.write_repo.insert(draft).await?;
        Ok(created.into())
    }
}
