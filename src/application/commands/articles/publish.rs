// src/application/commands/articles/publish.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{Actor, ArticleDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, ArticleUpdate},
        audit::NewLogEntry,
    },
};

pub struct PublishArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Mark an article published, recording the acting user as its editor.
    /// Any authenticated actor may publish; there is intentionally no
    /// editor-role gate here (see DESIGN.md). The state change and its log
    /// entry are persisted in one unit of work.
    pub async fn publish_article(
        &self,
        actor: &Actor,
        command: PublishArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let now = self.clock.now();
        article.publish(actor.id, now);

        let update = ArticleUpdate::new(id, now).with_publish_state(
            article.status,
            article.publish_date,
            article.editor_id,
        );
        let log = NewLogEntry::publish(id, actor.id, now);

        let published = self.write_repo.update_with_log(update, log).await?;
        Ok(published.into())
    }
}
