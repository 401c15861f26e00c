// src/application/commands/ads/update.rs
use super::{AdCommandService, service::AD_MANAGER_ROLES};
use crate::{
    application::{
        access::require_role,
        dto::{Actor, AdDto},
        error::ApplicationResult,
    },
    domain::ad::{AdId, AdUpdate},
};

pub struct UpdateAdCommand {
    pub id: i64,
    pub placement: Option<String>,
    pub content: Option<String>,
}

impl AdCommandService {
    pub async fn update_ad(
        &self,
        actor: &Actor,
        command: UpdateAdCommand,
    ) -> ApplicationResult<AdDto> {
        require_role(actor, AD_MANAGER_ROLES)?;

        let id = AdId::new(command.id)?;
        let mut update = AdUpdate::new(id);
        if let Some(placement) = command.placement {
            update = update.with_placement(placement);
        }
        if let Some(content) = command.content {
            update = update.with_content(content);
        }

        let updated = self.repo.update(update).await?;
        Ok(updated.into())
    }
}
