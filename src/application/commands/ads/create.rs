// src/application/commands/ads/create.rs
use super::{AdCommandService, service::AD_MANAGER_ROLES};
use crate::{
    application::{
        access::require_role,
        dto::{Actor, AdDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::ad::NewAd,
};

pub struct CreateAdCommand {
    pub placement: String,
    pub content: String,
}

impl AdCommandService {
    pub async fn create_ad(
        &self,
        actor: &Actor,
        command: CreateAdCommand,
    ) -> ApplicationResult<AdDto> {
        require_role(actor, AD_MANAGER_ROLES)?;

        if command.placement.trim().is_empty() {
            return Err(ApplicationError::validation("placement cannot be empty"));
        }
        if command.content.trim().is_empty() {
            return Err(ApplicationError::validation("content cannot be empty"));
        }

        let ad = NewAd {
            placement: command.placement,
            content: command.content,
            created_by: actor.id,
            created_at: self.clock.now(),
        };

        let created = self.repo.insert(ad).await?;
        Ok(created.into())
    }
}
