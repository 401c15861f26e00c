// src/application/commands/ads/delete.rs
use super::{AdCommandService, service::AD_MANAGER_ROLES};
use crate::{
    application::{access::require_role, dto::Actor, error::ApplicationResult},
    domain::ad::AdId,
};

pub struct DeleteAdCommand {
    pub id: i64,
}

impl AdCommandService {
    /// Idempotent removal: deleting an id that no longer exists still
    /// succeeds.
    pub async fn delete_ad(&self, actor: &Actor, command: DeleteAdCommand) -> ApplicationResult<()> {
        require_role(actor, AD_MANAGER_ROLES)?;

        let id = AdId::new(command.id)?;
        self.repo.delete(id).await?;
        Ok(())
    }
}
