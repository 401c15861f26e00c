use crate::domain::errors::DomainResult;
use crate::domain::user::entity::User;
use crate::domain::user::value_objects::UserId;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    /// Display names for the given ids. Ids that do not resolve are simply
    /// absent from the map; only the name ever leaves this lookup.
    async fn display_names(&self, ids: &[UserId]) -> DomainResult<HashMap<UserId, String>>;
}
