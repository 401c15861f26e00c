use crate::domain::ad::entity::{Ad, AdId, AdUpdate, NewAd};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AdRepository: Send + Sync {
    async fn insert(&self, ad: NewAd) -> DomainResult<Ad>;
    async fn update(&self, update: AdUpdate) -> DomainResult<Ad>;
    /// Removal is idempotent: deleting an absent id is not an error.
    async fn delete(&self, id: AdId) -> DomainResult<()>;
    async fn list_all(&self) -> DomainResult<Vec<Ad>>;
}
