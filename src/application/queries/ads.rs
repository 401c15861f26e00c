// src/application/queries/ads.rs
use std::sync::Arc;

use crate::{
    application::{dto::AdDto, error::ApplicationResult},
    domain::ad::AdRepository,
};

pub struct AdQueryService {
    repo: Arc<dyn AdRepository>,
}

impl AdQueryService {
    pub fn new(repo: Arc<dyn AdRepository>) -> Self {
        Self { repo }
    }

    /// Every ad, storage order, no auth and no filtering.
    pub async fn get_all_ads(&self) -> ApplicationResult<Vec<AdDto>> {
        let ads = self.repo.list_all().await?;
        Ok(ads.into_iter().map(Into::into).collect())
    }
}
