// src/application/commands/ads/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{ad::AdRepository, user::Role},
};

/// Roles allowed to mutate ads.
pub(super) const AD_MANAGER_ROLES: &[Role] = &[Role::Admin, Role::AdsManager];

pub struct AdCommandService {
    pub(super) repo: Arc<dyn AdRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AdCommandService {
    pub fn new(repo: Arc<dyn AdRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}
