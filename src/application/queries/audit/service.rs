// src/application/queries/audit/service.rs
use std::sync::Arc;

use crate::domain::audit::LogEntryRepository;

pub struct AuditQueryService {
    pub(super) repo: Arc<dyn LogEntryRepository>,
}

impl AuditQueryService {
    pub fn new(repo: Arc<dyn LogEntryRepository>) -> Self {
        Self { repo }
    }
}
