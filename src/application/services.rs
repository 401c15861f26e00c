// src/application/services.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{ads::AdCommandService, articles::ArticleCommandService},
        ports::time::Clock,
        queries::{ads::AdQueryService, articles::ArticleQueryService, audit::AuditQueryService},
    },
    domain::{
        ad::AdRepository,
        article::{ArticleReadRepository, ArticleWriteRepository},
        audit::LogEntryRepository,
        user::UserRepository,
    },
};

/// Service container wired once at startup and shared behind the HTTP state.
pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub ad_commands: Arc<AdCommandService>,
    pub ad_queries: Arc<AdQueryService>,
    pub audit_queries: Arc<AuditQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        log_entry_repo: Arc<dyn LogEntryRepository>,
        ad_repo: Arc<dyn AdRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&user_repo),
        ));

        let ad_commands = Arc::new(AdCommandService::new(Arc::clone(&ad_repo), Arc::clone(&clock)));
        let ad_queries = Arc::new(AdQueryService::new(Arc::clone(&ad_repo)));
        let audit_queries = Arc::new(AuditQueryService::new(Arc::clone(&log_entry_repo)));

        Self {
            article_commands,
            article_queries,
            ad_commands,
            ad_queries,
            audit_queries,
        }
    }
}
