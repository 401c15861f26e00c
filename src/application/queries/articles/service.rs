// src/application/queries/articles/service.rs
use std::sync::Arc;

use crate::domain::{article::ArticleReadRepository, user::UserRepository};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            read_repo,
            user_repo,
        }
    }
}
