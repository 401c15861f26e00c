// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{
    Mutex,
    atomic::{AtomicI64, Ordering},
};

use nepnews_core::application::ports::time::Clock;
use nepnews_core::domain::ad::{Ad, AdId, AdRepository, AdUpdate, NewAd};
use nepnews_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository, NewArticle,
    PublishedArticleFilter,
};
use nepnews_core::domain::audit::{LogEntry, LogEntryRepository, NewLogEntry};
use nepnews_core::domain::errors::{DomainError, DomainResult};

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/* ------------------------------- articles ------------------------------- */

/// Shared in-memory article store implementing both sides of the repository
/// split, with the same transactional contract as the Postgres version: the
/// log entry is recorded iff the update lands.
pub struct InMemoryArticleRepo {
    pub articles: Mutex<HashMap<i64, Article>>,
    pub logs: Mutex<Vec<NewLogEntry>>,
    next_id: AtomicI64,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self {
            articles: Mutex::new(HashMap::new()),
            logs: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn seed(&self, article: Article) {
        let id = i64::from(article.id);
        self.next_id.fetch_max(id + 1, Ordering::SeqCst);
        self.articles.lock().unwrap().insert(id, article);
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.articles.lock().unwrap().get(&id).cloned()
    }

    pub fn log_count(&self) -> usize {
        self.logs.lock().unwrap().len()
    }
}

impl Default for InMemoryArticleRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, new: NewArticle) -> DomainResult<Article> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let article = Article {
            id: ArticleId::new(id)?,
            title: new.title,
            content: new.content,
            category: new.category,
            keywords: new.keywords,
            status: new.status,
            publish_date: new.publish_date,
            author_id: new.author_id,
            editor_id: None,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        self.articles.lock().unwrap().insert(id, article.clone());
        Ok(article)
    }

    async fn update_with_log(
        &self,
        update: ArticleUpdate,
        log: NewLogEntry,
    ) -> DomainResult<Article> {
        let updated = {
            let mut map = self.articles.lock().unwrap();
            let article = map
                .get_mut(&i64::from(update.id))
                .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

            if let Some(title) = update.title {
                article.title = title;
            }
            if let Some(content) = update.content {
                article.content = content;
            }
            if let Some(category) = update.category {
                article.category = category;
            }
            if let Some(keywords) = update.keywords {
                article.keywords = keywords;
            }
            if let Some(state) = update.publish_state {
                article.status = state.status;
                article.publish_date = state.publish_date;
                article.editor_id = state.editor_id;
            }
            article.updated_at = update.updated_at;
            article.clone()
        };

        self.logs.lock().unwrap().push(log);
        Ok(updated)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.articles.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn search_published(
        &self,
        filter: PublishedArticleFilter,
    ) -> DomainResult<Vec<Article>> {
        let map = self.articles.lock().unwrap();
        let mut results: Vec<Article> = map
            .values()
            .filter(|article| article.is_published())
            .filter(|article| match &filter.keyword {
                Some(keyword) => {
                    let needle = keyword.to_lowercase();
                    article.title.as_str().to_lowercase().contains(&needle)
                        || article.content.as_str().to_lowercase().contains(&needle)
                        || article
                            .keywords
                            .iter()
                            .any(|kw| kw.to_lowercase().contains(&needle))
                }
                None => true,
            })
            .filter(|article| match &filter.category {
                Some(category) => article
                    .category
                    .as_str()
                    .to_lowercase()
                    .contains(&category.to_lowercase()),
                None => true,
            })
            .filter(|article| match filter.publish_range {
                Some((start, end)) => article
                    .publish_date
                    .is_some_and(|date| date >= start && date <= end),
                None => true,
            })
            .cloned()
            .collect();

        results.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));
        Ok(results)
    }
}

/* --------------------------------- users --------------------------------- */

pub struct InMemoryUserDirectory {
    pub names: HashMap<i64, String>,
}

impl InMemoryUserDirectory {
    pub fn new(entries: &[(i64, &str)]) -> Self {
        Self {
            names: entries
                .iter()
                .map(|(id, name)| (*id, (*name).to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl nepnews_core::domain::user::UserRepository for InMemoryUserDirectory {
    async fn find_by_id(
        &self,
        _id: nepnews_core::domain::user::UserId,
    ) -> DomainResult<Option<nepnews_core::domain::user::User>> {
        Ok(None)
    }

    async fn display_names(
        &self,
        ids: &[nepnews_core::domain::user::UserId],
    ) -> DomainResult<HashMap<nepnews_core::domain::user::UserId, String>> {
        let mut resolved = HashMap::new();
        for id in ids {
            if let Some(name) = self.names.get(&i64::from(*id)) {
                resolved.insert(*id, name.clone());
            }
        }
        Ok(resolved)
    }
}

/* ---------------------------------- ads ---------------------------------- */

pub struct InMemoryAdRepo {
    pub ads: Mutex<Vec<Ad>>,
    next_id: AtomicI64,
}

impl InMemoryAdRepo {
    pub fn new() -> Self {
        Self {
            ads: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn count(&self) -> usize {
        self.ads.lock().unwrap().len()
    }
}

impl Default for InMemoryAdRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdRepository for InMemoryAdRepo {
    async fn insert(&self, ad: NewAd) -> DomainResult<Ad> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let ad = Ad {
            id: AdId::new(id)?,
            placement: ad.placement,
            content: ad.content,
            created_by: ad.created_by,
            created_at: ad.created_at,
        };
        self.ads.lock().unwrap().push(ad.clone());
        Ok(ad)
    }

    async fn update(&self, update: AdUpdate) -> DomainResult<Ad> {
        let mut ads = self.ads.lock().unwrap();
        let ad = ads
            .iter_mut()
            .find(|ad| ad.id == update.id)
            .ok_or_else(|| DomainError::NotFound("ad not found".into()))?;
        if let Some(placement) = update.placement {
            ad.placement = placement;
        }
        if let Some(content) = update.content {
            ad.content = content;
        }
        Ok(ad.clone())
    }

    async fn delete(&self, id: AdId) -> DomainResult<()> {
        self.ads.lock().unwrap().retain(|ad| ad.id != id);
        Ok(())
    }

    async fn list_all(&self) -> DomainResult<Vec<Ad>> {
        Ok(self.ads.lock().unwrap().clone())
    }
}

/* --------------------------------- audit --------------------------------- */

pub struct InMemoryLogEntryRepo {
    pub entries: Mutex<Vec<LogEntry>>,
}

impl InMemoryLogEntryRepo {
    pub fn new(entries: Vec<LogEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }
}

#[async_trait]
impl LogEntryRepository for InMemoryLogEntryRepo {
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<LogEntry>> {
        let mut entries: Vec<LogEntry> = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| entry.article_id == article_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(entries)
    }
}
