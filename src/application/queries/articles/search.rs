// src/application/queries/articles/search.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::PublishedArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::PublishedArticleFilter, user::UserId},
};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// Public search over published articles. All filters are optional; blank
/// strings count as absent.
#[derive(Debug, Default)]
pub struct SearchArticlesQuery {
    pub keyword: Option<String>,
    pub category: Option<String>,
    /// Calendar date, `YYYY-MM-DD`, interpreted in server-local time.
    pub date: Option<String>,
}

impl ArticleQueryService {
    pub async fn get_articles(
        &self,
        query: SearchArticlesQuery,
    ) -> ApplicationResult<Vec<PublishedArticleDto>> {
        let publish_range = query
            .date
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(parse_day)
            .transpose()?
            .map(local_day_range)
            .transpose()?;

        let filter = PublishedArticleFilter {
            keyword: normalize(query.keyword),
            category: normalize(query.category),
            publish_range,
        };

        let articles = self.read_repo.search_published(filter).await?;

        let mut ids: Vec<UserId> = Vec::new();
        for article in &articles {
            ids.push(article.author_id);
            if let Some(editor) = article.editor_id {
                ids.push(editor);
            }
        }
        ids.sort_unstable_by_key(|id| i64::from(*id));
        ids.dedup();
        let names = self.user_repo.display_names(&ids).await?;

        Ok(articles
            .into_iter()
            .map(|article| {
                let author = names.get(&article.author_id).cloned();
                let editor = article
                    .editor_id
                    .and_then(|id| names.get(&id).cloned());
                PublishedArticleDto::from_article(article, author, editor)
            })
            .collect())
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_day(value: &str) -> ApplicationResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ApplicationError::validation(format!("invalid date '{value}', expected YYYY-MM-DD")))
}

/// Inclusive instant range covering the whole calendar day in server-local
/// time: [00:00:00.000, 23:59:59.999].
fn local_day_range(day: NaiveDate) -> ApplicationResult<(DateTime<Utc>, DateTime<Utc>)> {
    let start_naive = day
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| ApplicationError::validation("invalid start of day"))?;
    let end_naive = day
        .and_hms_milli_opt(23, 59, 59, 999)
        .ok_or_else(|| ApplicationError::validation("invalid end of day"))?;

    let start = Local
        .from_local_datetime(&start_naive)
        .earliest()
        .ok_or_else(|| ApplicationError::validation("date has no valid local midnight"))?
        .with_timezone(&Utc);
    let end = Local
        .from_local_datetime(&end_naive)
        .latest()
        .ok_or_else(|| ApplicationError::validation("date has no valid local end of day"))?
        .with_timezone(&Utc);

    Ok((start, end))
}
