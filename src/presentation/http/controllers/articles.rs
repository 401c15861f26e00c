// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, PublishArticleCommand, UpdatePublishedArticleCommand,
    },
    dto::{ArticleDto, LogEntryDto, PublishedArticleDto},
    queries::{articles::SearchArticlesQuery, audit::ListArticleLogQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ArticleSearchParams {
    /// Case-insensitive substring matched against title, content, or keywords.
    pub keyword: Option<String>,
    /// Case-insensitive substring matched against the category.
    pub category: Option<String>,
    /// Calendar day (YYYY-MM-DD) the article was published on.
    pub date: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub keywords: Option<Vec<String>>,
}

/// Public listing of published articles; drafts are never visible here.
#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleSearchParams),
    responses(
        (status = 200, description = "Published articles, newest first.", body = [PublishedArticleDto]),
        (status = 400, description = "Malformed filter parameter.")
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleSearchParams>,
) -> HttpResult<Json<Vec<PublishedArticleDto>>> {
    state
        .services
        .article_queries
        .get_articles(SearchArticlesQuery {
            keyword: params.keyword,
            category: params.category,
            date: params.date,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Draft created.", body = ArticleDto),
        (status = 400, description = "Missing required field."),
        (status = 401, description = "No actor identity attached.")
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
        category: payload.category,
        keywords: payload.keywords,
    };

    let article = state
        .services
        .article_commands
        .create_article(&actor, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/publish",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article published.", body = ArticleDto),
        (status = 404, description = "Article does not exist.")
    ),
    tag = "Articles"
)]
pub async fn publish_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .publish_article(&actor, PublishArticleCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated by admin.", body = ArticleDto),
        (status = 400, description = "Article is not published."),
        (status = 403, description = "Actor is not an admin."),
        (status = 404, description = "Article does not exist.")
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdatePublishedArticleCommand {
        id,
        title: payload.title,
        content: payload.content,
        category: payload.category,
        keywords: payload.keywords,
    };

    state
        .services
        .article_commands
        .update_published_article(&actor, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/log",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Audit trail, newest first.", body = [LogEntryDto]),
        (status = 403, description = "Actor is not an admin.")
    ),
    tag = "Audit"
)]
pub async fn list_article_log(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<Vec<LogEntryDto>>> {
    state
        .services
        .audit_queries
        .list_article_log(&actor, ListArticleLogQuery { article_id: id })
        .await
        .into_http()
        .map(Json)
}
