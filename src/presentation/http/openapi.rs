// src/presentation/http/openapi.rs
use crate::application::dto::{AdDto, ArticleDto, LogEntryDto, PublishedArticleDto};
use crate::presentation::http::controllers::{ads, articles};
use crate::presentation::http::routes;
use axum::Router;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NepNews backend API",
        description = "Content management for the news platform: article draft/publish workflow with audit logging, public article search, and role-gated ads."
    ),
    paths(
        routes::health,
        articles::list_articles,
        articles::create_article,
        articles::publish_article,
        articles::update_article,
        articles::list_article_log,
        ads::list_ads,
        ads::create_ad,
        ads::update_ad,
        ads::delete_ad,
    ),
    components(schemas(
        StatusResponse,
        ArticleDto,
        PublishedArticleDto,
        LogEntryDto,
        AdDto,
        articles::CreateArticleRequest,
        articles::UpdateArticleRequest,
        ads::CreateAdRequest,
        ads::UpdateAdRequest,
    )),
    tags(
        (name = "System", description = "Service health"),
        (name = "Articles", description = "Draft/publish workflow and public search"),
        (name = "Audit", description = "Append-only change log"),
        (name = "Ads", description = "Advertisement management")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
