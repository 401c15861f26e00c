// src/presentation/http/controllers/ads.rs
use crate::application::{
    commands::ads::{CreateAdCommand, DeleteAdCommand, UpdateAdCommand},
    dto::AdDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAdRequest {
    pub placement: String,
    pub content: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAdRequest {
    pub placement: Option<String>,
    pub content: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/ads",
    request_body = CreateAdRequest,
    responses(
        (status = 201, description = "Ad created.", body = AdDto),
        (status = 403, description = "Actor is neither admin nor adsManager.")
    ),
    tag = "Ads"
)]
pub async fn create_ad(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Json(payload): Json<CreateAdRequest>,
) -> HttpResult<(StatusCode, Json<AdDto>)> {
    let command = CreateAdCommand {
        placement: payload.placement,
        content: payload.content,
    };

    let ad = state
        .services
        .ad_commands
        .create_ad(&actor, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(ad)))
}

#[utoipa::path(
    get,
    path = "/api/v1/ads",
    responses((status = 200, description = "Every ad, storage order.", body = [AdDto])),
    tag = "Ads"
)]
pub async fn list_ads(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<AdDto>>> {
    state
        .services
        .ad_queries
        .get_all_ads()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/ads/{id}",
    params(("id" = i64, Path, description = "Ad id")),
    request_body = UpdateAdRequest,
    responses(
        (status = 200, description = "Ad updated.", body = AdDto),
        (status = 403, description = "Actor is neither admin nor adsManager."),
        (status = 404, description = "Ad does not exist.")
    ),
    tag = "Ads"
)]
pub async fn update_ad(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateAdRequest>,
) -> HttpResult<Json<AdDto>> {
    let command = UpdateAdCommand {
        id,
        placement: payload.placement,
        content: payload.content,
    };

    state
        .services
        .ad_commands
        .update_ad(&actor, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/ads/{id}",
    params(("id" = i64, Path, description = "Ad id")),
    responses(
        (status = 200, description = "Ad removed (or was already gone)."),
        (status = 403, description = "Actor is neither admin nor adsManager.")
    ),
    tag = "Ads"
)]
pub async fn delete_ad(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .ad_commands
        .delete_ad(&actor, DeleteAdCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
