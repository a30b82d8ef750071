use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, StatusCountDto},
        trail::{TrailDifficultyStatDto, TrailDto, TrailListParams, TrailSearchParams},
    },
    server::{error::Error, model::app::AppState, service::trail::TrailService},
};

pub static TRAIL_TAG: &str = "trail";

/// List trails across all resorts
#[utoipa::path(
    get,
    path = "/api/trails",
    tag = TRAIL_TAG,
    params(TrailListParams),
    responses(
        (status = 200, description = "Page of trails sorted by name", body = ApiResponse<Vec<TrailDto>>),
        (status = 400, description = "Unknown filter value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_trails(
    State(state): State<AppState>,
    Query(params): Query<TrailListParams>,
) -> Result<impl IntoResponse, Error> {
    let (trails, pagination) = TrailService::new(&state.db).list(&params).await?;

    Ok(Json(ApiResponse::paginated(trails, pagination)))
}

/// Search trails by name or description
#[utoipa::path(
    get,
    path = "/api/trails/search",
    tag = TRAIL_TAG,
    params(TrailSearchParams),
    responses(
        (status = 200, description = "Matching trails", body = ApiResponse<Vec<TrailDto>>),
        (status = 400, description = "Unknown filter value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_trails(
    State(state): State<AppState>,
    Query(params): Query<TrailSearchParams>,
) -> Result<impl IntoResponse, Error> {
    let trails = TrailService::new(&state.db).search(&params).await?;
    let count = trails.len() as u64;

    Ok(Json(ApiResponse::counted(trails, count)))
}

#[utoipa::path(
    get,
    path = "/api/trails/stats/difficulty",
    tag = TRAIL_TAG,
    responses(
        (status = 200, description = "Trail counts per difficulty", body = ApiResponse<Vec<TrailDifficultyStatDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_difficulty_stats(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let stats = TrailService::new(&state.db).difficulty_stats().await?;

    Ok(Json(ApiResponse::ok(stats)))
}

#[utoipa::path(
    get,
    path = "/api/trails/stats/status",
    tag = TRAIL_TAG,
    responses(
        (status = 200, description = "Trail counts per status", body = ApiResponse<Vec<StatusCountDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trail_status_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let stats = TrailService::new(&state.db).status_stats().await?;

    Ok(Json(ApiResponse::ok(stats)))
}

/// Trail with its resort and linked lifts
#[utoipa::path(
    get,
    path = "/api/trails/{id}",
    tag = TRAIL_TAG,
    params(("id" = i32, Path, description = "Trail ID")),
    responses(
        (status = 200, description = "Trail found", body = ApiResponse<TrailDto>),
        (status = 404, description = "Trail not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let trail = TrailService::new(&state.db).detail(id).await?;

    Ok(Json(ApiResponse::ok(trail)))
}
