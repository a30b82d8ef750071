use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, StatusCountDto},
        lift::{AerialwayStatDto, LiftDto, LiftListParams, LiftSearchParams},
    },
    server::{error::Error, model::app::AppState, service::lift::LiftService},
};

pub static LIFT_TAG: &str = "lift";

/// List lifts across all resorts
#[utoipa::path(
    get,
    path = "/api/lifts",
    tag = LIFT_TAG,
    params(LiftListParams),
    responses(
        (status = 200, description = "Page of lifts sorted by name", body = ApiResponse<Vec<LiftDto>>),
        (status = 400, description = "Unknown filter value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_lifts(
    State(state): State<AppState>,
    Query(params): Query<LiftListParams>,
) -> Result<impl IntoResponse, Error> {
    let (lifts, pagination) = LiftService::new(&state.db).list(&params).await?;

    Ok(Json(ApiResponse::paginated(lifts, pagination)))
}

/// Search lifts by name or description
#[utoipa::path(
    get,
    path = "/api/lifts/search",
    tag = LIFT_TAG,
    params(LiftSearchParams),
    responses(
        (status = 200, description = "Matching lifts", body = ApiResponse<Vec<LiftDto>>),
        (status = 400, description = "Unknown filter value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_lifts(
    State(state): State<AppState>,
    Query(params): Query<LiftSearchParams>,
) -> Result<impl IntoResponse, Error> {
    let lifts = LiftService::new(&state.db).search(&params).await?;
    let count = lifts.len() as u64;

    Ok(Json(ApiResponse::counted(lifts, count)))
}

#[utoipa::path(
    get,
    path = "/api/lifts/stats/aerialway",
    tag = LIFT_TAG,
    responses(
        (status = 200, description = "Lift counts, capacity and ride time per aerialway kind", body = ApiResponse<Vec<AerialwayStatDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_aerialway_stats(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let stats = LiftService::new(&state.db).aerialway_stats().await?;

    Ok(Json(ApiResponse::ok(stats)))
}

#[utoipa::path(
    get,
    path = "/api/lifts/stats/status",
    tag = LIFT_TAG,
    responses(
        (status = 200, description = "Lift counts per status", body = ApiResponse<Vec<StatusCountDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lift_status_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let stats = LiftService::new(&state.db).status_stats().await?;

    Ok(Json(ApiResponse::ok(stats)))
}

/// Lift with its resort and the trails it serves
#[utoipa::path(
    get,
    path = "/api/lifts/{id}",
    tag = LIFT_TAG,
    params(("id" = i32, Path, description = "Lift ID")),
    responses(
        (status = 200, description = "Lift found", body = ApiResponse<LiftDto>),
        (status = 404, description = "Lift not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lift(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let lift = LiftService::new(&state.db).detail(id).await?;

    Ok(Json(ApiResponse::ok(lift)))
}
