use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::UserRole;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        lift::LiftDto,
        resort::{
            CountryCountDto, CreateResortDto, ResortDetailDto, ResortDto, ResortLiftParams,
            ResortListParams, ResortSearchParams, ResortStatsDto, ResortTrailParams,
        },
        trail::TrailDto,
    },
    server::{
        controller::util::get_user::{get_user_from_session, require_role},
        error::Error,
        model::app::AppState,
        service::resort::ResortService,
    },
};

pub static RESORT_TAG: &str = "resort";

/// List active resorts
///
/// Sorted by name. `country` matches exactly ignoring case, `region` and
/// `name` match substrings.
#[utoipa::path(
    get,
    path = "/api/resorts",
    tag = RESORT_TAG,
    params(ResortListParams),
    responses(
        (status = 200, description = "Page of resorts", body = ApiResponse<Vec<ResortDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_resorts(
    State(state): State<AppState>,
    Query(params): Query<ResortListParams>,
) -> Result<impl IntoResponse, Error> {
    let (resorts, pagination) = ResortService::new(&state.db).list(&params).await?;

    Ok(Json(ApiResponse::paginated(resorts, pagination)))
}

/// Search resorts by name, description, country or region
#[utoipa::path(
    get,
    path = "/api/resorts/search",
    tag = RESORT_TAG,
    params(ResortSearchParams),
    responses(
        (status = 200, description = "Matching resorts", body = ApiResponse<Vec<ResortDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_resorts(
    State(state): State<AppState>,
    Query(params): Query<ResortSearchParams>,
) -> Result<impl IntoResponse, Error> {
    let resorts = ResortService::new(&state.db).search(&params).await?;
    let count = resorts.len() as u64;

    Ok(Json(ApiResponse::counted(resorts, count)))
}

/// Number of active resorts per country
#[utoipa::path(
    get,
    path = "/api/resorts/countries",
    tag = RESORT_TAG,
    responses(
        (status = 200, description = "Resort count per country", body = ApiResponse<Vec<CountryCountDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_countries(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let countries = ResortService::new(&state.db).countries().await?;

    Ok(Json(ApiResponse::ok(countries)))
}

/// Resort by ID or slug with its areas and members
#[utoipa::path(
    get,
    path = "/api/resorts/{id}",
    tag = RESORT_TAG,
    params(("id" = String, Path, description = "Resort ID or slug")),
    responses(
        (status = 200, description = "Resort found", body = ApiResponse<ResortDetailDto>),
        (status = 404, description = "Resort not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_resort(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let resort = ResortService::new(&state.db).detail(&id).await?;

    Ok(Json(ApiResponse::ok(resort)))
}

/// Trails of a resort
#[utoipa::path(
    get,
    path = "/api/resorts/{id}/trails",
    tag = RESORT_TAG,
    params(("id" = String, Path, description = "Resort ID or slug"), ResortTrailParams),
    responses(
        (status = 200, description = "Trails sorted by difficulty then name", body = ApiResponse<Vec<TrailDto>>),
        (status = 400, description = "Unknown filter value", body = ErrorDto),
        (status = 404, description = "Resort not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_resort_trails(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ResortTrailParams>,
) -> Result<impl IntoResponse, Error> {
    let trails = ResortService::new(&state.db).trails(&id, &params).await?;
    let count = trails.len() as u64;

    Ok(Json(ApiResponse::counted(trails, count)))
}

/// Lifts of a resort
#[utoipa::path(
    get,
    path = "/api/resorts/{id}/lifts",
    tag = RESORT_TAG,
    params(("id" = String, Path, description = "Resort ID or slug"), ResortLiftParams),
    responses(
        (status = 200, description = "Lifts sorted by aerialway kind then name", body = ApiResponse<Vec<LiftDto>>),
        (status = 400, description = "Unknown filter value", body = ErrorDto),
        (status = 404, description = "Resort not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_resort_lifts(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ResortLiftParams>,
) -> Result<impl IntoResponse, Error> {
    let lifts = ResortService::new(&state.db).lifts(&id, &params).await?;
    let count = lifts.len() as u64;

    Ok(Json(ApiResponse::counted(lifts, count)))
}

/// Trail and lift breakdowns of a resort
#[utoipa::path(
    get,
    path = "/api/resorts/{id}/stats",
    tag = RESORT_TAG,
    params(("id" = String, Path, description = "Resort ID or slug")),
    responses(
        (status = 200, description = "Resort statistics", body = ApiResponse<ResortStatsDto>),
        (status = 404, description = "Resort not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_resort_stats(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let stats = ResortService::new(&state.db).stats(&id).await?;

    Ok(Json(ApiResponse::ok(stats)))
}

/// Create a resort
///
/// Admin only.
#[utoipa::path(
    post,
    path = "/api/resorts",
    tag = RESORT_TAG,
    request_body = CreateResortDto,
    responses(
        (status = 201, description = "Resort created", body = ApiResponse<ResortDetailDto>),
        (status = 400, description = "Invalid resort", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_resort(
    State(state): State<AppState>,
    session: Session,
    Json(resort): Json<CreateResortDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;
    require_role(&user, &[UserRole::Admin])?;

    let resort = ResortService::new(&state.db).create(&resort).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(resort))))
}
