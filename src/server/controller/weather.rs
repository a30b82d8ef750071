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
        weather::{CreateWeatherDto, WeatherDto, WeatherHistoryParams},
    },
    server::{
        controller::util::get_user::{get_user_from_session, require_role},
        error::Error,
        model::app::AppState,
        service::weather::WeatherService,
    },
};

pub static WEATHER_TAG: &str = "weather";

/// Record a weather observation for a resort
///
/// Admins and resort managers only. The response carries the derived
/// skiing condition assessment.
#[utoipa::path(
    post,
    path = "/api/resorts/{id}/weather",
    tag = WEATHER_TAG,
    params(("id" = String, Path, description = "Resort ID or slug")),
    request_body = CreateWeatherDto,
    responses(
        (status = 201, description = "Observation stored", body = ApiResponse<WeatherDto>),
        (status = 400, description = "Observation values out of range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin or resort manager", body = ErrorDto),
        (status = 404, description = "Resort not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_weather(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(observation): Json<CreateWeatherDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;
    require_role(&user, &[UserRole::Admin, UserRole::ResortManager])?;

    let weather = WeatherService::new(&state.db)
        .record(&id, &observation)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(weather))))
}

/// Latest observation of a resort
#[utoipa::path(
    get,
    path = "/api/resorts/{id}/weather",
    tag = WEATHER_TAG,
    params(("id" = String, Path, description = "Resort ID or slug")),
    responses(
        (status = 200, description = "Latest observation", body = ApiResponse<WeatherDto>),
        (status = 404, description = "Resort or observation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_weather(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let weather = WeatherService::new(&state.db).current(&id).await?;

    Ok(Json(ApiResponse::ok(weather)))
}

#[utoipa::path(
    get,
    path = "/api/resorts/{id}/weather/history",
    tag = WEATHER_TAG,
    params(("id" = String, Path, description = "Resort ID or slug"), WeatherHistoryParams),
    responses(
        (status = 200, description = "Observations newest first", body = ApiResponse<Vec<WeatherDto>>),
        (status = 404, description = "Resort not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_weather_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<WeatherHistoryParams>,
) -> Result<impl IntoResponse, Error> {
    let history = WeatherService::new(&state.db).history(&id, &params).await?;
    let count = history.len() as u64;

    Ok(Json(ApiResponse::counted(history, count)))
}
