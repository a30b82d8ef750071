use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        review::{CreateReviewDto, FlagDto, ReviewDto, ReviewListParams, ReviewStatsDto, VoteDto},
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::review::ReviewService,
    },
};

pub static REVIEW_TAG: &str = "review";

/// Approved reviews of a resort, newest first
#[utoipa::path(
    get,
    path = "/api/resorts/{id}/reviews",
    tag = REVIEW_TAG,
    params(("id" = String, Path, description = "Resort ID or slug"), ReviewListParams),
    responses(
        (status = 200, description = "Page of reviews", body = ApiResponse<Vec<ReviewDto>>),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 404, description = "Resort not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ReviewListParams>,
) -> Result<impl IntoResponse, Error> {
    let (reviews, pagination) = ReviewService::new(&state.db).list(&id, &params).await?;

    Ok(Json(ApiResponse::paginated(reviews, pagination)))
}

#[utoipa::path(
    get,
    path = "/api/resorts/{id}/reviews/stats",
    tag = REVIEW_TAG,
    params(("id" = String, Path, description = "Resort ID or slug")),
    responses(
        (status = 200, description = "Rating distribution and category averages", body = ApiResponse<ReviewStatsDto>),
        (status = 404, description = "Resort not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_review_stats(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let stats = ReviewService::new(&state.db).stats(&id).await?;

    Ok(Json(ApiResponse::ok(stats)))
}

/// Write a review for a resort
///
/// # Responses
/// - 201 (Created): Review stored and resort rating refreshed
/// - 400 (Bad Request): Rating, title, content or visit date invalid
/// - 401 (Unauthorized): Not logged in
/// - 403 (Forbidden): Review limit reached
/// - 404 (Not Found): Resort does not exist
#[utoipa::path(
    post,
    path = "/api/resorts/{id}/reviews",
    tag = REVIEW_TAG,
    params(("id" = String, Path, description = "Resort ID or slug")),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = ApiResponse<ReviewDto>),
        (status = 400, description = "Invalid review", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Review limit reached", body = ErrorDto),
        (status = 404, description = "Resort not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(review): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let review = ReviewService::new(&state.db)
        .create(user.id, &id, &review)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(review))))
}

#[utoipa::path(
    post,
    path = "/api/reviews/{id}/vote",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review ID")),
    request_body = VoteDto,
    responses(
        (status = 200, description = "Vote counted", body = ApiResponse<ReviewDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn vote_review(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(vote): Json<VoteDto>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let review = ReviewService::new(&state.db).vote(id, vote.helpful).await?;

    Ok(Json(ApiResponse::ok(review)))
}

/// Flag a review for moderation
#[utoipa::path(
    post,
    path = "/api/reviews/{id}/flag",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review ID")),
    request_body = FlagDto,
    responses(
        (status = 200, description = "Review flagged", body = ApiResponse<ReviewDto>),
        (status = 400, description = "Missing or overlong reason", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn flag_review(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(flag): Json<FlagDto>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let review = ReviewService::new(&state.db).flag(id, &flag.reason).await?;

    Ok(Json(ApiResponse::ok(review)))
}

/// Delete one of your own reviews
#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Review belongs to another user", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    ReviewService::new(&state.db).delete(user.id, id).await?;

    Ok(Json(MessageDto::new("Review deleted successfully")))
}
