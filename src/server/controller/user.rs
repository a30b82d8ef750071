use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::ResortList;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        resort::ResortSummaryDto,
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// Favorite resorts of the logged in user
#[utoipa::path(
    get,
    path = "/api/user/favorites",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Favorite resorts, newest first", body = ApiResponse<Vec<ResortSummaryDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    saved_resorts(&state, &session, ResortList::Favorite).await
}

#[utoipa::path(
    post,
    path = "/api/user/favorites/{resort_id}",
    tag = USER_TAG,
    params(("resort_id" = i32, Path, description = "Resort ID")),
    responses(
        (status = 200, description = "Updated favorites", body = ApiResponse<Vec<ResortSummaryDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Resort not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(resort_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    save_resort(&state, &session, resort_id, ResortList::Favorite).await
}

#[utoipa::path(
    delete,
    path = "/api/user/favorites/{resort_id}",
    tag = USER_TAG,
    params(("resort_id" = i32, Path, description = "Resort ID")),
    responses(
        (status = 200, description = "Updated favorites", body = ApiResponse<Vec<ResortSummaryDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(resort_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    unsave_resort(&state, &session, resort_id, ResortList::Favorite).await
}

/// Wishlist resorts of the logged in user
#[utoipa::path(
    get,
    path = "/api/user/wishlist",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Wishlist resorts, newest first", body = ApiResponse<Vec<ResortSummaryDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_wishlist(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    saved_resorts(&state, &session, ResortList::Wishlist).await
}

#[utoipa::path(
    post,
    path = "/api/user/wishlist/{resort_id}",
    tag = USER_TAG,
    params(("resort_id" = i32, Path, description = "Resort ID")),
    responses(
        (status = 200, description = "Updated wishlist", body = ApiResponse<Vec<ResortSummaryDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Resort not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    session: Session,
    Path(resort_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    save_resort(&state, &session, resort_id, ResortList::Wishlist).await
}

#[utoipa::path(
    delete,
    path = "/api/user/wishlist/{resort_id}",
    tag = USER_TAG,
    params(("resort_id" = i32, Path, description = "Resort ID")),
    responses(
        (status = 200, description = "Updated wishlist", body = ApiResponse<Vec<ResortSummaryDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_from_wishlist(
    State(state): State<AppState>,
    session: Session,
    Path(resort_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    unsave_resort(&state, &session, resort_id, ResortList::Wishlist).await
}

async fn saved_resorts(
    state: &AppState,
    session: &Session,
    list: ResortList,
) -> Result<Json<ApiResponse<Vec<ResortSummaryDto>>>, Error> {
    let user = get_user_from_session(state, session).await?;

    let resorts = UserService::new(&state.db)
        .saved_resorts(user.id, list)
        .await?;
    let count = resorts.len() as u64;

    Ok(Json(ApiResponse::counted(resorts, count)))
}

async fn save_resort(
    state: &AppState,
    session: &Session,
    resort_id: i32,
    list: ResortList,
) -> Result<Json<ApiResponse<Vec<ResortSummaryDto>>>, Error> {
    let user = get_user_from_session(state, session).await?;

    let resorts = UserService::new(&state.db)
        .save_resort(user.id, resort_id, list)
        .await?;
    let count = resorts.len() as u64;

    Ok(Json(ApiResponse::counted(resorts, count)))
}

async fn unsave_resort(
    state: &AppState,
    session: &Session,
    resort_id: i32,
    list: ResortList,
) -> Result<Json<ApiResponse<Vec<ResortSummaryDto>>>, Error> {
    let user = get_user_from_session(state, session).await?;

    let resorts = UserService::new(&state.db)
        .unsave_resort(user.id, resort_id, list)
        .await?;
    let count = resorts.len() as u64;

    Ok(Json(ApiResponse::counted(resorts, count)))
}
