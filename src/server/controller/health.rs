use axum::{response::IntoResponse, Json};

use crate::model::api::MessageDto;

pub static HEALTH_TAG: &str = "health";

/// Liveness message
#[utoipa::path(
    get,
    path = "/",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is running", body = MessageDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    Json(MessageDto::new("Piste API is running"))
}
