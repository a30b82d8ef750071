use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum NotFoundError {
    /// Resort looked up by id or slug
    #[error("Resort {0:?} not found")]
    Resort(String),
    #[error("Trail {0:?} not found")]
    Trail(i32),
    #[error("Lift {0:?} not found")]
    Lift(i32),
    #[error("Review {0:?} not found")]
    Review(i32),
    #[error("No weather data for resort {0:?}")]
    Weather(i32),
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        let message = match self {
            Self::Resort(_) => "Resort not found",
            Self::Trail(_) => "Trail not found",
            Self::Lift(_) => "Lift not found",
            Self::Review(_) => "Review not found",
            Self::Weather(_) => "No weather data found for this resort",
        };

        tracing::debug!("{}", self);

        (StatusCode::NOT_FOUND, Json(ErrorDto::new(message))).into_response()
    }
}
