use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Account is locked after too many failed login attempts")]
    AccountLocked,
    #[error("Account is deactivated")]
    AccountDeactivated,
    #[error("User {0:?} lacks the role required for this action")]
    Forbidden(i32),
    #[error("A user is already registered with this email")]
    EmailAlreadyRegistered,
    #[error("User {0:?} reached the review limit")]
    ReviewLimitReached(i32),
    #[error("Failed to hash or verify password: {0}")]
    PasswordHash(String),
}

impl AuthError {
    fn respond(status: StatusCode, message: &str) -> Response {
        (status, Json(ErrorDto::new(message))).into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                Self::respond(StatusCode::UNAUTHORIZED, "Not authorized, please log in")
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                Self::respond(StatusCode::UNAUTHORIZED, "Not authorized, please log in")
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", self);

                Self::respond(StatusCode::UNAUTHORIZED, "Invalid credentials")
            }
            Self::AccountLocked => Self::respond(
                StatusCode::LOCKED,
                "Account temporarily locked due to too many failed login attempts",
            ),
            Self::AccountDeactivated => {
                Self::respond(StatusCode::FORBIDDEN, "Account has been deactivated")
            }
            Self::Forbidden(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                Self::respond(
                    StatusCode::FORBIDDEN,
                    "You do not have permission to perform this action",
                )
            }
            Self::EmailAlreadyRegistered => Self::respond(
                StatusCode::CONFLICT,
                "User already exists with this email",
            ),
            Self::ReviewLimitReached(_) => Self::respond(
                StatusCode::FORBIDDEN,
                "You have reached the maximum number of reviews",
            ),
            Self::PasswordHash(_) => InternalServerError(self).into_response(),
        }
    }
}
