//! Error types for the piste server.
//!
//! Domain errors (authentication, configuration, validation, missing records)
//! each implement `IntoResponse` with their own status codes. Library errors
//! are converted through `#[from]` and reported as 500s.

pub mod auth;
pub mod config;
pub mod not_found;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, not_found::NotFoundError,
        validation::ValidationError,
    },
};

/// Main error type for the piste server.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid environment variables.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Session, credential or permission failure.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Request body or query parameter failed validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Requested record does not exist.
    #[error(transparent)]
    NotFoundError(#[from] NotFoundError),
    /// Failed to parse a value from string or other format.
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Outbound HTTP request failure.
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// File or socket failure.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// JSON encoding or decoding failure.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::NotFoundError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
