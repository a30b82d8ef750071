use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    Field { field: String, message: String },
    #[error("Unknown {field} filter value {value:?}")]
    UnknownFilterValue { field: String, value: String },
}

impl ValidationError {
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        Self::Field {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn unknown_filter(field: &str, value: &str) -> Self {
        Self::UnknownFilterValue {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let body = match &self {
            Self::Field { field, message } => ErrorDto::with_error(message.clone(), field.clone()),
            Self::UnknownFilterValue { field, .. } => {
                ErrorDto::with_error(self.to_string(), field.clone())
            }
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
