//! Translation of service failures into HTTP responses.
//!
//! Only client mistakes carry a body. Missing accounts answer with a bare 404 like the
//! lookup routes do, and everything else becomes a bare 500 after being logged.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::DomainError;

/// Body of a 400 response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request body could not be read as an account
    #[error("{0}")]
    BadBody(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Domain(e @ DomainError::Validation { .. }) => bad_request(e.to_string()),
            ApiError::BadBody(message) => bad_request(message),
            ApiError::Domain(DomainError::NotFound { id }) => {
                tracing::debug!(account_id = %id, "account not found");
                StatusCode::NOT_FOUND.into_response()
            }
            ApiError::Domain(e @ DomainError::Db(_)) => {
                tracing::error!(error = %e, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

fn bad_request(message: String) -> Response {
    let status = StatusCode::BAD_REQUEST;
    let body = ErrorResponse {
        status_code: status.as_u16(),
        message,
    };
    (status, Json(body)).into_response()
}
