//! HTTP error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::error;

use super::responses::{ErrorCode, ErrorResponse};
use crate::state::{ChecklistError, StateError};

/// Error returned by handlers, rendered as an [`ErrorResponse`]
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse {
                code,
                message: message.into(),
            },
        }
    }
}

impl From<StateError> for ApiError {
    fn from(err: StateError) -> Self {
        let message = err.to_string();
        match err {
            StateError::Checklist(ChecklistError::EmptyText) => {
                Self::new(StatusCode::BAD_REQUEST, ErrorCode::Validation, message)
            }
            StateError::Checklist(ChecklistError::NotFound(_)) => {
                Self::new(StatusCode::NOT_FOUND, ErrorCode::NotFound, message)
            }
            StateError::Countdown(_) => {
                error!("Countdown unavailable: {}", message);
                Self::new(StatusCode::SERVICE_UNAVAILABLE, ErrorCode::Unavailable, message)
            }
            StateError::Poisoned(_) => {
                error!("{}", message);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::Internal, message)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
