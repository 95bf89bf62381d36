use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::http::response::ResponseBody;
use crate::service::ServiceError;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal error server";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found: {message}")]
    NotFound { message: String },
    #[error("internal error")]
    Internal { message: String },
    /// Internal failure answered with a bare status and no body.
    #[error("internal error")]
    InternalEmpty { message: String },
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn internal_empty(message: impl Into<String>) -> Self {
        Self::InternalEmpty {
            message: message.into(),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::VehiclesNotFound => Self::not_found(err.to_string()),
            ServiceError::Repository(source) => Self::internal(source.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { message } => (
                StatusCode::NOT_FOUND,
                Json(ResponseBody::error(message)),
            )
                .into_response(),
            Self::Internal { message } => {
                tracing::error!(error = %message, "request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ResponseBody::error(INTERNAL_ERROR_MESSAGE)),
                )
                    .into_response()
            }
            Self::InternalEmpty { message } => {
                tracing::error!(error = %message, "request failed with internal error");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
