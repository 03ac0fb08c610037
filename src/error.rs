use std::any::Any;

use axum::{
    body::Body,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        }));
        (status, body).into_response()
    }
}

/// Router fallback for every path that has no entry in the route table.
pub async fn not_found(uri: Uri) -> AppError {
    warn!(path = %uri.path(), "No route matched");
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// Turns a handler panic into a JSON 500. With `detailed` set (Development)
/// the panic message is included in the body.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>, detailed: bool) -> Response<Body> {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    error!(panic = %detail, "Handler panicked");

    let message = if detailed {
        detail
    } else {
        "the request could not be completed".to_string()
    };
    AppError::Internal(message).into_response()
}
