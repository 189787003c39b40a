// Application error carried from handlers to the terminal rendering stage.
//
// Purpose
// - One tagged error type with a required status code and message, plus an
//   optional detail string that is only ever shown outside production.

use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
    pub detail: Option<String>,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// The catch-all 404 raised when no router or static file matched.
    pub fn route_not_found(method: &Method, uri: &Uri) -> Self {
        Self::new(StatusCode::NOT_FOUND, format!("no route for {method} {uri}"))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "could not parse request body")
            .with_detail(detail)
    }

    pub fn unsupported_media_type() -> Self {
        Self::new(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "expected a JSON or URL-encoded form body",
        )
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            .with_detail(detail)
    }
}

// Handlers use these to map constraint violations to 4xx codes instead of
// letting them default to 500.

pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation())
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::internal(err.to_string())
    }
}

impl From<tera::Error> for AppError {
    fn from(err: tera::Error) -> Self {
        use std::error::Error as _;

        // The renderer hides the interesting part in its source chain.
        let mut parts = vec![err.to_string()];
        let mut source = err.source();
        while let Some(inner) = source {
            parts.push(inner.to_string());
            source = inner.source();
        }
        Self::internal(parts.join(": "))
    }
}

impl IntoResponse for AppError {
    /// The response body stays empty here; the terminal stage in the shell
    /// pulls the error back out of the extensions and renders the error view.
    fn into_response(self) -> Response {
        let mut response = self.status.into_response();
        response.extensions_mut().insert(self);
        response
    }
}
