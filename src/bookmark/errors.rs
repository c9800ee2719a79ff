//! # Bookmark Errors
//!
//! Error type returned by the bookmark handlers, the `{"error": {"message"}}`
//! envelope every failure is sent in, and the 500 carrier read by the
//! terminal error handler.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

use super::model::Field;

/// `{"error": {"message": ...}}`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorMessage,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorMessage {
                message: message.into(),
            },
        }
    }
}

/// Details of an unhandled failure, attached to the 500 response.
#[derive(Debug, Clone)]
pub struct ServerFailure {
    pub kind: &'static str,
    pub message: String,
}

impl ServerFailure {
    pub fn from_store(err: &StoreError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// 500 response, with or without the failure details.
    pub fn render(&self, expose_details: bool) -> Response {
        let body = if expose_details {
            json!({
                "message": self.message,
                "error": { "kind": self.kind, "message": self.message },
            })
        } else {
            json!({ "error": { "message": "server error" } })
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl IntoResponse for ServerFailure {
    fn into_response(self) -> Response {
        let mut response = self.render(false);
        response.extensions_mut().insert(self);
        response
    }
}

/// Result type for bookmark operations
pub type BookmarkResult<T> = Result<T, BookmarkError>;

/// Bookmark API errors
#[derive(Debug, Error)]
pub enum BookmarkError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Required field absent or null on create
    #[error("Missing '{0}' in request body")]
    MissingField(Field),

    /// Field present with the wrong JSON type
    #[error("'{}' must be {}", .0, .0.expected())]
    InvalidField(Field),

    /// Partial update without any recognized field
    #[error("Request body must contain either 'title', 'url', 'description', 'rating'")]
    EmptyUpdate,

    /// Body could not be read as a JSON object
    #[error("{message}")]
    InvalidBody { status: StatusCode, message: String },

    /// No bookmark with the requested id
    #[error("Bookmark doesn't exist")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Data store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BookmarkError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookmarkError::MissingField(_) => StatusCode::BAD_REQUEST,
            BookmarkError::InvalidField(_) => StatusCode::BAD_REQUEST,
            BookmarkError::EmptyUpdate => StatusCode::BAD_REQUEST,
            BookmarkError::InvalidBody { status, .. } => *status,
            BookmarkError::NotFound => StatusCode::NOT_FOUND,
            BookmarkError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for BookmarkError {
    fn from(rejection: JsonRejection) -> Self {
        BookmarkError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for BookmarkError {
    fn into_response(self) -> Response {
        match self {
            // Disclosure of store failures is decided by the terminal error handler.
            BookmarkError::Store(err) => ServerFailure::from_store(&err).into_response(),
            err => {
                let status = err.status_code();
                (status, Json(ErrorEnvelope::new(err.to_string()))).into_response()
            }
        }
    }
}
