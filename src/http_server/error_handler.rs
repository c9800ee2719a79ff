//! # Terminal Error Handler
//!
//! Handlers never decide how much of a server failure to disclose. They
//! return a production-safe 500 carrying a [`ServerFailure`] extension; the
//! [`error_handler`] middleware logs it and, outside production, swaps in a
//! body exposing the failure.

use std::any::Any;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::bookmark::{ErrorEnvelope, ServerFailure};
use crate::config::Environment;

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    }
}

/// Response for `CatchPanicLayer`
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    ServerFailure {
        kind: "panic",
        message: panic_message(payload.as_ref()),
    }
    .into_response()
}

/// Router fallback for paths no route matches.
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorEnvelope::new("Not found"))).into_response()
}

/// Terminal error handling middleware.
pub async fn error_handler(
    State(environment): State<Environment>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    let Some(failure) = response.extensions().get::<ServerFailure>() else {
        return response;
    };

    tracing::error!(
        %method,
        path = %path,
        kind = failure.kind,
        error = %failure.message,
        "request failed"
    );
    failure.render(!environment.is_production())
}
