//! Request-boundary error type.
//!
//! Every handler failure is converted into an `AppError` and mapped to an
//! HTTP response here. Nothing propagates past the router; a failed request
//! never takes the process down.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::reference::loader::ReferenceError;

/// Fixed user-facing message for a form submission with missing fields.
pub const MSG_MISSING_FIELDS: &str = "Todos los campos son requeridos.";

#[derive(Debug, Error)]
pub enum AppError {
    /// A reference dataset could not be read or parsed.
    #[error("reference data unavailable: {0}")]
    DataUnavailable(#[from] ReferenceError),

    /// A required form field was empty or absent.
    #[error("missing required form fields")]
    MissingFields,

    /// A page template failed to render.
    #[error("template rendering failed: {0}")]
    Render(#[from] minijinja::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::DataUnavailable(err) => {
                tracing::error!("Error reading data files: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Error loading data").into_response()
            }
            // Expected user mistake, not a server fault.
            AppError::MissingFields => {
                (StatusCode::BAD_REQUEST, MSG_MISSING_FIELDS).into_response()
            }
            AppError::Render(err) => {
                tracing::error!("Error rendering page: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Error loading data").into_response()
            }
        }
    }
}
