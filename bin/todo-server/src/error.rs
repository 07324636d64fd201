//! Unified server error type.
//!
//! Every handler returns `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`] so errors are automatically converted
//! to an HTML-fragment response with an appropriate status code.
//!
//! Internal errors (Store, Render) are logged with full detail but only a
//! generic message is returned to the caller, so SQL and template details
//! never leak to clients.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use todo_render::{error_fragment, RenderError};
use tracing::error;

use crate::store::StoreError;

/// All errors that can occur in the todo-server request lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Propagated from the record store.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// A template failed to render.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// The caller sent an invalid or malformed request.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// An unclassified internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, client_message) = match &self {
            ServerError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),

            ServerError::Store(e) => {
                error!(error = %e, "store error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            }
            ServerError::Render(e) => {
                error!(error = %e, "render error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            }
            ServerError::Internal(m) => {
                error!(message = %m, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            }
        };
        (status, Html(error_fragment(&client_message))).into_response()
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(e: anyhow::Error) -> Self {
        error!(error = ?e, "converting anyhow error to ServerError::Internal");
        ServerError::Internal(e.to_string())
    }
}
