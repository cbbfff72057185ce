//! Unified page error handling with Sentry integration.
//!
//! Page handlers return `Result<T, AppError>`. Server-side failures are
//! captured to Sentry before responding, and the client only ever sees a
//! short status message. Form actions do not use this type; they answer
//! with [`crate::services::ActionResult`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type for page handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Template rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// A backend the page needs is not configured.
    #[error("Not configured: {0}")]
    NotConfigured(&'static str),

    /// Page not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Store(e) if e.is_internal() => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(_) => StatusCode::BAD_GATEWAY,
            Self::Render(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Store(_) => "Ma'lumotlarni yuklashda xatolik yuz berdi.",
            Self::Render(_) | Self::Internal(_) => "Ichki server xatosi.",
            Self::NotConfigured(_) => "Server konfiguratsiyasi xatosi.",
            Self::NotFound(_) => "Sahifa topilmadi.",
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statuses() {
        assert_eq!(
            AppError::Store(StoreError::Request("down".into())).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::Store(StoreError::Decode("bad".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::NotConfigured("resource store").status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(AppError::NotFound("/x".into()).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_response_hides_detail() {
        let response = AppError::Internal("secret detail".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
