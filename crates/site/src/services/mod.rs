//! Orchestrators behind every form and admin action.
//!
//! Each operation composes validation, the store and blob adapters, the
//! relay and view invalidation, and folds every outcome into an
//! [`ActionResult`]. Nothing here returns an error to the handler.

pub mod auth;
pub mod crud;
pub mod dashboard;
pub mod messages;
pub mod submissions;

pub use auth::{AuthError, authenticate};
pub use crud::{CrudService, ManagedResource};
pub use dashboard::{AdminData, DashboardSummary, load_admin_data};
pub use submissions::{Submission, SubmissionService};

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::forms::FieldErrors;

/// Kind of outcome, used to choose the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Success,
    Invalid,
    MissingId,
    MissingFile,
    FileTooLarge,
    BadCredentials,
    StoreFailed,
    UploadFailed,
    RelayFailed,
    NotConfigured,
    Unexpected,
}

impl ActionOutcome {
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::Invalid => StatusCode::UNPROCESSABLE_ENTITY,
            Self::MissingId | Self::MissingFile => StatusCode::BAD_REQUEST,
            Self::FileTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::BadCredentials => StatusCode::UNAUTHORIZED,
            Self::StoreFailed | Self::UploadFailed | Self::RelayFailed => StatusCode::BAD_GATEWAY,
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Uniform result of a form submission or admin action.
///
/// Serialises as `{success, message, errors?, url?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip)]
    pub outcome: ActionOutcome,
}

impl ActionResult {
    #[must_use]
    pub fn success(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            errors: None,
            url: None,
            outcome: ActionOutcome::Success,
        }
    }

    /// Successful upload carrying the new public URL.
    #[must_use]
    pub fn uploaded(message: &str, url: String) -> Self {
        Self {
            url: Some(url),
            ..Self::success(message)
        }
    }

    #[must_use]
    pub fn failure(outcome: ActionOutcome, message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            errors: None,
            url: None,
            outcome,
        }
    }

    /// Validation failure with the first message per field.
    #[must_use]
    pub fn invalid(errors: FieldErrors) -> Self {
        Self {
            errors: Some(errors),
            ..Self::failure(ActionOutcome::Invalid, messages::INVALID_INPUT)
        }
    }
}

impl IntoResponse for ActionResult {
    fn into_response(self) -> Response {
        (self.outcome.status(), Json(self)).into_response()
    }
}
