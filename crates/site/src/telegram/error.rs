//! Relay errors.

use thiserror::Error;

/// Errors that can occur when relaying a message.
#[derive(Debug, Clone, Error)]
pub enum RelayError {
    /// The request never got a response.
    #[error("Telegram request failed: {0}")]
    Request(String),

    /// The response body could not be read.
    #[error("Telegram response error: {0}")]
    Response(String),

    /// Telegram answered but did not acknowledge the message.
    #[error("Telegram rejected message ({status}): {description}")]
    Rejected { status: u16, description: String },
}

impl RelayError {
    /// Whether the failure happened in transport rather than at Telegram.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Request(_))
    }
}
