//! Telegram relay for contact messages and product orders.
//!
//! This module provides:
//! - [`Notifier`], the relay seam the submission pipeline talks to
//! - [`TelegramClient`], which posts to the Bot API `sendMessage` method
//! - Message builders producing HTML-formatted chat messages
//!
//! There is no retry and no queue. A failed relay is reported to the caller
//! as it happens.

mod client;
mod error;
mod messages;
mod types;

pub use client::TelegramClient;
pub use error::RelayError;
pub use messages::{build_contact_message, build_order_message, escape_html};
pub use types::{SendMessage, SendMessageResponse};

use async_trait::async_trait;

/// Outbound notification sink.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one formatted message.
    ///
    /// # Errors
    ///
    /// Returns a [`RelayError`] when the message was not acknowledged.
    async fn relay(&self, text: &str) -> Result<(), RelayError>;
}
