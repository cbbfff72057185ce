//! Public contact and order submissions.
//!
//! One pipeline for both forms: validate, persist (best effort), relay to
//! the chat. Persisting and relaying are independent side effects. A failed
//! write is logged and the relay still runs; a failed relay leaves the
//! stored row in place.

use tracing::{debug, error, info, instrument, warn};

use super::messages;
use super::{ActionOutcome, ActionResult};
use crate::forms::{FormData, FromForm};
use crate::models::{ContactMessage, ProductOrder};
use crate::store::{Record, Repository, ResourceStore};
use crate::telegram::{Notifier, build_contact_message, build_order_message};
use crate::views::{ViewCache, ViewPath};

/// A public form whose submissions are stored and relayed.
pub trait Submission: Record + FromForm {
    /// Name used in logs.
    const LABEL: &'static str;
    /// Message on successful relay.
    const SENT: &'static str;
    /// Message when the chat rejects the relay.
    const RELAY_FAILED: &'static str;

    /// Chat message for this submission.
    fn chat_message(&self) -> String;
}

impl Submission for ContactMessage {
    const LABEL: &'static str = "contact message";
    const SENT: &'static str = messages::CONTACT_OK;
    const RELAY_FAILED: &'static str = messages::CONTACT_RELAY_FAILED;

    fn chat_message(&self) -> String {
        build_contact_message(self)
    }
}

impl Submission for ProductOrder {
    const LABEL: &'static str = "product order";
    const SENT: &'static str = messages::ORDER_OK;
    const RELAY_FAILED: &'static str = messages::ORDER_RELAY_FAILED;

    fn chat_message(&self) -> String {
        build_order_message(self)
    }
}

/// Runs the submission pipeline.
pub struct SubmissionService<'a> {
    store: Option<&'a dyn ResourceStore>,
    notifier: Option<&'a dyn Notifier>,
    views: &'a ViewCache,
}

impl<'a> SubmissionService<'a> {
    #[must_use]
    pub fn new(
        store: Option<&'a dyn ResourceStore>,
        notifier: Option<&'a dyn Notifier>,
        views: &'a ViewCache,
    ) -> Self {
        Self {
            store,
            notifier,
            views,
        }
    }

    /// Validate, store and relay one submission.
    #[instrument(skip(self, form), fields(kind = S::LABEL))]
    pub async fn submit<S: Submission>(&self, form: &FormData) -> ActionResult {
        let submission = match S::from_form(form) {
            Ok(submission) => submission,
            Err(errors) => {
                debug!(fields = ?errors.keys().collect::<Vec<_>>(), "Validation failed");
                return ActionResult::invalid(errors);
            }
        };

        self.persist(&submission).await;

        let Some(notifier) = self.notifier else {
            error!("Telegram bot token or chat id is not set");
            return ActionResult::failure(ActionOutcome::NotConfigured, messages::SERVER_CONFIG);
        };

        match notifier.relay(&submission.chat_message()).await {
            Ok(()) => {
                info!("Submission relayed");
                ActionResult::success(S::SENT)
            }
            Err(e) if e.is_network() => {
                ActionResult::failure(ActionOutcome::RelayFailed, messages::NETWORK_ERROR)
            }
            Err(_) => ActionResult::failure(ActionOutcome::RelayFailed, S::RELAY_FAILED),
        }
    }

    /// Write the submission. Failures are logged only.
    async fn persist<S: Submission>(&self, submission: &S) {
        let Some(store) = self.store else {
            warn!("Resource store not configured, submission not saved");
            return;
        };

        match Repository::<S>::new(store).insert(submission).await {
            Ok(stored) => {
                debug!(id = %stored.id, "Submission saved");
                self.views.invalidate(&ViewPath::Admin).await;
            }
            Err(e) => error!(error = %e, "Failed to save submission"),
        }
    }
}
