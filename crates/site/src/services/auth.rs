//! Admin login.
//!
//! A single shared credential pair (phone and password) from configuration.
//! Checks run in a fixed order: form validation, then configuration, then
//! the credential comparison.

use secrecy::ExposeSecret;
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

use super::messages;
use super::{ActionOutcome, ActionResult};
use crate::config::AdminConfig;
use crate::forms::{FormData, FromForm, LoginForm};
use crate::middleware::session::constant_time_compare;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Admin phone or password is not configured.
    #[error("admin credentials are not configured")]
    NotConfigured,

    /// Submitted credentials do not match.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The session signing key was rejected.
    #[error("invalid session key: {0}")]
    SessionKey(String),
}

/// Compare submitted credentials with the configured pair.
///
/// # Errors
///
/// Returns [`AuthError::NotConfigured`] when either secret is unset and
/// [`AuthError::InvalidCredentials`] when they do not match.
pub fn verify_credentials(admin: &AdminConfig, login: &LoginForm) -> Result<(), AuthError> {
    let (Some(phone), Some(password)) = (&admin.phone, &admin.password) else {
        return Err(AuthError::NotConfigured);
    };

    // Evaluate both comparisons so timing does not reveal which one failed.
    let phone_ok = constant_time_compare(phone.trim(), login.phone.as_str());
    let password_ok =
        constant_time_compare(password.expose_secret(), login.password.expose_secret());

    if phone_ok & password_ok {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

/// Check a login form. The caller issues the session cookie on success.
#[instrument(skip_all)]
pub fn authenticate(admin: &AdminConfig, form: &FormData) -> ActionResult {
    let login = match LoginForm::from_form(form) {
        Ok(login) => login,
        Err(errors) => {
            debug!("Login form invalid");
            return ActionResult::invalid(errors);
        }
    };

    match verify_credentials(admin, &login) {
        Ok(()) => {
            info!("Admin logged in");
            ActionResult::success(messages::LOGIN_OK)
        }
        Err(AuthError::InvalidCredentials) => {
            warn!("Admin login failed");
            ActionResult::failure(ActionOutcome::BadCredentials, messages::BAD_CREDENTIALS)
        }
        Err(e) => {
            error!(error = %e, "Admin login unavailable");
            ActionResult::failure(ActionOutcome::NotConfigured, messages::SERVER_CONFIG)
        }
    }
}
