//! Admin session flag.
//!
//! The session is a single signed cookie. Its value is `true.<tag>` where the
//! tag is an HMAC-SHA256 of the flag under a server-held key, so the flag
//! carries no identity but cannot be forged by setting the cookie by hand.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use cookie::time::Duration;
use cookie::{Cookie, SameSite};
use hmac::{Hmac, Mac};
use rand::Rng;
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::config::SiteConfig;
use crate::services::auth::AuthError;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "admin_session";

/// Session lifetime in seconds (7 days).
pub const SESSION_MAX_AGE_SECONDS: i64 = 7 * 24 * 60 * 60;

const FLAG: &str = "true";
const KEY_CONTEXT: &str = "mars-paper-admin-session";

/// Issues, checks and revokes the admin session cookie.
#[derive(Clone)]
pub struct SessionGuard {
    /// Expected cookie value.
    token: SecretString,
    /// Whether cookies carry the `Secure` attribute.
    secure: bool,
}

impl std::fmt::Debug for SessionGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionGuard")
            .field("token", &"[REDACTED]")
            .field("secure", &self.secure)
            .finish()
    }
}

impl SessionGuard {
    /// Create a guard signing with `key`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionKey`] if the MAC cannot be keyed.
    pub fn new(key: &[u8], secure: bool) -> Result<Self, AuthError> {
        let mut mac = Hmac::<Sha256>::new_from_slice(key)
            .map_err(|e| AuthError::SessionKey(e.to_string()))?;
        mac.update(SESSION_COOKIE_NAME.as_bytes());
        mac.update(b"=");
        mac.update(FLAG.as_bytes());
        let tag = hex::encode(mac.finalize().into_bytes());

        Ok(Self {
            token: SecretString::from(format!("{FLAG}.{tag}")),
            secure,
        })
    }

    /// Create a guard from configuration.
    ///
    /// The key is `ADMIN_SESSION_SECRET` when set. Otherwise it is derived
    /// from the admin credentials, so sessions survive restarts and end when
    /// the password changes. Without credentials a random key is used.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionKey`] if the MAC cannot be keyed.
    pub fn from_config(config: &SiteConfig) -> Result<Self, AuthError> {
        let secure = config.environment.is_production();
        let admin = &config.admin;

        if let Some(secret) = &admin.session_secret {
            return Self::new(secret.expose_secret().as_bytes(), secure);
        }

        if let (Some(phone), Some(password)) = (&admin.phone, &admin.password) {
            let key = Sha256::new()
                .chain_update(KEY_CONTEXT)
                .chain_update(":")
                .chain_update(phone)
                .chain_update(":")
                .chain_update(password.expose_secret())
                .finalize();
            return Self::new(&key, secure);
        }

        warn!("No admin credentials configured, using a random session key");
        let mut key = [0u8; 32];
        rand::rng().fill(&mut key);
        Self::new(&key, secure)
    }

    /// Whether a cookie value is a valid session flag.
    #[must_use]
    pub fn verify(&self, value: &str) -> bool {
        constant_time_compare(self.token.expose_secret(), value)
    }

    /// Cookie that starts a session.
    #[must_use]
    pub fn issue(&self) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE_NAME, self.token.expose_secret().to_string()))
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .path("/")
            .max_age(Duration::seconds(SESSION_MAX_AGE_SECONDS))
            .build()
    }

    /// Cookie that ends a session.
    #[must_use]
    pub fn revoke(&self) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE_NAME, ""))
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .path("/")
            .max_age(Duration::ZERO)
            .build()
    }

    /// Whether the request carries a valid session cookie.
    #[must_use]
    pub fn is_authenticated(&self, headers: &HeaderMap) -> bool {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(Cookie::split_parse)
            .filter_map(Result::ok)
            .any(|c| c.name() == SESSION_COOKIE_NAME && self.verify(c.value()))
    }
}

/// Constant-time string comparison to prevent timing attacks.
pub(crate) fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result: u8 = 0;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }

    result == 0
}
