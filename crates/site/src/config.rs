//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Server
//! - `SITE_HOST` - Bind address (default: 127.0.0.1)
//! - `SITE_PORT` - Listen port (default: 3000)
//! - `SITE_BASE_URL` - Public URL of the site (default: <http://localhost:3000>)
//! - `APP_ENV` - `production` or `development` (default: development)
//!
//! ## Admin panel
//! - `ADMIN_PHONE` - Phone number the administrator logs in with
//! - `ADMIN_PASSWORD` - Administrator password
//! - `ADMIN_SESSION_SECRET` - Key for signing the session cookie (min 32 chars).
//!   Derived from the admin credentials when unset.
//!
//! ## Supabase (tabular store and object storage)
//! - `SUPABASE_URL` - Project URL, e.g. `https://xyz.supabase.co`
//! - `SUPABASE_ANON_KEY` - API key used for both REST and Storage calls
//! - `SUPABASE_BUCKET` - Storage bucket for uploaded images (default: mars-paper-images)
//!
//! ## Telegram relay
//! - `TELEGRAM_BOT_TOKEN` - Bot token
//! - `TELEGRAM_CHAT_ID` - Chat that receives contact messages and orders
//! - `TELEGRAM_API_BASE` - Bot API base URL (default: <https://api.telegram.org>)
//!
//! ## Observability
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.0)
//! - `LOG_FORMAT` - `json` for structured logs, anything else for text
//!
//! Missing admin, Supabase or Telegram settings never stop the server. The
//! features that need them report a configuration error per request instead.

use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

const MIN_SESSION_SECRET_LENGTH: usize = 32;
const DEFAULT_BUCKET: &str = "mars-paper-images";
const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    #[default]
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("production") || value.eq_ignore_ascii_case("prod") {
            Self::Production
        } else {
            Self::Development
        }
    }

    /// Whether this is a production deployment.
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Site application configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site
    pub base_url: Url,
    /// Deployment environment
    pub environment: AppEnv,
    /// Admin login settings
    pub admin: AdminConfig,
    /// Supabase connection, if configured
    pub supabase: Option<SupabaseConfig>,
    /// Telegram relay settings
    pub telegram: TelegramConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate
    pub sentry_sample_rate: f32,
    /// Sentry transaction sample rate
    pub sentry_traces_sample_rate: f32,
    /// Log output format
    pub log_format: LogFormat,
}

/// Administrator credentials.
///
/// Implements `Debug` manually to redact secret fields.
#[derive(Clone, Default)]
pub struct AdminConfig {
    /// Phone number the administrator logs in with
    pub phone: Option<String>,
    /// Administrator password
    pub password: Option<SecretString>,
    /// Explicit session signing key
    pub session_secret: Option<SecretString>,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("phone", &self.phone)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field(
                "session_secret",
                &self.session_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Supabase connection settings, shared by the store and storage adapters.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct SupabaseConfig {
    /// Project URL
    pub url: Url,
    /// API key
    pub anon_key: SecretString,
    /// Bucket for uploaded images
    pub bucket: String,
}

impl std::fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("url", &self.url.as_str())
            .field("anon_key", &"[REDACTED]")
            .field("bucket", &self.bucket)
            .finish()
    }
}

/// Telegram bot settings.
///
/// Implements `Debug` manually to redact the bot token.
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot token
    pub bot_token: Option<SecretString>,
    /// Target chat id
    pub chat_id: Option<String>,
    /// Bot API base URL
    pub api_base: Url,
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &self.bot_token.as_ref().map(|_| "[REDACTED]"))
            .field("chat_id", &self.chat_id)
            .field("api_base", &self.api_base.as_str())
            .finish()
    }
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a malformed value or the
    /// session secret is too short.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Same as [`SiteConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env(lookup);

        let host = env
            .or_default("SITE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SITE_HOST".to_string(), e.to_string()))?;
        let port = env
            .or_default("SITE_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SITE_PORT".to_string(), e.to_string()))?;
        let base_url = parse_url("SITE_BASE_URL", &env.or_default("SITE_BASE_URL", "http://localhost:3000"))?;
        let environment = AppEnv::parse(&env.or_default("APP_ENV", "development"));

        let admin = AdminConfig::from_env(&env)?;
        let supabase = SupabaseConfig::from_env(&env)?;
        let telegram = TelegramConfig::from_env(&env)?;

        let sentry_sample_rate = parse_rate(&env, "SENTRY_SAMPLE_RATE", 1.0)?;
        let sentry_traces_sample_rate = parse_rate(&env, "SENTRY_TRACES_SAMPLE_RATE", 0.0)?;
        let log_format = match env.optional("LOG_FORMAT") {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            host,
            port,
            base_url,
            environment,
            admin,
            supabase,
            telegram,
            sentry_dsn: env.optional("SENTRY_DSN"),
            sentry_environment: env.optional("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
            log_format,
        })
    }

    /// Absolute public URL of a site path, for canonical links.
    #[must_use]
    pub fn page_url(&self, path: &str) -> String {
        self.base_url
            .join(path)
            .map_or_else(|_| self.base_url.to_string(), String::from)
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl AdminConfig {
    fn from_env<F: Fn(&str) -> Option<String>>(env: &Env<F>) -> Result<Self, ConfigError> {
        let session_secret = env.optional("ADMIN_SESSION_SECRET").map(SecretString::from);
        if let Some(secret) = &session_secret {
            validate_session_secret(secret, "ADMIN_SESSION_SECRET")?;
        }

        Ok(Self {
            phone: env.optional("ADMIN_PHONE"),
            password: env.optional("ADMIN_PASSWORD").map(SecretString::from),
            session_secret,
        })
    }

    /// Whether both login credentials are present.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.phone.is_some() && self.password.is_some()
    }
}

impl SupabaseConfig {
    fn from_env<F: Fn(&str) -> Option<String>>(
        env: &Env<F>,
    ) -> Result<Option<Self>, ConfigError> {
        let (Some(url), Some(anon_key)) = (env.optional("SUPABASE_URL"), env.optional("SUPABASE_ANON_KEY"))
        else {
            return Ok(None);
        };

        Ok(Some(Self {
            url: parse_url("SUPABASE_URL", &url)?,
            anon_key: SecretString::from(anon_key),
            bucket: env.or_default("SUPABASE_BUCKET", DEFAULT_BUCKET),
        }))
    }
}

impl TelegramConfig {
    fn from_env<F: Fn(&str) -> Option<String>>(env: &Env<F>) -> Result<Self, ConfigError> {
        Ok(Self {
            bot_token: env.optional("TELEGRAM_BOT_TOKEN").map(SecretString::from),
            chat_id: env.optional("TELEGRAM_CHAT_ID"),
            api_base: parse_url(
                "TELEGRAM_API_BASE",
                &env.or_default("TELEGRAM_API_BASE", DEFAULT_TELEGRAM_API_BASE),
            )?,
        })
    }

    /// Whether both the bot token and the chat id are present.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.bot_token.is_some() && self.chat_id.is_some()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Variable source wrapper that treats blank values as unset.
struct Env<F>(F);

impl<F: Fn(&str) -> Option<String>> Env<F> {
    /// Get an optional variable.
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Get a variable with a default value.
    fn or_default(&self, key: &str, default: &str) -> String {
        self.optional(key).unwrap_or_else(|| default.to_string())
    }
}

fn parse_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(url)
}

fn parse_rate<F: Fn(&str) -> Option<String>>(
    env: &Env<F>,
    key: &str,
    default: f32,
) -> Result<f32, ConfigError> {
    let Some(raw) = env.optional(key) else {
        return Ok(default);
    };
    let rate = raw
        .parse::<f32>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !(0.0..=1.0).contains(&rate) {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be between 0.0 and 1.0".to_string(),
        ));
    }
    Ok(rate)
}

/// Validate that a session secret meets minimum length requirements.
fn validate_session_secret(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let value = secret.expose_secret();
    if value.len() < MIN_SESSION_SECRET_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "must be at least {} characters (got {})",
                MIN_SESSION_SECRET_LENGTH,
                value.len()
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        SiteConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.base_url.as_str(), "http://localhost:3000/");
        assert_eq!(config.page_url("/products/a4"), "http://localhost:3000/products/a4");
        assert_eq!(config.environment, AppEnv::Development);
        assert!(config.supabase.is_none());
        assert!(!config.telegram.is_complete());
        assert_eq!(config.telegram.api_base.as_str(), "https://api.telegram.org/");
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_supabase_requires_both_values() {
        let config = config_from(&[("SUPABASE_URL", "https://xyz.supabase.co")]).unwrap();
        assert!(config.supabase.is_none());

        let config = config_from(&[
            ("SUPABASE_URL", "https://xyz.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
        ])
        .unwrap();
        let supabase = config.supabase.unwrap();
        assert_eq!(supabase.bucket, "mars-paper-images");
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = config_from(&[("TELEGRAM_BOT_TOKEN", "  "), ("TELEGRAM_CHAT_ID", "")]).unwrap();
        assert!(config.telegram.bot_token.is_none());
        assert!(config.telegram.chat_id.is_none());
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("SITE_PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "SITE_PORT"));
    }

    #[test]
    fn test_invalid_url_scheme() {
        let err = config_from(&[
            ("SUPABASE_URL", "ftp://xyz.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "SUPABASE_URL"));
    }

    #[test]
    fn test_short_session_secret_rejected() {
        let err = config_from(&[("ADMIN_SESSION_SECRET", "short")]).unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
    }

    #[test]
    fn test_production_and_json_logging() {
        let config = config_from(&[("APP_ENV", "production"), ("LOG_FORMAT", "JSON")]).unwrap();
        assert!(config.environment.is_production());
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_sample_rate_bounds() {
        assert!(config_from(&[("SENTRY_SAMPLE_RATE", "1.5")]).is_err());
        let config = config_from(&[("SENTRY_TRACES_SAMPLE_RATE", "0.25")]).unwrap();
        assert!((config.sentry_traces_sample_rate - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = config_from(&[
            ("ADMIN_PHONE", "+998901234567"),
            ("ADMIN_PASSWORD", "super_secret_password"),
            ("SUPABASE_URL", "https://xyz.supabase.co"),
            ("SUPABASE_ANON_KEY", "super_secret_anon_key"),
            ("TELEGRAM_BOT_TOKEN", "123:super_secret_bot_token"),
            ("TELEGRAM_CHAT_ID", "-100200300"),
        ])
        .unwrap();

        let debug_output = format!("{config:?}");

        assert!(debug_output.contains("+998901234567"));
        assert!(debug_output.contains("-100200300"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_password"));
        assert!(!debug_output.contains("super_secret_anon_key"));
        assert!(!debug_output.contains("super_secret_bot_token"));
    }
}
