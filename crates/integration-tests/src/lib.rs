//! Integration test harness for the Mars Paper site.
//!
//! [`TestApp`] builds the full router (gate, security headers, every route)
//! over in-memory backends, and sends requests through it with
//! `tower::ServiceExt::oneshot`. [`RecordingNotifier`] stands in for the
//! Telegram relay and keeps every message it was asked to send.
//!
//! ```rust,ignore
//! let app = TestApp::new();
//! let response = app.post_form("/contact", &[("firstName", "Ali"), ("phone", "+998901234567")]).await;
//! assert_eq!(response.json()["success"], true);
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use mars_paper_site::config::SiteConfig;
use mars_paper_site::routes::{self, RateLimits};
use mars_paper_site::state::{AppState, Backends};
use mars_paper_site::storage::{BlobStore, MemoryBlobStore};
use mars_paper_site::store::{MemoryStore, ResourceStore};
use mars_paper_site::telegram::{Notifier, RelayError};
use tower::ServiceExt;

/// Admin phone configured for every test app.
pub const ADMIN_PHONE: &str = "+998901112233";
/// Admin password configured for every test app.
pub const ADMIN_PASSWORD: &str = "secret-password";
/// Base of the public URLs produced by the in-memory blob store.
pub const BLOB_BASE: &str = "https://storage.test/public";

const BODY_LIMIT: usize = 4 * 1024 * 1024;

/// Notifier that records messages instead of sending them.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<String>>,
    failure: Mutex<Option<RelayError>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every later relay with a copy of `error`.
    pub fn fail_with(&self, error: RelayError) {
        *self.failure.lock().unwrap_or_else(PoisonError::into_inner) = Some(error);
    }

    /// Messages relayed so far.
    #[must_use]
    pub fn sent(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn relay(&self, text: &str) -> Result<(), RelayError> {
        if let Some(error) = self
            .failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            return Err(error);
        }
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_string());
        Ok(())
    }
}

/// Configuration with admin credentials and nothing else.
///
/// # Panics
///
/// Panics if the fixed test variables are rejected.
#[must_use]
pub fn test_config() -> SiteConfig {
    config_with(&[])
}

/// [`test_config`] plus extra variables.
///
/// # Panics
///
/// Panics if the variables are rejected.
#[must_use]
pub fn config_with(extra: &[(&str, &str)]) -> SiteConfig {
    let mut vars: HashMap<String, String> = [
        ("ADMIN_PHONE", ADMIN_PHONE),
        ("ADMIN_PASSWORD", ADMIN_PASSWORD),
        (
            "ADMIN_SESSION_SECRET",
            "integration-test-session-secret-0123456789",
        ),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    vars.extend(extra.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())));

    SiteConfig::from_lookup(|key| vars.get(key).cloned()).expect("test configuration is valid")
}

/// A response with its body read into memory.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Body parsed as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the body is not JSON.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is JSON")
    }

    /// The `Location` header, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// Every `Set-Cookie` header.
    #[must_use]
    pub fn set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect()
    }
}

/// The site router over in-memory backends.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub store: Arc<MemoryStore>,
    pub blobs: Arc<MemoryBlobStore>,
    pub notifier: Arc<RecordingNotifier>,
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    /// All backends configured and in memory.
    #[must_use]
    pub fn new() -> Self {
        Self::build(test_config(), true)
    }

    /// No store, blob or relay backend, as when Supabase and Telegram are
    /// not configured.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self::build(test_config(), false)
    }

    /// All backends in memory, with `config` instead of [`test_config`].
    #[must_use]
    pub fn with_config(config: SiteConfig) -> Self {
        Self::build(config, true)
    }

    /// Use `config` and the given notifier instead of the recording one.
    ///
    /// # Panics
    ///
    /// Panics if the session guard cannot be built from `config`.
    #[must_use]
    pub fn with_notifier(config: SiteConfig, notifier: Arc<dyn Notifier>) -> Self {
        let store = Arc::new(MemoryStore::new());
        let blobs = Arc::new(MemoryBlobStore::new(BLOB_BASE));
        let backends = Backends {
            store: Some(store.clone() as Arc<dyn ResourceStore>),
            blobs: Some(blobs.clone() as Arc<dyn BlobStore>),
            notifier: Some(notifier),
        };
        Self::assemble(config, backends, store, blobs, Arc::new(RecordingNotifier::new()))
    }

    fn build(config: SiteConfig, connected: bool) -> Self {
        let store = Arc::new(MemoryStore::new());
        let blobs = Arc::new(MemoryBlobStore::new(BLOB_BASE));
        let notifier = Arc::new(RecordingNotifier::new());
        let backends = if connected {
            Backends {
                store: Some(store.clone() as Arc<dyn ResourceStore>),
                blobs: Some(blobs.clone() as Arc<dyn BlobStore>),
                notifier: Some(notifier.clone() as Arc<dyn Notifier>),
            }
        } else {
            Backends::default()
        };
        Self::assemble(config, backends, store, blobs, notifier)
    }

    fn assemble(
        config: SiteConfig,
        backends: Backends,
        store: Arc<MemoryStore>,
        blobs: Arc<MemoryBlobStore>,
        notifier: Arc<RecordingNotifier>,
    ) -> Self {
        let state = AppState::new(config, backends).expect("session guard builds");
        let router = routes::app(state.clone(), RateLimits::Disabled);
        Self {
            router,
            state,
            store,
            blobs,
            notifier,
        }
    }

    /// `Cookie` header value carrying a valid admin session.
    #[must_use]
    pub fn admin_cookie(&self) -> String {
        let cookie = self.state.session().issue();
        format!("{}={}", cookie.name(), cookie.value())
    }

    /// Send a request through the router.
    ///
    /// # Panics
    ///
    /// Panics if the router fails or the body cannot be read.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), BODY_LIMIT)
            .await
            .expect("body is readable");
        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    /// `GET path` without a session.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.send(request(Method::GET, path, None, None)).await
    }

    /// `GET path` with an admin session.
    pub async fn get_as_admin(&self, path: &str) -> TestResponse {
        let cookie = self.admin_cookie();
        self.send(request(Method::GET, path, Some(&cookie), None)).await
    }

    /// URL-encoded `POST` without a session.
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        self.send(request(Method::POST, path, None, Some(fields))).await
    }

    /// URL-encoded `POST` with an admin session.
    pub async fn post_form_as_admin(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let cookie = self.admin_cookie();
        self.send(request(Method::POST, path, Some(&cookie), Some(fields)))
            .await
    }

    /// Multipart upload of one file in the `file` field, with an admin
    /// session.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built.
    pub async fn upload_as_admin(
        &self,
        path: &str,
        file_name: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> TestResponse {
        const BOUNDARY: &str = "mars-paper-test-boundary";
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::COOKIE, self.admin_cookie())
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .expect("valid request");
        self.send(request).await
    }
}

fn request(
    method: Method,
    path: &str,
    cookie: Option<&str>,
    fields: Option<&[(&str, &str)]>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let body = match fields {
        Some(fields) => {
            builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
            Body::from(encode_form(fields))
        }
        None => Body::empty(),
    };
    builder.body(body).expect("valid request")
}

/// `application/x-www-form-urlencoded` body.
#[must_use]
pub fn encode_form(fields: &[(&str, &str)]) -> String {
    let mut url = url::Url::parse("http://form.test/").expect("static URL parses");
    url.query_pairs_mut().extend_pairs(fields);
    url.query().unwrap_or_default().to_string()
}
