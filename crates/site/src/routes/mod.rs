//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                   - Liveness check
//! GET  /                         - Landing page (?lang=uz|ru|en)
//! GET  /products                 - Product listing
//! GET  /products/{slug}          - Product detail with order form
//! POST /contact                  - Contact form (JSON result)
//! POST /orders                   - Product order form (JSON result)
//!
//! # Admin (session required except login)
//! GET  /admin/login              - Login page
//! POST /admin/login              - Login action (sets session cookie)
//! POST /admin/logout             - Clear session, redirect to login
//! GET  /admin                    - Dashboard
//! GET  /admin/{resource}         - Management page (team, products, gallery)
//! POST /admin/{resource}         - Create
//! POST /admin/{resource}/update  - Update (id in form)
//! POST /admin/{resource}/delete  - Delete (id in form)
//! POST /admin/{resource}/upload  - Image upload (multipart `file`)
//! ```

pub mod admin;
pub mod forms;
pub mod home;
pub mod products;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use mars_paper_core::Locale;
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::middleware::{admin_gate_middleware, form_rate_limiter, security_headers_middleware};
use crate::state::AppState;

/// Directory served under `/static`.
pub const STATIC_DIR: &str = "crates/site/static";

/// `?lang=` selector accepted by public pages.
#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

impl LangQuery {
    #[must_use]
    pub fn locale(&self) -> Locale {
        Locale::from_query(self.lang.as_deref())
    }
}

/// Whether the public form and login endpoints are rate limited.
///
/// Limiting keys on the client address, which only exists when the server
/// is started with connect info, so in-process tests run without it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimits {
    Enabled,
    Disabled,
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{slug}", get(products::show))
}

/// Create the public form routes router.
pub fn form_routes(limits: RateLimits) -> Router<AppState> {
    let router = Router::new()
        .route("/contact", post(forms::contact))
        .route("/orders", post(forms::order));

    match limits {
        RateLimits::Enabled => router.layer(form_rate_limiter()),
        RateLimits::Disabled => router,
    }
}

/// Create all routes for the site.
pub fn routes(limits: RateLimits) -> Router<AppState> {
    Router::new()
        // Landing page
        .route("/", get(home::home))
        // Product pages
        .nest("/products", product_routes())
        // Contact and order forms
        .merge(form_routes(limits))
        // Admin panel
        .nest("/admin", admin::routes(limits))
}

/// Build the complete application: routes, static files and the middleware
/// stack.
pub fn app(state: AppState, limits: RateLimits) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes(limits))
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            admin_gate_middleware,
        ))
        .layer(axum_middleware::from_fn(security_headers_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
