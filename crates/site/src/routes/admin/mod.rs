//! Admin panel route handlers.
//!
//! Every path here except the login page sits behind the admin gate. Pages
//! render HTML; actions answer with a JSON [`crate::services::ActionResult`].

pub mod auth;
pub mod dashboard;
pub mod pages;
pub mod resource;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{MethodRouter, get, post},
};

use super::RateLimits;
use crate::middleware::login_rate_limiter;
use crate::models::{GalleryItem, Product, TeamMember};
use crate::services::ManagedResource;
use crate::state::AppState;

/// Create the admin routes router.
pub fn routes(limits: RateLimits) -> Router<AppState> {
    let login_action = match limits {
        RateLimits::Enabled => post(auth::login).layer(login_rate_limiter()),
        RateLimits::Disabled => post(auth::login),
    };

    Router::new()
        .route("/", get(dashboard::index))
        .route("/login", get(auth::login_page).merge(login_action))
        .route("/logout", post(auth::logout))
        .merge(managed::<TeamMember>("/team", get(pages::team)))
        .merge(managed::<Product>("/products", get(pages::products)))
        .merge(managed::<GalleryItem>("/gallery", get(pages::gallery)))
}

/// Management page plus the four mutations for one resource.
fn managed<R: ManagedResource>(path: &str, page: MethodRouter<AppState>) -> Router<AppState> {
    Router::new()
        .route(path, page.post(resource::create::<R>))
        .route(&format!("{path}/update"), post(resource::update::<R>))
        .route(&format!("{path}/delete"), post(resource::delete::<R>))
        .route(
            &format!("{path}/upload"),
            post(resource::upload::<R>).layer(DefaultBodyLimit::max(resource::UPLOAD_BODY_LIMIT)),
        )
}
