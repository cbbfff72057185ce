//! Route gate for the admin area.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::state::AppState;

/// Admin root path.
pub const ADMIN_PATH: &str = "/admin";
/// Admin login path.
pub const LOGIN_PATH: &str = "/admin/login";

/// What to do with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Continue,
    RedirectToLogin,
    RedirectToAdmin,
}

/// Decide a request from its path and whether it carries a session.
///
/// The login page is open to anonymous visitors and sends signed-in ones to
/// the dashboard. Every other admin path requires a session.
#[must_use]
pub fn gate(path: &str, authenticated: bool) -> GateDecision {
    if path == LOGIN_PATH || path == "/admin/login/" {
        return if authenticated {
            GateDecision::RedirectToAdmin
        } else {
            GateDecision::Continue
        };
    }

    let is_admin = path == ADMIN_PATH || path.starts_with("/admin/");
    if is_admin && !authenticated {
        GateDecision::RedirectToLogin
    } else {
        GateDecision::Continue
    }
}

/// Apply [`gate`] to every request.
pub async fn admin_gate_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    let authenticated = state.session().is_authenticated(request.headers());

    match gate(&path, authenticated) {
        GateDecision::Continue => next.run(request).await,
        GateDecision::RedirectToLogin => {
            debug!(path = %path, "No admin session, redirecting to login");
            Redirect::to(LOGIN_PATH).into_response()
        }
        GateDecision::RedirectToAdmin => Redirect::to(ADMIN_PATH).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous() {
        assert_eq!(gate("/admin", false), GateDecision::RedirectToLogin);
        assert_eq!(gate("/admin/team", false), GateDecision::RedirectToLogin);
        assert_eq!(gate("/admin/products/update", false), GateDecision::RedirectToLogin);
        assert_eq!(gate("/admin/login", false), GateDecision::Continue);
        assert_eq!(gate("/", false), GateDecision::Continue);
        assert_eq!(gate("/products/a4", false), GateDecision::Continue);
    }

    #[test]
    fn test_authenticated() {
        assert_eq!(gate("/admin", true), GateDecision::Continue);
        assert_eq!(gate("/admin/gallery", true), GateDecision::Continue);
        assert_eq!(gate("/admin/login", true), GateDecision::RedirectToAdmin);
    }

    #[test]
    fn test_prefix_is_segment_aware() {
        assert_eq!(gate("/administrator", false), GateDecision::Continue);
        assert_eq!(gate("/admin-notes", false), GateDecision::Continue);
    }
}
