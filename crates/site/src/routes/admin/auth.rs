//! Admin login and logout.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect, Response},
};
use tracing::info;

use crate::filters;
use crate::forms::FormData;
use crate::middleware::LOGIN_PATH;
use crate::services::authenticate;
use crate::state::AppState;

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    pub configured: bool,
}

/// Display the login page.
pub async fn login_page(State(state): State<AppState>) -> impl IntoResponse {
    LoginTemplate {
        configured: state.config().admin.is_complete(),
    }
}

/// Check credentials and start a session on success.
pub async fn login(State(state): State<AppState>, Form(form): Form<FormData>) -> Response {
    let result = authenticate(&state.config().admin, &form);
    if !result.success {
        return result.into_response();
    }

    let cookie = state.session().issue();
    ([(SET_COOKIE, cookie.encoded().to_string())], result).into_response()
}

/// End the session and return to the login page.
pub async fn logout(State(state): State<AppState>) -> Response {
    info!("Admin logged out");
    let cookie = state.session().revoke();
    (
        [(SET_COOKIE, cookie.encoded().to_string())],
        Redirect::to(LOGIN_PATH),
    )
        .into_response()
}
