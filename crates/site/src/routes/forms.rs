//! Public form handlers.
//!
//! Both endpoints accept URL-encoded forms and answer with the JSON
//! [`ActionResult`] the page script renders inline.

use axum::{Form, extract::State};

use crate::forms::FormData;
use crate::models::{ContactMessage, ProductOrder};
use crate::services::ActionResult;
use crate::state::AppState;

/// Handle the landing page contact form.
pub async fn contact(State(state): State<AppState>, Form(form): Form<FormData>) -> ActionResult {
    state.submissions().submit::<ContactMessage>(&form).await
}

/// Handle the product page order form.
pub async fn order(State(state): State<AppState>, Form(form): Form<FormData>) -> ActionResult {
    state.submissions().submit::<ProductOrder>(&form).await
}
