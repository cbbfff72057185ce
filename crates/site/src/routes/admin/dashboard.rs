//! Admin dashboard.

use askama::Template;
use axum::{extract::State, response::Html};
use chrono::{DateTime, Local};
use mars_paper_core::Locale;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::models::{ContactMessage, ProductOrder, Stored};
use crate::services::{DashboardSummary, load_admin_data};
use crate::state::AppState;
use crate::views::ViewPath;

/// Number of messages and orders listed on the dashboard.
const RECENT_LIMIT: usize = 10;

/// Dashboard template.
#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub summary: DashboardSummary,
    pub recent_messages: Vec<Stored<ContactMessage>>,
    pub recent_orders: Vec<Stored<ProductOrder>>,
}

/// Display the dashboard.
///
/// The admin panel is Uzbek only, so the render is cached under the
/// default locale, keyed by the local day it was made on.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let now = Local::now();
    let html = state
        .views()
        .get_or_render(
            ViewPath::Dashboard(now.date_naive()),
            Locale::default(),
            || render(&state, now),
        )
        .await?;
    Ok(Html(html))
}

async fn render(state: &AppState, now: DateTime<Local>) -> Result<String> {
    let data = load_admin_data(state.store()?).await?;
    let page = DashboardTemplate {
        summary: DashboardSummary::compute(&data, &now),
        recent_messages: data.recent_messages(RECENT_LIMIT).to_vec(),
        recent_orders: data.recent_orders(RECENT_LIMIT).to_vec(),
    };
    Ok(page.render()?)
}
