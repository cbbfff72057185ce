//! Landing page route handler.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use mars_paper_core::Locale;
use tracing::instrument;

use super::LangQuery;
use crate::content::{self, SiteText, Testimonial};
use crate::error::Result;
use crate::filters;
use crate::models::{GalleryItem, Product, Stored, TeamMember};
use crate::state::AppState;
use crate::store::Repository;
use crate::views::ViewPath;

/// Landing page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub locale: Locale,
    pub t: &'static SiteText,
    pub products: Vec<Stored<Product>>,
    pub team: Vec<Stored<TeamMember>>,
    pub gallery: Vec<Stored<GalleryItem>>,
    pub testimonials: &'static [Testimonial],
    pub contact_phone: &'static str,
    pub contact_email: &'static str,
    pub map_embed_url: String,
    pub directions_url: String,
    pub canonical_url: String,
}

/// Display the landing page.
#[instrument(skip(state))]
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> Result<Html<String>> {
    let locale = query.locale();
    let html = state
        .views()
        .get_or_render(ViewPath::Home, locale, || render(&state, locale))
        .await?;
    Ok(Html(html))
}

async fn render(state: &AppState, locale: Locale) -> Result<String> {
    let store = state.store()?;
    let products = Repository::<Product>::new(store);
    let team = Repository::<TeamMember>::new(store);
    let gallery = Repository::<GalleryItem>::new(store);
    let (products, team, gallery) =
        tokio::try_join!(products.list(), team.list(), gallery.list())?;

    let page = HomeTemplate {
        locale,
        t: content::text(locale),
        products,
        team,
        gallery,
        testimonials: content::testimonials(locale),
        contact_phone: content::CONTACT_PHONE,
        contact_email: content::CONTACT_EMAIL,
        map_embed_url: content::map_embed_url(),
        directions_url: content::directions_url(),
        canonical_url: state.config().page_url("/"),
    };
    Ok(page.render()?)
}
