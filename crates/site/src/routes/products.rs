//! Product route handlers.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use mars_paper_core::Locale;
use tracing::instrument;

use super::LangQuery;
use crate::content::{self, SiteText};
use crate::error::{AppError, Result};
use crate::filters;
use crate::models::{Product, Stored};
use crate::state::AppState;
use crate::store::Repository;
use crate::views::ViewPath;

/// Product listing page template.
#[derive(Template)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub locale: Locale,
    pub t: &'static SiteText,
    pub products: Vec<Stored<Product>>,
    pub canonical_url: String,
}

/// Product detail page template.
#[derive(Template)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub locale: Locale,
    pub t: &'static SiteText,
    pub product: Stored<Product>,
    pub canonical_url: String,
}

/// Display product listing page.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> Result<Html<String>> {
    let locale = query.locale();
    let html = state
        .views()
        .get_or_render(ViewPath::Products, locale, || render_index(&state, locale))
        .await?;
    Ok(Html(html))
}

/// Display product detail page.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<LangQuery>,
) -> Result<Html<String>> {
    let locale = query.locale();
    let view = ViewPath::Product(slug.clone());
    let html = state
        .views()
        .get_or_render(view, locale, || render_show(&state, &slug, locale))
        .await?;
    Ok(Html(html))
}

async fn render_index(state: &AppState, locale: Locale) -> Result<String> {
    let products = Repository::<Product>::new(state.store()?).list().await?;
    let page = ProductsIndexTemplate {
        locale,
        t: content::text(locale),
        products,
        canonical_url: state.config().page_url("/products"),
    };
    Ok(page.render()?)
}

async fn render_show(state: &AppState, slug: &str, locale: Locale) -> Result<String> {
    let product = find_by_slug(state, slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("/products/{slug}")))?;
    let page = ProductShowTemplate {
        locale,
        t: content::text(locale),
        canonical_url: state.config().page_url(&format!("/products/{slug}")),
        product,
    };
    Ok(page.render()?)
}

async fn find_by_slug(state: &AppState, slug: &str) -> Result<Option<Stored<Product>>> {
    let products = Repository::<Product>::new(state.store()?).list().await?;
    Ok(products.into_iter().find(|p| p.slug == slug))
}
