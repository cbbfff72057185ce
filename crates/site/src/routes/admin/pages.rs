//! Management pages for team members, products and gallery items.
//!
//! Each page lists every record with an edit form and ends with a create
//! form. The page script posts the forms and reloads on success.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use mars_paper_core::GalleryIcon;

use crate::error::Result;
use crate::filters;
use crate::models::{GalleryItem, Product, Stored, TeamMember};
use crate::state::AppState;

/// Team management page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/team.html")]
pub struct TeamPageTemplate {
    pub members: Vec<Stored<TeamMember>>,
}

/// Product management page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/products.html")]
pub struct ProductsPageTemplate {
    pub products: Vec<Stored<Product>>,
}

/// Gallery management page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/gallery.html")]
pub struct GalleryPageTemplate {
    pub items: Vec<Stored<GalleryItem>>,
    pub icons: [GalleryIcon; 6],
}

pub async fn team(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(TeamPageTemplate {
        members: state.crud::<TeamMember>().list().await?,
    })
}

pub async fn products(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(ProductsPageTemplate {
        products: state.crud::<Product>().list().await?,
    })
}

pub async fn gallery(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(GalleryPageTemplate {
        items: state.crud::<GalleryItem>().list().await?,
        icons: GalleryIcon::ALL,
    })
}
