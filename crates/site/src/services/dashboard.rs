//! Admin dashboard read aggregator.

use chrono::{DateTime, TimeZone};
use tracing::instrument;

use crate::models::{ContactMessage, GalleryItem, Product, ProductOrder, Stored, TeamMember};
use crate::store::{Repository, ResourceStore, StoreError};

/// Every collection, read in listing order.
#[derive(Debug, Clone, Default)]
pub struct AdminData {
    pub team: Vec<Stored<TeamMember>>,
    pub products: Vec<Stored<Product>>,
    pub gallery: Vec<Stored<GalleryItem>>,
    /// Newest first.
    pub messages: Vec<Stored<ContactMessage>>,
    /// Newest first.
    pub orders: Vec<Stored<ProductOrder>>,
}

impl AdminData {
    /// The `limit` most recent contact messages.
    #[must_use]
    pub fn recent_messages(&self, limit: usize) -> &[Stored<ContactMessage>] {
        self.messages
            .get(..self.messages.len().min(limit))
            .unwrap_or_default()
    }

    /// The `limit` most recent product orders.
    #[must_use]
    pub fn recent_orders(&self, limit: usize) -> &[Stored<ProductOrder>] {
        self.orders
            .get(..self.orders.len().min(limit))
            .unwrap_or_default()
    }
}

/// Counts shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardSummary {
    pub team_count: usize,
    pub product_count: usize,
    pub gallery_count: usize,
    pub messages_today: usize,
    pub orders_today: usize,
}

impl DashboardSummary {
    /// Count records, taking "today" as the calendar day of `now` in its
    /// own time zone.
    #[must_use]
    pub fn compute<Tz: TimeZone>(data: &AdminData, now: &DateTime<Tz>) -> Self {
        let tz = now.timezone();
        let today = now.date_naive();
        let is_today = |created_at: Option<&DateTime<chrono::Utc>>| {
            created_at.is_some_and(|ts| ts.with_timezone(&tz).date_naive() == today)
        };

        Self {
            team_count: data.team.len(),
            product_count: data.products.len(),
            gallery_count: data.gallery.len(),
            messages_today: data
                .messages
                .iter()
                .filter(|m| is_today(m.created_at.as_ref()))
                .count(),
            orders_today: data
                .orders
                .iter()
                .filter(|o| is_today(o.created_at.as_ref()))
                .count(),
        }
    }
}

/// Read every collection. Any failed read fails the whole load.
///
/// # Errors
///
/// Returns the first [`StoreError`] encountered.
#[instrument(skip(store))]
pub async fn load_admin_data(store: &dyn ResourceStore) -> Result<AdminData, StoreError> {
    let team = Repository::<TeamMember>::new(store);
    let products = Repository::<Product>::new(store);
    let gallery = Repository::<GalleryItem>::new(store);
    let messages = Repository::<ContactMessage>::new(store);
    let orders = Repository::<ProductOrder>::new(store);
    let (team, products, gallery, messages, orders) = tokio::try_join!(
        team.list(),
        products.list(),
        gallery.list(),
        messages.list(),
        orders.list(),
    )?;

    Ok(AdminData {
        team,
        products,
        gallery,
        messages,
        orders,
    })
}
