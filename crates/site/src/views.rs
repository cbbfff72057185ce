//! Rendered-view cache and its invalidation signal.
//!
//! Public pages and the admin dashboard are rendered from the store and kept
//! here per locale. A successful mutation calls [`ViewCache::invalidate`] for
//! every view embedding the changed resource, so the next request renders
//! fresh data. Entries also expire on their own after [`VIEW_TTL`].

use std::future::Future;
use std::time::Duration;

use chrono::NaiveDate;
use mars_paper_core::Locale;
use moka::future::Cache;
use tracing::{debug, warn};

/// Upper bound on how long a rendered view is served.
pub const VIEW_TTL: Duration = Duration::from_secs(600);

const MAX_VIEWS: u64 = 1_000;

/// A cacheable view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ViewPath {
    /// `/admin`, as an invalidation target covering every dashboard render.
    Admin,
    /// `/admin` rendered on a given local calendar day.
    ///
    /// The dashboard's "today" counts depend on the date, so a render never
    /// outlives the day it was made on.
    Dashboard(NaiveDate),
    /// `/`
    Home,
    /// `/products`
    Products,
    /// `/products/{slug}`
    Product(String),
}

impl ViewPath {
    /// Whether invalidating `other` also invalidates this view.
    ///
    /// Each view is within itself. Product pages are within the listing and
    /// dashboard renders are within the admin view.
    #[must_use]
    pub fn is_within(&self, other: &Self) -> bool {
        self == other
            || matches!(
                (self, other),
                (Self::Product(_), Self::Products) | (Self::Dashboard(_), Self::Admin)
            )
    }
}

impl std::fmt::Display for ViewPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => f.write_str("/admin"),
            Self::Dashboard(day) => write!(f, "/admin@{day}"),
            Self::Home => f.write_str("/"),
            Self::Products => f.write_str("/products"),
            Self::Product(slug) => write!(f, "/products/{slug}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ViewKey {
    path: ViewPath,
    locale: Locale,
}

/// Rendered HTML per view and locale.
#[derive(Clone)]
pub struct ViewCache {
    cache: Cache<ViewKey, String>,
}

impl std::fmt::Debug for ViewCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewCache")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

impl Default for ViewCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewCache {
    #[must_use]
    pub fn new() -> Self {
        let cache = Cache::builder()
            .max_capacity(MAX_VIEWS)
            .time_to_live(VIEW_TTL)
            .support_invalidation_closures()
            .build();
        Self { cache }
    }

    /// Return the cached render of a view, or render and cache it.
    ///
    /// Failed renders are not cached.
    ///
    /// # Errors
    ///
    /// Returns whatever error `render` returns.
    pub async fn get_or_render<F, Fut, E>(
        &self,
        path: ViewPath,
        locale: Locale,
        render: F,
    ) -> Result<String, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String, E>>,
    {
        let key = ViewKey { path, locale };
        if let Some(html) = self.cache.get(&key).await {
            debug!(view = %key.path, locale = %key.locale, "View cache hit");
            return Ok(html);
        }

        let html = render().await?;
        self.cache.insert(key, html.clone()).await;
        Ok(html)
    }

    /// Cached render of a view, if any.
    pub async fn cached(&self, path: &ViewPath, locale: Locale) -> Option<String> {
        self.cache
            .get(&ViewKey {
                path: path.clone(),
                locale,
            })
            .await
    }

    /// Mark a view, in every locale, and the views nested below it as stale.
    pub async fn invalidate(&self, path: &ViewPath) {
        for locale in Locale::ALL {
            self.cache
                .invalidate(&ViewKey {
                    path: path.clone(),
                    locale,
                })
                .await;
        }

        let target = path.clone();
        if let Err(e) = self
            .cache
            .invalidate_entries_if(move |key, _| key.path.is_within(&target))
        {
            warn!(error = %e, view = %path, "Predicate invalidation failed, clearing all views");
            self.cache.invalidate_all();
        }
        debug!(view = %path, "View invalidated");
    }
}
