//! Application state shared across handlers.
//!
//! The composition root: configuration, the external backends, the view
//! cache and the session guard are built once at start-up and handed to
//! handlers through [`AppState`]. Tests swap in in-memory backends.

use std::sync::Arc;

use reqwest::Client;

use crate::config::SiteConfig;
use crate::error::AppError;
use crate::middleware::SessionGuard;
use crate::services::{AuthError, CrudService, ManagedResource, SubmissionService};
use crate::storage::{BlobStore, SupabaseStorage};
use crate::store::{ResourceStore, SupabaseStore};
use crate::telegram::{Notifier, TelegramClient};
use crate::views::ViewCache;

/// External collaborators. A `None` backend reports a configuration error
/// to the features that need it.
#[derive(Clone, Default)]
pub struct Backends {
    pub store: Option<Arc<dyn ResourceStore>>,
    pub blobs: Option<Arc<dyn BlobStore>>,
    pub notifier: Option<Arc<dyn Notifier>>,
}

impl std::fmt::Debug for Backends {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backends")
            .field("store", &self.store.is_some())
            .field("blobs", &self.blobs.is_some())
            .field("notifier", &self.notifier.is_some())
            .finish()
    }
}

impl Backends {
    /// Build the Supabase and Telegram clients the configuration allows,
    /// sharing one HTTP client.
    #[must_use]
    pub fn from_config(config: &SiteConfig, client: &Client) -> Self {
        let (store, blobs) = config.supabase.as_ref().map_or((None, None), |supabase| {
            let store: Arc<dyn ResourceStore> =
                Arc::new(SupabaseStore::new(client.clone(), supabase));
            let blobs: Arc<dyn BlobStore> =
                Arc::new(SupabaseStorage::new(client.clone(), supabase));
            (Some(store), Some(blobs))
        });

        let notifier = TelegramClient::from_config(client.clone(), &config.telegram)
            .map(|telegram| Arc::new(telegram) as Arc<dyn Notifier>);

        Self {
            store,
            blobs,
            notifier,
        }
    }
}

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    backends: Backends,
    views: ViewCache,
    session: SessionGuard,
}

impl AppState {
    /// Create the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the session guard cannot be keyed.
    pub fn new(config: SiteConfig, backends: Backends) -> Result<Self, AuthError> {
        let session = SessionGuard::from_config(&config)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                backends,
                views: ViewCache::new(),
                session,
            }),
        })
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the configured backends.
    #[must_use]
    pub fn backends(&self) -> &Backends {
        &self.inner.backends
    }

    /// Get a reference to the rendered-view cache.
    #[must_use]
    pub fn views(&self) -> &ViewCache {
        &self.inner.views
    }

    /// Get a reference to the admin session guard.
    #[must_use]
    pub fn session(&self) -> &SessionGuard {
        &self.inner.session
    }

    /// The resource store, or a configuration error for page handlers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotConfigured`] when Supabase is not configured.
    pub fn store(&self) -> Result<&dyn ResourceStore, AppError> {
        self.inner
            .backends
            .store
            .as_deref()
            .ok_or(AppError::NotConfigured("resource store"))
    }

    /// Admin actions for one resource type.
    #[must_use]
    pub fn crud<R: ManagedResource>(&self) -> CrudService<'_, R> {
        let backends = &self.inner.backends;
        CrudService::new(
            backends.store.as_deref(),
            backends.blobs.as_deref(),
            &self.inner.views,
        )
    }

    /// The public submission pipeline.
    #[must_use]
    pub fn submissions(&self) -> SubmissionService<'_> {
        let backends = &self.inner.backends;
        SubmissionService::new(
            backends.store.as_deref(),
            backends.notifier.as_deref(),
            &self.inner.views,
        )
    }
}
