//! Generic create/update/delete/upload orchestrator for admin content.

use std::marker::PhantomData;

use tracing::{debug, error, info, instrument};

use super::messages::{self, ResourceMessages};
use super::{ActionOutcome, ActionResult};
use crate::error::AppError;
use crate::forms::{FormData, FromForm};
use crate::models::{GalleryItem, Product, Stored, TeamMember};
use crate::storage::{BlobStore, ImageFile, ImageUploader, UploadError};
use crate::store::{Record, Repository, ResourceStore, StoreError};
use crate::views::{ViewCache, ViewPath};

/// Content the admin panel manages.
pub trait ManagedResource: Record + FromForm {
    /// Name used in logs.
    const LABEL: &'static str;
    /// Object name prefix for uploaded images.
    const UPLOAD_PREFIX: &'static str;
    /// Result messages.
    const MESSAGES: ResourceMessages;

    /// Views that embed this resource.
    fn affected_views() -> Vec<ViewPath>;
}

impl ManagedResource for TeamMember {
    const LABEL: &'static str = "team member";
    const UPLOAD_PREFIX: &'static str = "team-images";
    const MESSAGES: ResourceMessages = messages::TEAM;

    fn affected_views() -> Vec<ViewPath> {
        vec![ViewPath::Admin, ViewPath::Home]
    }
}

impl ManagedResource for Product {
    const LABEL: &'static str = "product";
    const UPLOAD_PREFIX: &'static str = "product-images";
    const MESSAGES: ResourceMessages = messages::PRODUCTS;

    fn affected_views() -> Vec<ViewPath> {
        vec![ViewPath::Admin, ViewPath::Home, ViewPath::Products]
    }
}

impl ManagedResource for GalleryItem {
    const LABEL: &'static str = "gallery item";
    const UPLOAD_PREFIX: &'static str = "gallery-images";
    const MESSAGES: ResourceMessages = messages::GALLERY;

    fn affected_views() -> Vec<ViewPath> {
        vec![ViewPath::Admin, ViewPath::Home]
    }
}

/// Runs admin actions for one resource type.
///
/// Every action validates first and touches the store only with a fully
/// decoded record. A missing store or blob backend is reported as a
/// configuration error.
pub struct CrudService<'a, R> {
    store: Option<&'a dyn ResourceStore>,
    blobs: Option<&'a dyn BlobStore>,
    views: &'a ViewCache,
    _resource: PhantomData<fn() -> R>,
}

impl<'a, R: ManagedResource> CrudService<'a, R> {
    #[must_use]
    pub fn new(
        store: Option<&'a dyn ResourceStore>,
        blobs: Option<&'a dyn BlobStore>,
        views: &'a ViewCache,
    ) -> Self {
        Self {
            store,
            blobs,
            views,
            _resource: PhantomData,
        }
    }

    /// Add a record.
    #[instrument(skip(self, form), fields(resource = R::LABEL))]
    pub async fn create(&self, form: &FormData) -> ActionResult {
        let record = match R::from_form(form) {
            Ok(record) => record,
            Err(errors) => {
                debug!(fields = ?errors.keys().collect::<Vec<_>>(), "Validation failed");
                return ActionResult::invalid(errors);
            }
        };
        let Some(store) = self.store else {
            return not_configured("resource store");
        };

        match Repository::<R>::new(store).insert(&record).await {
            Ok(stored) => {
                info!(id = %stored.id, "Record created");
                self.invalidate().await;
                ActionResult::success(R::MESSAGES.created)
            }
            Err(e) => store_failure(&e, R::MESSAGES.create_failed),
        }
    }

    /// Replace every field of the record named by the form's `id`.
    #[instrument(skip(self, form), fields(resource = R::LABEL))]
    pub async fn update(&self, form: &FormData) -> ActionResult {
        let Some(id) = form.record_id() else {
            return ActionResult::failure(ActionOutcome::MissingId, messages::MISSING_UPDATE_ID);
        };
        let record = match R::from_form(form) {
            Ok(record) => record,
            Err(errors) => {
                debug!(fields = ?errors.keys().collect::<Vec<_>>(), "Validation failed");
                return ActionResult::invalid(errors);
            }
        };
        let Some(store) = self.store else {
            return not_configured("resource store");
        };

        match Repository::<R>::new(store).update(&id, &record).await {
            Ok(_) => {
                info!(id = %id, "Record updated");
                self.invalidate().await;
                ActionResult::success(R::MESSAGES.updated)
            }
            Err(e) => store_failure(&e, R::MESSAGES.update_failed),
        }
    }

    /// Delete the record named by the form's `id`. Deleting a missing
    /// record succeeds.
    #[instrument(skip(self, form), fields(resource = R::LABEL))]
    pub async fn delete(&self, form: &FormData) -> ActionResult {
        let Some(id) = form.record_id() else {
            return ActionResult::failure(ActionOutcome::MissingId, messages::MISSING_DELETE_ID);
        };
        let Some(store) = self.store else {
            return not_configured("resource store");
        };

        match Repository::<R>::new(store).delete(&id).await {
            Ok(()) => {
                info!(id = %id, "Record deleted");
                self.invalidate().await;
                ActionResult::success(R::MESSAGES.deleted)
            }
            Err(e) => store_failure(&e, R::MESSAGES.delete_failed),
        }
    }

    /// Upload an image for this resource and return its public URL.
    #[instrument(skip(self, file), fields(resource = R::LABEL))]
    pub async fn upload_image(&self, file: Option<ImageFile>) -> ActionResult {
        let Some(file) = file.filter(|f| !f.is_empty()) else {
            return ActionResult::failure(ActionOutcome::MissingFile, messages::NO_FILE);
        };
        let Some(blobs) = self.blobs else {
            return not_configured("blob storage");
        };

        match ImageUploader::new(blobs).upload(R::UPLOAD_PREFIX, file).await {
            Ok(url) => ActionResult::uploaded(messages::UPLOAD_OK, url),
            Err(UploadError::NoFile) => {
                ActionResult::failure(ActionOutcome::MissingFile, messages::NO_FILE)
            }
            Err(UploadError::UrlUnavailable(_)) => {
                ActionResult::failure(ActionOutcome::UploadFailed, messages::URL_UNAVAILABLE)
            }
            Err(_) => ActionResult::failure(ActionOutcome::UploadFailed, messages::UPLOAD_FAILED),
        }
    }

    /// Every record, in listing order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotConfigured`] without a store, or
    /// [`AppError::Store`] if reading fails.
    pub async fn list(&self) -> Result<Vec<Stored<R>>, AppError> {
        let store = self.store.ok_or(AppError::NotConfigured("resource store"))?;
        Ok(Repository::<R>::new(store).list().await?)
    }

    async fn invalidate(&self) {
        for view in R::affected_views() {
            self.views.invalidate(&view).await;
        }
    }
}

fn not_configured(backend: &str) -> ActionResult {
    error!(backend, "Backend not configured");
    ActionResult::failure(ActionOutcome::NotConfigured, messages::SERVER_CONFIG)
}

fn store_failure(err: &StoreError, message: &str) -> ActionResult {
    error!(error = %err, "Store operation failed");
    if err.is_internal() {
        ActionResult::failure(ActionOutcome::Unexpected, messages::UNEXPECTED)
    } else {
        ActionResult::failure(ActionOutcome::StoreFailed, message)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Bytes;
    use mars_paper_core::Locale;

    use super::*;
    use crate::storage::MemoryBlobStore;
    use crate::store::{Collection, MemoryStore};

    fn team_form() -> FormData {
        FormData::new()
            .with("name", "Aziz Karimov")
            .with("position", "Direktor")
            .with("achievements", "A, B, C")
    }

    #[tokio::test]
    async fn test_create_splits_achievements() {
        let store = MemoryStore::new();
        let views = ViewCache::new();
        let service = CrudService::<TeamMember>::new(Some(&store), None, &views);

        let result = service.create(&team_form()).await;
        assert!(result.success, "{result:?}");
        assert_eq!(result.message, messages::TEAM.created);

        let listed = service.list().await.unwrap();
        assert_eq!(listed[0].achievements, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_store() {
        let store = MemoryStore::new();
        let views = ViewCache::new();
        let service = CrudService::<TeamMember>::new(Some(&store), None, &views);

        let result = service.create(&FormData::new().with("name", "A")).await;
        assert!(!result.success);
        assert_eq!(result.outcome, ActionOutcome::Invalid);
        let errors = result.errors.unwrap();
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("position"));
        assert_eq!(store.operation_count(), 0);
    }

    #[tokio::test]
    async fn test_update_checks_id_first() {
        let store = MemoryStore::new();
        let views = ViewCache::new();
        let service = CrudService::<TeamMember>::new(Some(&store), None, &views);

        let result = service.update(&FormData::new()).await;
        assert_eq!(result.outcome, ActionOutcome::MissingId);
        assert_eq!(result.message, messages::MISSING_UPDATE_ID);
        assert!(result.errors.is_none());
        assert_eq!(store.operation_count(), 0);
    }

    #[tokio::test]
    async fn test_update_missing_record_fails() {
        let store = MemoryStore::new();
        let views = ViewCache::new();
        let service = CrudService::<TeamMember>::new(Some(&store), None, &views);

        let result = service.update(&team_form().with("id", "nope")).await;
        assert_eq!(result.outcome, ActionOutcome::StoreFailed);
        assert_eq!(result.message, messages::TEAM.update_failed);
    }

    #[tokio::test]
    async fn test_delete_twice_succeeds() {
        let store = MemoryStore::new();
        let views = ViewCache::new();
        let service = CrudService::<GalleryItem>::new(Some(&store), None, &views);
        let form = FormData::new().with("id", "17");

        assert!(service.delete(&form).await.success);
        assert!(service.delete(&form).await.success);
    }

    #[tokio::test]
    async fn test_store_failure_is_generic() {
        let store = MemoryStore::new();
        store.set_failing(true);
        let views = ViewCache::new();
        let service = CrudService::<TeamMember>::new(Some(&store), None, &views);

        let result = service.create(&team_form()).await;
        assert_eq!(result.outcome, ActionOutcome::StoreFailed);
        assert_eq!(result.message, messages::TEAM.create_failed);
        assert!(!result.message.contains("rejected"));
    }

    #[tokio::test]
    async fn test_missing_store_is_configuration_error() {
        let views = ViewCache::new();
        let service = CrudService::<Product>::new(None, None, &views);
        let result = service.delete(&FormData::new().with("id", "1")).await;
        assert_eq!(result.outcome, ActionOutcome::NotConfigured);
        assert_eq!(result.message, messages::SERVER_CONFIG);
    }

    #[tokio::test]
    async fn test_product_change_invalidates_listing() {
        let store = MemoryStore::new();
        let views = ViewCache::new();
        let detail = ViewPath::Product("a4".to_string());
        views
            .get_or_render(detail.clone(), Locale::Uz, || async {
                Ok::<_, std::convert::Infallible>("stale".to_string())
            })
            .await
            .unwrap();

        let service = CrudService::<Product>::new(Some(&store), None, &views);
        let form = FormData::new()
            .with("slug", "a4")
            .with("title_key", "product_a4_title")
            .with("description_key", "product_a4_desc")
            .with("price_per_unit", "45000")
            .with("unit_type", "pachka");
        assert!(service.create(&form).await.success);
        assert!(views.cached(&detail, Locale::Uz).await.is_none());
        assert_eq!(store.rows(Collection::Products).len(), 1);
    }

    #[tokio::test]
    async fn test_upload_rejects_empty_file() {
        let views = ViewCache::new();
        let blobs = MemoryBlobStore::new("https://storage.test/mars-paper-images");
        let service = CrudService::<TeamMember>::new(None, Some(&blobs), &views);

        let empty = ImageFile {
            file_name: Some("a.png".to_string()),
            content_type: Some("image/png".to_string()),
            bytes: Bytes::new(),
        };
        let result = service.upload_image(Some(empty)).await;
        assert_eq!(result.outcome, ActionOutcome::MissingFile);
        assert_eq!(result.message, messages::NO_FILE);

        let result = service.upload_image(None).await;
        assert_eq!(result.outcome, ActionOutcome::MissingFile);
        assert_eq!(blobs.put_count(), 0);
    }

    #[tokio::test]
    async fn test_upload_returns_url() {
        let views = ViewCache::new();
        let blobs = MemoryBlobStore::new("https://storage.test/mars-paper-images");
        let service = CrudService::<GalleryItem>::new(None, Some(&blobs), &views);

        let file = ImageFile {
            file_name: Some("zavod.jpg".to_string()),
            content_type: Some("image/jpeg".to_string()),
            bytes: Bytes::from_static(b"jpeg"),
        };
        let result = service.upload_image(Some(file)).await;
        assert!(result.success);
        let url = result.url.unwrap();
        assert!(url.starts_with("https://storage.test/mars-paper-images/gallery-images/"));
        assert!(url.ends_with(".jpg"));
    }

    #[tokio::test]
    async fn test_unresolvable_url_fails_upload() {
        let views = ViewCache::new();
        let blobs = MemoryBlobStore::new("https://storage.test").without_public_urls();
        let service = CrudService::<Product>::new(None, Some(&blobs), &views);

        let file = ImageFile {
            file_name: Some("a.png".to_string()),
            content_type: None,
            bytes: Bytes::from_static(b"png"),
        };
        let result = service.upload_image(Some(file)).await;
        assert!(!result.success);
        assert_eq!(result.message, messages::URL_UNAVAILABLE);
        assert!(result.url.is_none());
    }
}
