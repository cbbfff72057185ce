//! Resource store adapter.
//!
//! [`ResourceStore`] is the uniform interface over the remote tabular store:
//! insert, update, delete and ordered listing of JSON rows per
//! [`Collection`]. [`Repository`] layers typed records on top of it.
//!
//! Two implementations are provided:
//! - [`SupabaseStore`] talks to a Supabase (`PostgREST`) project over HTTP.
//! - [`MemoryStore`] keeps rows in process, for tests and local development.

mod memory;
mod supabase;

pub use memory::MemoryStore;
pub use supabase::SupabaseStore;

use std::marker::PhantomData;

use async_trait::async_trait;
use mars_paper_core::RecordId;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{ContactMessage, GalleryItem, Product, ProductOrder, Stored, TeamMember};

/// A JSON row as exchanged with the store.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// The collections (tables) the site reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    TeamMembers,
    Products,
    GalleryItems,
    ContactMessages,
    ProductOrders,
}

impl Collection {
    /// Table name in the store.
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::TeamMembers => "team_members",
            Self::Products => "products",
            Self::GalleryItems => "gallery_items",
            Self::ContactMessages => "contact_messages",
            Self::ProductOrders => "product_orders",
        }
    }

    /// Listing order by creation time.
    ///
    /// Content collections read oldest first, so the site shows them in the
    /// order they were added. Submissions read newest first.
    #[must_use]
    pub const fn listing_order(self) -> SortOrder {
        match self {
            Self::TeamMembers | Self::Products | Self::GalleryItems => SortOrder::Ascending,
            Self::ContactMessages | Self::ProductOrders => SortOrder::Descending,
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table())
    }
}

/// Sort direction on `created_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// `PostgREST` spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Errors from the resource store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport failure before a response arrived.
    #[error("store request failed: {0}")]
    Request(String),

    /// The store answered with an error status.
    #[error("store returned {status}: {message}")]
    Api { status: u16, message: String },

    /// An update matched no row.
    #[error("no {collection} row with id {id}")]
    NotFound { collection: Collection, id: RecordId },

    /// The store is switched off (used by the in-memory store's fault switch).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A record could not be turned into a row.
    #[error("failed to encode row: {0}")]
    Encode(String),

    /// A row could not be read as the expected record.
    #[error("failed to decode row: {0}")]
    Decode(String),
}

impl StoreError {
    /// Whether the failure came from our own data handling rather than the
    /// store.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Encode(_) | Self::Decode(_))
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.to_string())
    }
}

/// Uniform row-level access to the remote store.
///
/// Single-row operations are atomic in the store: an insert or update
/// either applies every field or none.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Insert a row; the store assigns `id` and `created_at`.
    async fn insert(&self, collection: Collection, row: Row) -> Result<Row, StoreError>;

    /// Replace the fields of the row with `id`.
    ///
    /// Returns [`StoreError::NotFound`] when no row matches.
    async fn update(&self, collection: Collection, id: &RecordId, row: Row)
    -> Result<Row, StoreError>;

    /// Delete the row with `id`. Deleting a missing row succeeds.
    async fn delete(&self, collection: Collection, id: &RecordId) -> Result<(), StoreError>;

    /// All rows ordered by `created_at`.
    async fn list(&self, collection: Collection, order: SortOrder)
    -> Result<Vec<Row>, StoreError>;
}

/// A record type that lives in one collection.
pub trait Record: Serialize + DeserializeOwned + Send + Sync + 'static {
    const COLLECTION: Collection;
}

impl Record for TeamMember {
    const COLLECTION: Collection = Collection::TeamMembers;
}

impl Record for Product {
    const COLLECTION: Collection = Collection::Products;
}

impl Record for GalleryItem {
    const COLLECTION: Collection = Collection::GalleryItems;
}

impl Record for ContactMessage {
    const COLLECTION: Collection = Collection::ContactMessages;
}

impl Record for ProductOrder {
    const COLLECTION: Collection = Collection::ProductOrders;
}

/// Typed access to one collection.
pub struct Repository<'a, R> {
    store: &'a dyn ResourceStore,
    _record: PhantomData<fn() -> R>,
}

impl<'a, R: Record> Repository<'a, R> {
    #[must_use]
    pub fn new(store: &'a dyn ResourceStore) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Insert a record and return it as stored.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if encoding, the store call or decoding fails.
    pub async fn insert(&self, record: &R) -> Result<Stored<R>, StoreError> {
        let row = self.store.insert(R::COLLECTION, to_row(record)?).await?;
        from_row(row)
    }

    /// Replace a record's fields.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has `id`.
    pub async fn update(&self, id: &RecordId, record: &R) -> Result<Stored<R>, StoreError> {
        let row = self.store.update(R::COLLECTION, id, to_row(record)?).await?;
        from_row(row)
    }

    /// Delete a record. Missing ids are not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the store call fails.
    pub async fn delete(&self, id: &RecordId) -> Result<(), StoreError> {
        self.store.delete(R::COLLECTION, id).await
    }

    /// All records in the collection's listing order.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the store call fails or any row does not
    /// decode.
    pub async fn list(&self) -> Result<Vec<Stored<R>>, StoreError> {
        self.store
            .list(R::COLLECTION, R::COLLECTION.listing_order())
            .await?
            .into_iter()
            .map(from_row)
            .collect()
    }
}

fn to_row<R: Serialize>(record: &R) -> Result<Row, StoreError> {
    match serde_json::to_value(record) {
        Ok(serde_json::Value::Object(row)) => Ok(row),
        Ok(other) => Err(StoreError::Encode(format!("expected an object, got {other}"))),
        Err(e) => Err(StoreError::Encode(e.to_string())),
    }
}

fn from_row<R: DeserializeOwned>(row: Row) -> Result<Stored<R>, StoreError> {
    serde_json::from_value(serde_json::Value::Object(row))
        .map_err(|e| StoreError::Decode(e.to_string()))
}
