//! Records kept in the resource store.
//!
//! Each collection has a plain field struct (what a form produces and what is
//! written) and is read back wrapped in [`Stored`], which adds the
//! store-assigned id and creation timestamp.

mod gallery;
mod product;
mod submission;
mod team;

pub use gallery::GalleryItem;
pub use product::Product;
pub use submission::{ContactMessage, ProductOrder};
pub use team::TeamMember;

use chrono::{DateTime, Utc};
use mars_paper_core::RecordId;
use serde::{Deserialize, Deserializer, Serialize};

/// A record as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<T> {
    pub id: RecordId,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub fields: T,
}

impl<T> std::ops::Deref for Stored<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.fields
    }
}

/// Deserialize a list column, treating `null` as empty.
fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
