//! Blob upload adapter for images.
//!
//! [`BlobStore`] puts bytes at a path and resolves public URLs.
//! [`ImageUploader`] picks a collision-free path for each uploaded file.

mod memory;
mod supabase;

pub use memory::MemoryBlobStore;
pub use supabase::SupabaseStorage;

use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use axum::body::Bytes;
use rand::Rng;
use rand::distr::Alphanumeric;
use thiserror::Error;
use tracing::{error, info, instrument};

/// Length of the random token in generated object names.
const TOKEN_LEN: usize = 13;

/// Extension used when the uploaded file name has none.
const FALLBACK_EXTENSION: &str = "bin";

/// Errors from uploading a file.
#[derive(Debug, Error)]
pub enum UploadError {
    /// No file, or an empty one, was submitted.
    #[error("no file selected")]
    NoFile,

    /// An object already exists at the path; uploads never overwrite.
    #[error("object already exists at {0}")]
    AlreadyExists(String),

    /// Transport failure.
    #[error("upload request failed: {0}")]
    Request(String),

    /// Storage answered with an error status.
    #[error("storage returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The bytes were stored but no public URL could be produced.
    #[error("could not resolve public URL for {0}")]
    UrlUnavailable(String),
}

impl From<reqwest::Error> for UploadError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.to_string())
    }
}

/// Object storage for uploaded images.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `bytes` at `path`. Fails with [`UploadError::AlreadyExists`]
    /// rather than replacing an existing object.
    async fn put(&self, path: &str, bytes: Bytes, content_type: &str) -> Result<(), UploadError>;

    /// Public URL of the object at `path`, if one can be produced.
    fn public_url(&self, path: &str) -> Option<String>;
}

/// A file received from an upload form.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl ImageFile {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Uploads images under a name prefix.
pub struct ImageUploader<'a> {
    blobs: &'a dyn BlobStore,
}

impl<'a> ImageUploader<'a> {
    #[must_use]
    pub fn new(blobs: &'a dyn BlobStore) -> Self {
        Self { blobs }
    }

    /// Upload `file` below `prefix` and return its public URL.
    ///
    /// # Errors
    ///
    /// - [`UploadError::NoFile`] for an empty file, before any network call.
    /// - [`UploadError::UrlUnavailable`] when the bytes were stored but no
    ///   public URL is available; callers treat this as a failed upload.
    /// - Any error from the underlying store.
    #[instrument(skip(self, file), fields(size = file.bytes.len()))]
    pub async fn upload(&self, prefix: &str, file: ImageFile) -> Result<String, UploadError> {
        if file.is_empty() {
            return Err(UploadError::NoFile);
        }

        let path = object_path(
            prefix,
            file.file_name.as_deref(),
            unix_millis(),
            &random_token(),
        );
        let content_type = file
            .content_type
            .as_deref()
            .unwrap_or("application/octet-stream");

        self.blobs
            .put(&path, file.bytes, content_type)
            .await
            .inspect_err(|e| error!(error = %e, path = %path, "Image upload failed"))?;

        let url = self
            .blobs
            .public_url(&path)
            .ok_or_else(|| UploadError::UrlUnavailable(path.clone()))?;
        info!(path = %path, "Image uploaded");
        Ok(url)
    }
}

/// `{prefix}/{millis}-{token}.{ext}`
#[must_use]
pub fn object_path(prefix: &str, file_name: Option<&str>, millis: u128, token: &str) -> String {
    let ext = file_name.map_or(FALLBACK_EXTENSION.to_string(), extension);
    format!("{prefix}/{millis}-{token}.{ext}")
}

/// Lowercased extension of `file_name`, or the fallback when there is none.
fn extension(file_name: &str) -> String {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty() && ext.bytes().all(|b| b.is_ascii_alphanumeric()))
        .map_or_else(|| FALLBACK_EXTENSION.to_string(), str::to_ascii_lowercase)
}

fn random_token() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(TOKEN_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect()
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_object_path() {
        assert_eq!(
            object_path("team-images", Some("Portret.JPG"), 1_700_000_000_000, "abc123def4567"),
            "team-images/1700000000000-abc123def4567.jpg"
        );
        assert_eq!(
            object_path("gallery-images", Some("archive.tar.gz"), 1, "t"),
            "gallery-images/1-t.gz"
        );
    }

    #[test]
    fn test_extension_fallback() {
        assert_eq!(extension("README"), "bin");
        assert_eq!(extension("photo."), "bin");
        assert_eq!(extension("weird.p?g"), "bin");
        assert_eq!(object_path("p", None, 5, "t"), "p/5-t.bin");
    }

    #[test]
    fn test_random_token_shape() {
        let token = random_token();
        assert_eq!(token.len(), TOKEN_LEN);
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
    }

    #[tokio::test]
    async fn test_empty_file_rejected_before_store() {
        let blobs = MemoryBlobStore::new("https://storage.test/public");
        let file = ImageFile {
            file_name: Some("a.png".to_string()),
            content_type: Some("image/png".to_string()),
            bytes: Bytes::new(),
        };
        let err = ImageUploader::new(&blobs)
            .upload("team-images", file)
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::NoFile));
        assert_eq!(blobs.put_count(), 0);
    }

    #[tokio::test]
    async fn test_upload_returns_public_url() {
        let blobs = MemoryBlobStore::new("https://storage.test/public");
        let file = ImageFile {
            file_name: Some("logo.PNG".to_string()),
            content_type: Some("image/png".to_string()),
            bytes: Bytes::from_static(b"\x89PNG"),
        };
        let url = ImageUploader::new(&blobs)
            .upload("product-images", file)
            .await
            .unwrap();
        assert!(url.starts_with("https://storage.test/public/product-images/"));
        assert!(url.ends_with(".png"));
        assert_eq!(blobs.put_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_public_url_is_failure() {
        let blobs = MemoryBlobStore::new("https://storage.test/public").without_public_urls();
        let file = ImageFile {
            file_name: Some("a.png".to_string()),
            content_type: None,
            bytes: Bytes::from_static(b"x"),
        };
        let err = ImageUploader::new(&blobs)
            .upload("team-images", file)
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::UrlUnavailable(_)));
        assert_eq!(blobs.put_count(), 1);
    }
}
