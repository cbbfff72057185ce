//! In-process blob store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use axum::body::Bytes;

use super::{BlobStore, UploadError};

/// Blob store that keeps objects in memory.
#[derive(Debug)]
pub struct MemoryBlobStore {
    public_base: String,
    resolve_urls: bool,
    objects: Mutex<HashMap<String, (Bytes, String)>>,
    puts: AtomicUsize,
}

impl MemoryBlobStore {
    /// Objects resolve to `{public_base}/{path}`.
    #[must_use]
    pub fn new(public_base: &str) -> Self {
        Self {
            public_base: public_base.trim_end_matches('/').to_string(),
            resolve_urls: true,
            objects: Mutex::new(HashMap::new()),
            puts: AtomicUsize::new(0),
        }
    }

    /// Accept uploads but never produce a public URL.
    #[must_use]
    pub fn without_public_urls(mut self) -> Self {
        self.resolve_urls = false;
        self
    }

    /// Number of `put` calls received.
    #[must_use]
    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    /// Stored object bytes and content type.
    #[must_use]
    pub fn object(&self, path: &str) -> Option<(Bytes, String)> {
        self.objects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
    }

    /// Paths of all stored objects.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        let mut paths: Vec<_> = self
            .objects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        paths.sort();
        paths
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(&self, path: &str, bytes: Bytes, content_type: &str) -> Result<(), UploadError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        let mut objects = self.objects.lock().unwrap_or_else(PoisonError::into_inner);
        if objects.contains_key(path) {
            return Err(UploadError::AlreadyExists(path.to_string()));
        }
        objects.insert(path.to_string(), (bytes, content_type.to_string()));
        Ok(())
    }

    fn public_url(&self, path: &str) -> Option<String> {
        self.resolve_urls
            .then(|| format!("{}/{path}", self.public_base))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_never_overwrites() {
        let blobs = MemoryBlobStore::new("https://storage.test/");
        blobs
            .put("team-images/a.png", Bytes::from_static(b"one"), "image/png")
            .await
            .unwrap();
        let err = blobs
            .put("team-images/a.png", Bytes::from_static(b"two"), "image/png")
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::AlreadyExists(_)));
        assert_eq!(blobs.object("team-images/a.png").unwrap().0, Bytes::from_static(b"one"));
        assert_eq!(
            blobs.public_url("team-images/a.png").unwrap(),
            "https://storage.test/team-images/a.png"
        );
    }
}
