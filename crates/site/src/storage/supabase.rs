//! Supabase Storage client.

use async_trait::async_trait;
use axum::body::Bytes;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use tracing::{error, instrument};
use url::Url;

use super::{BlobStore, UploadError};
use crate::config::SupabaseConfig;

/// Cache lifetime, in seconds, stored with each object.
const CACHE_CONTROL_SECS: &str = "3600";

/// Blob store backed by a Supabase Storage bucket.
#[derive(Clone)]
pub struct SupabaseStorage {
    client: Client,
    base_url: Url,
    api_key: SecretString,
    bucket: String,
}

impl std::fmt::Debug for SupabaseStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseStorage")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"[REDACTED]")
            .field("bucket", &self.bucket)
            .finish_non_exhaustive()
    }
}

impl SupabaseStorage {
    #[must_use]
    pub fn new(client: Client, config: &SupabaseConfig) -> Self {
        Self {
            client,
            base_url: config.url.clone(),
            api_key: config.anon_key.clone(),
            bucket: config.bucket.clone(),
        }
    }

    /// `{base}/storage/v1/object/{public?}/{bucket}/{path}`
    fn object_url(&self, public: bool, path: &str) -> Option<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().ok()?;
            segments.pop_if_empty().extend(["storage", "v1", "object"]);
            if public {
                segments.push("public");
            }
            segments.push(&self.bucket);
            segments.extend(path.split('/').filter(|s| !s.is_empty()));
        }
        Some(url)
    }
}

#[async_trait]
impl BlobStore for SupabaseStorage {
    #[instrument(skip(self, bytes), fields(bucket = %self.bucket, path = %path, size = bytes.len()))]
    async fn put(&self, path: &str, bytes: Bytes, content_type: &str) -> Result<(), UploadError> {
        let url = self
            .object_url(false, path)
            .ok_or_else(|| UploadError::Request("Supabase URL cannot be a base".to_string()))?;
        let key = self.api_key.expose_secret();

        let response = self
            .client
            .post(url)
            .header("apikey", key)
            .bearer_auth(key)
            .header("x-upsert", "false")
            .header("cache-control", CACHE_CONTROL_SECS)
            .header("content-type", content_type)
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = response.text().await.unwrap_or_default();
        error!(status = %status, body = %message, "Supabase Storage rejected upload");
        // Storage reports an existing object as 409 (older versions: 400 with "Duplicate").
        if status == StatusCode::CONFLICT || message.contains("Duplicate") {
            return Err(UploadError::AlreadyExists(path.to_string()));
        }
        Err(UploadError::Api {
            status: status.as_u16(),
            message,
        })
    }

    fn public_url(&self, path: &str) -> Option<String> {
        self.object_url(true, path).map(String::from)
    }
}
