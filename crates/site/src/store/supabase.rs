//! Supabase `PostgREST` client.

use async_trait::async_trait;
use mars_paper_core::RecordId;
use reqwest::{Client, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error, instrument};
use url::Url;

use super::{Collection, ResourceStore, Row, SortOrder, StoreError};
use crate::config::SupabaseConfig;

/// Resource store backed by a Supabase project's REST API.
#[derive(Clone)]
pub struct SupabaseStore {
    client: Client,
    base_url: Url,
    api_key: SecretString,
}

impl std::fmt::Debug for SupabaseStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseStore")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl SupabaseStore {
    /// Create a store client sharing an existing HTTP client.
    #[must_use]
    pub fn new(client: Client, config: &SupabaseConfig) -> Self {
        Self {
            client,
            base_url: config.url.clone(),
            api_key: config.anon_key.clone(),
        }
    }

    /// `{base}/rest/v1/{table}`
    fn table_url(&self, collection: Collection) -> Result<Url, StoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| StoreError::Request("Supabase URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["rest", "v1", collection.table()]);
        Ok(url)
    }

    fn row_url(&self, collection: Collection, id: &RecordId) -> Result<Url, StoreError> {
        let mut url = self.table_url(collection)?;
        url.query_pairs_mut()
            .append_pair("id", &format!("eq.{id}"));
        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let key = self.api_key.expose_secret();
        request
            .header("apikey", key)
            .bearer_auth(key)
            .header("Prefer", "return=representation")
    }

    /// Send a request and read the returned rows.
    async fn send(&self, request: RequestBuilder) -> Result<Vec<Row>, StoreError> {
        let response = self.authorized(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, body = %message, "Supabase request failed");
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }

        response
            .json::<Vec<Row>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ResourceStore for SupabaseStore {
    #[instrument(skip(self, row), fields(collection = %collection))]
    async fn insert(&self, collection: Collection, row: Row) -> Result<Row, StoreError> {
        let url = self.table_url(collection)?;
        let rows = self.send(self.client.post(url).json(&row)).await?;
        debug!(returned = rows.len(), "Row inserted");
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::Decode("insert returned no row".to_string()))
    }

    #[instrument(skip(self, row), fields(collection = %collection, id = %id))]
    async fn update(
        &self,
        collection: Collection,
        id: &RecordId,
        row: Row,
    ) -> Result<Row, StoreError> {
        let url = self.row_url(collection, id)?;
        let rows = self.send(self.client.patch(url).json(&row)).await?;
        rows.into_iter().next().ok_or_else(|| StoreError::NotFound {
            collection,
            id: id.clone(),
        })
    }

    #[instrument(skip(self), fields(collection = %collection, id = %id))]
    async fn delete(&self, collection: Collection, id: &RecordId) -> Result<(), StoreError> {
        let url = self.row_url(collection, id)?;
        let rows = self.send(self.client.delete(url)).await?;
        debug!(deleted = rows.len(), "Delete finished");
        Ok(())
    }

    #[instrument(skip(self), fields(collection = %collection, order = order.as_str()))]
    async fn list(&self, collection: Collection, order: SortOrder) -> Result<Vec<Row>, StoreError> {
        let mut url = self.table_url(collection)?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("order", &format!("created_at.{}", order.as_str()));
        self.send(self.client.get(url)).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store(url: &str) -> SupabaseStore {
        SupabaseStore::new(
            Client::new(),
            &SupabaseConfig {
                url: Url::parse(url).unwrap(),
                anon_key: SecretString::from("anon-key-value"),
                bucket: "mars-paper-images".to_string(),
            },
        )
    }

    #[test]
    fn test_table_url() {
        let url = store("https://xyz.supabase.co").table_url(Collection::GalleryItems).unwrap();
        assert_eq!(url.as_str(), "https://xyz.supabase.co/rest/v1/gallery_items");

        let url = store("https://xyz.supabase.co/").table_url(Collection::Products).unwrap();
        assert_eq!(url.as_str(), "https://xyz.supabase.co/rest/v1/products");
    }

    #[test]
    fn test_row_url_filters_by_id() {
        let id = RecordId::parse("42").unwrap();
        let url = store("https://xyz.supabase.co")
            .row_url(Collection::TeamMembers, &id)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://xyz.supabase.co/rest/v1/team_members?id=eq.42"
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let output = format!("{:?}", store("https://xyz.supabase.co"));
        assert!(output.contains("[REDACTED]"));
        assert!(!output.contains("anon-key-value"));
    }
}
