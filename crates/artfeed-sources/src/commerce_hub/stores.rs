//! Platform → store-id lookup for filtering Commerce Hub products.

use std::collections::HashMap;

use crate::backend::Backend;
use crate::commerce_hub::types::HubStore;
use crate::error::SourceError;
use crate::http;

use super::CommerceHubClient;

impl CommerceHubClient {
    /// Returns the platform → store-id mapping, loading it on first use.
    ///
    /// A successful load is cached for the life of the client and never
    /// refreshed. A failed load is reported to the observer and yields an
    /// empty map; the cache stays empty so the next call tries again.
    /// Concurrent first callers share a single request.
    pub async fn store_ids(&self) -> HashMap<String, String> {
        self.cached_store_ids().await.cloned().unwrap_or_default()
    }

    /// Looks up the store id for `platform` (e.g., `"shopify"`).
    pub async fn store_id(&self, platform: &str) -> Option<String> {
        self.cached_store_ids()
            .await
            .and_then(|ids| ids.get(platform).cloned())
    }

    async fn cached_store_ids(&self) -> Option<&HashMap<String, String>> {
        match self
            .store_ids
            .get_or_try_init(|| self.load_store_ids())
            .await
        {
            Ok(ids) => Some(ids),
            Err(e) => {
                self.observer.on_error(Backend::CommerceHub, "store_ids", &e);
                None
            }
        }
    }

    /// Requests `stores?select=id,platform` and builds the mapping.
    ///
    /// If two stores share a platform, the later row wins.
    ///
    /// # Errors
    ///
    /// Same as [`CommerceHubClient::try_fetch_products`].
    async fn load_store_ids(&self) -> Result<HashMap<String, String>, SourceError> {
        let (base_url, anon_key) = self.credentials()?;
        let url = Self::stores_url(base_url)?;
        let stores: Vec<HubStore> =
            http::get_json(self.authorized(&url, anon_key), url.as_str()).await?;

        tracing::debug!(
            backend = %Backend::CommerceHub,
            count = stores.len(),
            "loaded store ids"
        );
        Ok(stores
            .into_iter()
            .map(|store| (store.platform, store.id))
            .collect())
    }
}
