//! HTTP client for the Commerce Hub PostgREST API.

mod normalize;
mod stores;
pub mod types;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use artfeed_core::{CommerceHubConfig, Product};
use reqwest::{Client, RequestBuilder, Url};
use tokio::sync::OnceCell;

use crate::backend::Backend;
use crate::commerce_hub::types::HubProduct;
use crate::error::SourceError;
use crate::http;
use crate::observer::{FetchObserver, TracingObserver};

pub use normalize::normalize_product;

/// Row limit used when the caller has no preference.
pub const DEFAULT_LIMIT: u32 = 200;

/// Which upstream storefront's products to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreFilter {
    #[default]
    All,
    Shopify,
    WooCommerce,
}

impl StoreFilter {
    /// The `stores.platform` value this filter selects, or `None` for [`StoreFilter::All`].
    #[must_use]
    pub fn platform(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Shopify => Some("shopify"),
            Self::WooCommerce => Some("woocommerce"),
        }
    }
}

impl fmt::Display for StoreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.platform().unwrap_or("all"))
    }
}

impl FromStr for StoreFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "shopify" => Ok(Self::Shopify),
            "woocommerce" => Ok(Self::WooCommerce),
            other => Err(format!(
                "unknown store filter \"{other}\" (expected all, shopify, or woocommerce)"
            )),
        }
    }
}

/// Client for the Commerce Hub `stores` and `products` tables.
///
/// Every request carries the anon key twice, as PostgREST expects: in the
/// `apikey` header and as a bearer token. The platform → store-id mapping
/// used for filtering is loaded lazily and cached for the life of the client.
///
/// The `fetch_*` methods never fail. Errors are passed to the configured
/// [`FetchObserver`] and an empty result is returned; use the `try_fetch_*`
/// variants to get the error instead.
pub struct CommerceHubClient {
    client: Client,
    base_url: Option<String>,
    anon_key: Option<String>,
    store_ids: OnceCell<HashMap<String, String>>,
    observer: Arc<dyn FetchObserver>,
}

impl CommerceHubClient {
    /// Creates a client from configuration, with a [`TracingObserver`].
    ///
    /// An unconfigured client is valid: its fetches short-circuit without
    /// sending requests.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        config: &CommerceHubConfig,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, SourceError> {
        Ok(Self {
            client: http::build_client(timeout_secs, user_agent)?,
            base_url: config.base_url.clone(),
            anon_key: config.anon_key.clone(),
            store_ids: OnceCell::new(),
            observer: Arc::new(TracingObserver),
        })
    }

    /// Replaces the observer that receives absorbed errors.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn FetchObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Returns `true` when both the base URL and the anon key are set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.base_url.is_some() && self.anon_key.is_some()
    }

    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Lists up to `limit` products, optionally restricted to one storefront.
    ///
    /// A filter whose platform has no known store id is dropped, so the
    /// result is the same as [`StoreFilter::All`].
    pub async fn fetch_products(&self, filter: StoreFilter, limit: u32) -> Vec<Product> {
        match self.try_fetch_products(filter, limit).await {
            Ok(products) => products,
            Err(e) => {
                self.observer
                    .on_error(Backend::CommerceHub, "fetch_products", &e);
                Vec::new()
            }
        }
    }

    /// Like [`Self::fetch_products`], but returns the error.
    ///
    /// A failed store-id lookup is still absorbed (it only drops the filter).
    ///
    /// # Errors
    ///
    /// - [`SourceError::NotConfigured`] if the base URL or anon key is missing.
    /// - [`SourceError::InvalidBaseUrl`] if the base URL cannot be parsed.
    /// - [`SourceError::Http`] on network failure.
    /// - [`SourceError::UnexpectedStatus`] on any non-2xx status.
    /// - [`SourceError::Deserialize`] if the body is not an array of product rows.
    pub async fn try_fetch_products(
        &self,
        filter: StoreFilter,
        limit: u32,
    ) -> Result<Vec<Product>, SourceError> {
        let (base_url, anon_key) = self.credentials()?;

        let store_id = match filter.platform() {
            Some(platform) => {
                let id = self.store_id(platform).await;
                if id.is_none() {
                    tracing::debug!(%filter, "no store id for platform; listing all products");
                }
                id
            }
            None => None,
        };

        let url = Self::products_url(base_url, limit, store_id.as_deref())?;
        let rows: Vec<HubProduct> =
            http::get_json(self.authorized(&url, anon_key), url.as_str()).await?;

        tracing::debug!(
            backend = %Backend::CommerceHub,
            %filter,
            count = rows.len(),
            "fetched products"
        );
        Ok(rows.into_iter().map(normalize_product).collect())
    }

    /// Fetches one product by its exact id, or `None` if no row matches.
    ///
    /// Returns `None` without reporting anything when the client is not
    /// configured.
    pub async fn fetch_product(&self, id: &str) -> Option<Product> {
        if !self.is_configured() {
            return None;
        }
        match self.try_fetch_product(id).await {
            Ok(product) => product,
            Err(e) => {
                self.observer
                    .on_error(Backend::CommerceHub, "fetch_product", &e);
                None
            }
        }
    }

    /// Like [`Self::fetch_product`], but returns the error.
    ///
    /// # Errors
    ///
    /// Same as [`Self::try_fetch_products`].
    pub async fn try_fetch_product(&self, id: &str) -> Result<Option<Product>, SourceError> {
        let (base_url, anon_key) = self.credentials()?;
        let url = Self::product_url(base_url, id)?;
        let rows: Vec<HubProduct> =
            http::get_json(self.authorized(&url, anon_key), url.as_str()).await?;
        Ok(rows.into_iter().next().map(normalize_product))
    }

    /// Returns the base URL and anon key, or the name of the first missing setting.
    fn credentials(&self) -> Result<(&str, &str), SourceError> {
        let base_url = self
            .base_url
            .as_deref()
            .ok_or(SourceError::NotConfigured {
                backend: Backend::CommerceHub,
                missing: "COMMERCE_HUB_URL",
            })?;
        let anon_key = self
            .anon_key
            .as_deref()
            .ok_or(SourceError::NotConfigured {
                backend: Backend::CommerceHub,
                missing: "COMMERCE_HUB_ANON_KEY",
            })?;
        Ok((base_url, anon_key))
    }

    fn authorized(&self, url: &Url, anon_key: &str) -> RequestBuilder {
        self.client
            .get(url.clone())
            .header("apikey", anon_key)
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {anon_key}"))
    }

    /// Builds `{base}/rest/v1/{table}`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidBaseUrl`] if the result is not a valid URL.
    fn table_url(base_url: &str, table: &str) -> Result<Url, SourceError> {
        let raw = format!("{}/rest/v1/{table}", base_url.trim_end_matches('/'));
        Url::parse(&raw).map_err(|e| SourceError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })
    }

    fn stores_url(base_url: &str) -> Result<Url, SourceError> {
        let mut url = Self::table_url(base_url, "stores")?;
        url.query_pairs_mut().append_pair("select", "id,platform");
        Ok(url)
    }

    fn products_url(
        base_url: &str,
        limit: u32,
        store_id: Option<&str>,
    ) -> Result<Url, SourceError> {
        let mut url = Self::table_url(base_url, "products")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("select", "*");
            pairs.append_pair("limit", &limit.to_string());
            if let Some(id) = store_id {
                pairs.append_pair("store_id", &format!("eq.{id}"));
            }
        }
        Ok(url)
    }

    fn product_url(base_url: &str, id: &str) -> Result<Url, SourceError> {
        let mut url = Self::table_url(base_url, "products")?;
        url.query_pairs_mut()
            .append_pair("id", &format!("eq.{id}"))
            .append_pair("select", "*");
        Ok(url)
    }
}

#[cfg(test)]
#[path = "../commerce_hub_test.rs"]
mod tests;
