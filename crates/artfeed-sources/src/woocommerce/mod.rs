//! HTTP client for the WooCommerce REST API v3.
//!
//! Authenticates with `consumer_key` / `consumer_secret` query parameters,
//! which WooCommerce accepts over HTTPS. Because the credentials live in the
//! URL, every URL that reaches a log line or an error is redacted first.

mod normalize;
pub mod types;

use std::sync::Arc;

use artfeed_core::{Product, WooCommerceConfig};
use reqwest::{Client, Url};

use crate::backend::Backend;
use crate::error::SourceError;
use crate::http;
use crate::observer::{FetchObserver, TracingObserver};
use crate::woocommerce::types::WooProduct;

pub use normalize::normalize_product;

/// Page size used when the caller has no preference.
pub const DEFAULT_LIMIT: u32 = 24;

const PRODUCTS_PATH: &str = "wp-json/wc/v3/products";

/// Client for a WooCommerce store's product catalog.
///
/// Only published products are listed: the request asks for
/// `status=publish`, and records with any other status are dropped
/// client-side as well, since some hosts ignore the parameter.
///
/// As with [`crate::CommerceHubClient`], the `fetch_*` methods report errors
/// to the observer and return empty results; `try_fetch_*` return them.
pub struct WooCommerceClient {
    client: Client,
    base_url: String,
    consumer_key: Option<String>,
    consumer_secret: Option<String>,
    observer: Arc<dyn FetchObserver>,
}

impl WooCommerceClient {
    /// Creates a client from configuration, with a [`TracingObserver`].
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        config: &WooCommerceConfig,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, SourceError> {
        Ok(Self {
            client: http::build_client(timeout_secs, user_agent)?,
            base_url: config.base_url.clone(),
            consumer_key: config.consumer_key.clone(),
            consumer_secret: config.consumer_secret.clone(),
            observer: Arc::new(TracingObserver),
        })
    }

    /// Replaces the observer that receives absorbed errors.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn FetchObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Returns `true` when both the consumer key and secret are set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.consumer_key.is_some() && self.consumer_secret.is_some()
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lists up to `limit` published products from the first page.
    pub async fn fetch_products(&self, limit: u32) -> Vec<Product> {
        match self.try_fetch_products(limit).await {
            Ok(products) => products,
            Err(e) => {
                self.observer
                    .on_error(Backend::WooCommerce, "fetch_products", &e);
                Vec::new()
            }
        }
    }

    /// Like [`Self::fetch_products`], but returns the error.
    ///
    /// # Errors
    ///
    /// - [`SourceError::NotConfigured`] if the consumer key or secret is missing.
    /// - [`SourceError::InvalidBaseUrl`] if the base URL cannot be parsed.
    /// - [`SourceError::Http`] on network failure.
    /// - [`SourceError::UnexpectedStatus`] on any non-2xx status.
    /// - [`SourceError::Deserialize`] if the body is not an array of products.
    pub async fn try_fetch_products(&self, limit: u32) -> Result<Vec<Product>, SourceError> {
        let (key, secret) = self.credentials()?;
        let url = Self::list_url(&self.base_url, key, secret, limit)?;
        let records: Vec<WooProduct> =
            http::get_json(self.client.get(url.clone()), &http::redacted(&url)).await?;

        let received = records.len();
        let products: Vec<Product> = records
            .into_iter()
            .filter(WooProduct::is_published)
            .map(normalize_product)
            .collect();

        tracing::debug!(
            backend = %Backend::WooCommerce,
            received,
            published = products.len(),
            "fetched products"
        );
        Ok(products)
    }

    /// Fetches one product by slug, falling back to its numeric id.
    ///
    /// Returns `None` without reporting anything when the client is not
    /// configured.
    pub async fn fetch_product(&self, slug_or_id: &str) -> Option<Product> {
        if !self.is_configured() {
            return None;
        }
        match self.try_fetch_product(slug_or_id).await {
            Ok(product) => product,
            Err(e) => {
                self.observer
                    .on_error(Backend::WooCommerce, "fetch_product", &e);
                None
            }
        }
    }

    /// Like [`Self::fetch_product`], but returns the error.
    ///
    /// The slug lookup runs first; the id lookup only runs when the slug
    /// lookup succeeds with zero matches. An error from the slug lookup
    /// aborts the call without trying the id. A non-2xx answer from the id
    /// endpoint means "not found" and yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::try_fetch_products`].
    pub async fn try_fetch_product(
        &self,
        slug_or_id: &str,
    ) -> Result<Option<Product>, SourceError> {
        let (key, secret) = self.credentials()?;

        let slug_url = Self::slug_url(&self.base_url, key, secret, slug_or_id)?;
        let matches: Vec<WooProduct> = http::get_json(
            self.client.get(slug_url.clone()),
            &http::redacted(&slug_url),
        )
        .await?;
        if let Some(product) = matches.into_iter().next() {
            return Ok(Some(normalize_product(product)));
        }

        let id_url = Self::id_url(&self.base_url, key, secret, slug_or_id)?;
        let response = http::send(self.client.get(id_url.clone())).await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(
                backend = %Backend::WooCommerce,
                identifier = slug_or_id,
                status = status.as_u16(),
                "no product by slug or id"
            );
            return Ok(None);
        }

        let product: WooProduct = http::decode_json(response, &http::redacted(&id_url)).await?;
        Ok(Some(normalize_product(product)))
    }

    fn credentials(&self) -> Result<(&str, &str), SourceError> {
        let key = self
            .consumer_key
            .as_deref()
            .ok_or(SourceError::NotConfigured {
                backend: Backend::WooCommerce,
                missing: "WOOCOMMERCE_KEY",
            })?;
        let secret = self
            .consumer_secret
            .as_deref()
            .ok_or(SourceError::NotConfigured {
                backend: Backend::WooCommerce,
                missing: "WOOCOMMERCE_SECRET",
            })?;
        Ok((key, secret))
    }

    /// Builds `{base}/wp-json/wc/v3/products` with the credential parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidBaseUrl`] if the result is not a valid URL.
    fn products_url(base_url: &str, key: &str, secret: &str) -> Result<Url, SourceError> {
        let raw = format!("{}/{PRODUCTS_PATH}", base_url.trim_end_matches('/'));
        let mut url = Url::parse(&raw).map_err(|e| SourceError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        url.query_pairs_mut()
            .append_pair("consumer_key", key)
            .append_pair("consumer_secret", secret);
        Ok(url)
    }

    fn list_url(base_url: &str, key: &str, secret: &str, limit: u32) -> Result<Url, SourceError> {
        let mut url = Self::products_url(base_url, key, secret)?;
        url.query_pairs_mut()
            .append_pair("per_page", &limit.to_string())
            .append_pair("page", "1")
            .append_pair("status", "publish");
        Ok(url)
    }

    fn slug_url(base_url: &str, key: &str, secret: &str, slug: &str) -> Result<Url, SourceError> {
        let mut url = Self::products_url(base_url, key, secret)?;
        url.query_pairs_mut().append_pair("slug", slug);
        Ok(url)
    }

    /// Builds `{base}/wp-json/wc/v3/products/{id}`; `id` is percent-encoded
    /// as a single path segment.
    fn id_url(base_url: &str, key: &str, secret: &str, id: &str) -> Result<Url, SourceError> {
        let mut url = Self::products_url(base_url, key, secret)?;
        url.path_segments_mut()
            .map_err(|()| SourceError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot have path segments".to_owned(),
            })?
            .push(id);
        Ok(url)
    }
}

#[cfg(test)]
#[path = "../woocommerce_test.rs"]
mod tests;
