//! Catalog command handlers for the CLI.
//!
//! Fetch errors are absorbed by the clients and logged through their
//! observers, so an unreachable backend shows up as an empty list rather
//! than a failed command.

use anyhow::Context;
use artfeed_core::{Product, SourcesConfig};
use artfeed_sources::{
    commerce_hub, woocommerce, CommerceHubClient, StoreFilter, WooCommerceClient,
};
use clap::ValueEnum;

/// Backend selector for the `--source` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Source {
    /// Commerce Hub
    Hub,
    /// WooCommerce store
    Woo,
}

/// Both backend clients, built from one [`SourcesConfig`].
pub(crate) struct Catalog {
    hub: CommerceHubClient,
    woo: WooCommerceClient,
}

impl Catalog {
    /// # Errors
    ///
    /// Returns an error if either HTTP client cannot be constructed.
    pub(crate) fn from_config(config: &SourcesConfig) -> anyhow::Result<Self> {
        let hub = CommerceHubClient::new(
            &config.commerce_hub,
            config.request_timeout_secs,
            &config.user_agent,
        )
        .context("failed to build Commerce Hub client")?;
        let woo = WooCommerceClient::new(
            &config.woocommerce,
            config.request_timeout_secs,
            &config.user_agent,
        )
        .context("failed to build WooCommerce client")?;
        Ok(Self { hub, woo })
    }

    /// Lists products from one backend, or from both (hub first) when
    /// `source` is `None`.
    pub(crate) async fn products(
        &self,
        source: Option<Source>,
        filter: StoreFilter,
        limit: Option<u32>,
    ) -> Vec<Product> {
        let hub_limit = limit.unwrap_or(commerce_hub::DEFAULT_LIMIT);
        let woo_limit = limit.unwrap_or(woocommerce::DEFAULT_LIMIT);
        match source {
            Some(Source::Hub) => self.hub.fetch_products(filter, hub_limit).await,
            Some(Source::Woo) => self.woo.fetch_products(woo_limit).await,
            None => {
                let (mut hub, woo) = tokio::join!(
                    self.hub.fetch_products(filter, hub_limit),
                    self.woo.fetch_products(woo_limit)
                );
                hub.extend(woo);
                hub
            }
        }
    }

    pub(crate) async fn product(&self, source: Source, id: &str) -> Option<Product> {
        match source {
            Source::Hub => self.hub.fetch_product(id).await,
            Source::Woo => self.woo.fetch_product(id).await,
        }
    }

    fn status_lines(&self) -> Vec<String> {
        vec![
            format_status(
                Source::Hub,
                self.hub.is_configured(),
                self.hub.base_url().unwrap_or("(unset)"),
            ),
            format_status(Source::Woo, self.woo.is_configured(), self.woo.base_url()),
        ]
    }
}

/// Print a product list as pretty JSON on stdout.
///
/// # Errors
///
/// Returns an error only if serialization fails.
pub(crate) async fn run_products(
    catalog: &Catalog,
    source: Option<Source>,
    filter: StoreFilter,
    limit: Option<u32>,
) -> anyhow::Result<()> {
    if filter != StoreFilter::All && source == Some(Source::Woo) {
        tracing::warn!(%filter, "--filter only applies to the Commerce Hub source; ignoring");
    }

    let products = catalog.products(source, filter, limit).await;
    tracing::info!(count = products.len(), "products fetched");
    println!("{}", serde_json::to_string_pretty(&products)?);
    Ok(())
}

/// Print a single product as pretty JSON on stdout.
///
/// # Errors
///
/// Returns an error if no product matches `id`.
pub(crate) async fn run_product(
    catalog: &Catalog,
    source: Source,
    id: &str,
) -> anyhow::Result<()> {
    let Some(product) = catalog.product(source, id).await else {
        anyhow::bail!("product '{id}' not found in {}", source_label(source));
    };
    println!("{}", serde_json::to_string_pretty(&product)?);
    Ok(())
}

/// Print one line per backend with its configuration state and base URL.
pub(crate) fn run_status(catalog: &Catalog) {
    println!("{:<8}{:<12}URL", "SOURCE", "CONFIGURED");
    for line in catalog.status_lines() {
        println!("{line}");
    }
}

fn format_status(source: Source, configured: bool, url: &str) -> String {
    let configured = if configured { "yes" } else { "no" };
    format!("{:<8}{configured:<12}{url}", source_label(source))
}

fn source_label(source: Source) -> &'static str {
    match source {
        Source::Hub => "hub",
        Source::Woo => "woo",
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
