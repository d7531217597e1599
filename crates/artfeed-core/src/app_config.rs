/// Base URL used for the WooCommerce store when `WOOCOMMERCE_URL` is unset.
pub const DEFAULT_WOOCOMMERCE_URL: &str = "https://rapidwoo.com/commerce";

/// Connection settings for the Commerce Hub REST API.
///
/// Both fields are required for the backend to be usable; when either is
/// absent every fetch short-circuits without touching the network.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CommerceHubConfig {
    pub base_url: Option<String>,
    pub anon_key: Option<String>,
}

/// Connection settings for the WooCommerce REST API.
#[derive(Clone, PartialEq, Eq)]
pub struct WooCommerceConfig {
    pub base_url: String,
    pub consumer_key: Option<String>,
    pub consumer_secret: Option<String>,
}

impl Default for WooCommerceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_WOOCOMMERCE_URL.to_string(),
            consumer_key: None,
            consumer_secret: None,
        }
    }
}

#[derive(Clone)]
pub struct SourcesConfig {
    pub commerce_hub: CommerceHubConfig,
    pub woocommerce: WooCommerceConfig,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for CommerceHubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommerceHubConfig")
            .field("base_url", &self.base_url)
            .field("anon_key", &self.anon_key.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}

impl std::fmt::Debug for WooCommerceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WooCommerceConfig")
            .field("base_url", &self.base_url)
            .field(
                "consumer_key",
                &self.consumer_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "consumer_secret",
                &self.consumer_secret.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}

impl std::fmt::Debug for SourcesConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourcesConfig")
            .field("commerce_hub", &self.commerce_hub)
            .field("woocommerce", &self.woocommerce)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commerce_hub_debug_redacts_anon_key() {
        let cfg = CommerceHubConfig {
            base_url: Some("https://hub.example.com".to_owned()),
            anon_key: Some("anon-live-789".to_owned()),
        };
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("anon-live-789"));
        assert!(rendered.contains("https://hub.example.com"));
    }

    #[test]
    fn woocommerce_default_points_at_default_store() {
        let cfg = WooCommerceConfig::default();
        assert_eq!(cfg.base_url, DEFAULT_WOOCOMMERCE_URL);
        assert!(cfg.consumer_key.is_none() && cfg.consumer_secret.is_none());
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let cfg = WooCommerceConfig {
            base_url: DEFAULT_WOOCOMMERCE_URL.to_owned(),
            consumer_key: Some("ck_live_123".to_owned()),
            consumer_secret: Some("cs_live_456".to_owned()),
        };
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("ck_live_123"));
        assert!(!rendered.contains("cs_live_456"));
        assert!(rendered.contains("[redacted]"));
    }
}
