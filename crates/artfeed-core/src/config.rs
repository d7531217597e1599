use crate::app_config::{
    CommerceHubConfig, SourcesConfig, WooCommerceConfig, DEFAULT_WOOCOMMERCE_URL,
};
use crate::ConfigError;

/// Load backend configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric setting cannot be parsed.
pub fn load_sources_config() -> Result<SourcesConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_sources_config_from_env()
}

/// Load backend configuration from environment variables already in the process.
///
/// Unlike [`load_sources_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric setting cannot be parsed.
pub fn load_sources_config_from_env() -> Result<SourcesConfig, ConfigError> {
    build_sources_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// Missing credentials are not an error: they leave the corresponding backend
/// unconfigured, and its fetches return empty results. Empty values are
/// treated the same as unset ones.
fn build_sources_config<F>(lookup: F) -> Result<SourcesConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let or_default =
        |var: &str, default: &str| -> String { optional(var).unwrap_or_else(|| default.to_string()) };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let commerce_hub = CommerceHubConfig {
        base_url: optional("COMMERCE_HUB_URL"),
        anon_key: optional("COMMERCE_HUB_ANON_KEY"),
    };

    let woocommerce = WooCommerceConfig {
        base_url: or_default("WOOCOMMERCE_URL", DEFAULT_WOOCOMMERCE_URL),
        consumer_key: optional("WOOCOMMERCE_KEY"),
        consumer_secret: optional("WOOCOMMERCE_SECRET"),
    };

    let log_level = or_default("ARTFEED_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("ARTFEED_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "ARTFEED_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("ARTFEED_USER_AGENT", "artfeed/0.1 (catalog-client)");

    Ok(SourcesConfig {
        commerce_hub,
        woocommerce,
        log_level,
        request_timeout_secs,
        user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
