pub mod app_config;
pub mod config;
pub mod products;

use thiserror::Error;

pub use app_config::{CommerceHubConfig, SourcesConfig, WooCommerceConfig};
pub use config::{load_sources_config, load_sources_config_from_env};
pub use products::Product;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
