use std::fmt;

/// The remote system a product came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Postgres-backed PostgREST API holding the `stores` and `products` tables.
    CommerceHub,
    /// WooCommerce REST API v3.
    WooCommerce,
}

impl Backend {
    /// Display name written into [`artfeed_core::Product::origin`].
    #[must_use]
    pub fn origin(self) -> &'static str {
        match self {
            Self::CommerceHub => "Commerce Hub",
            Self::WooCommerce => "WooCommerce Store",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommerceHub => write!(f, "commerce_hub"),
            Self::WooCommerce => write!(f, "woocommerce"),
        }
    }
}
