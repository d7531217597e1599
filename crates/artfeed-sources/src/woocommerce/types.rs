//! WooCommerce REST API v3 product shapes (`/wp-json/wc/v3/products`).
//!
//! Only the fields used for display are modelled; prices, stock, and the
//! remaining ~60 product fields are ignored. Text fields are `Option` because
//! some plugins rewrite empty strings to `null`.

use serde::Deserialize;

/// A product record from the list, slug, or single-product endpoints.
#[derive(Debug, Deserialize)]
pub struct WooProduct {
    /// Numeric post id.
    #[serde(default)]
    pub id: u64,

    #[serde(default)]
    pub name: Option<String>,

    /// URL slug, e.g. `"sunset-over-the-bay"`. Used as the product id when present.
    #[serde(default)]
    pub slug: Option<String>,

    /// Full description, HTML.
    #[serde(default)]
    pub description: Option<String>,

    /// Short description, HTML. Preferred over `description` when non-empty.
    #[serde(default)]
    pub short_description: Option<String>,

    /// Post status: `"publish"`, `"draft"`, `"pending"`, or `"private"`.
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub categories: Vec<WooTerm>,

    #[serde(default)]
    pub images: Vec<WooImage>,

    #[serde(default)]
    pub attributes: Vec<WooAttribute>,

    #[serde(default)]
    pub tags: Vec<WooTerm>,
}

impl WooProduct {
    /// Returns `true` if the post status is exactly `"publish"`.
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.status.as_deref() == Some("publish")
    }
}

/// A category or tag reference embedded in a product.
#[derive(Debug, Deserialize)]
pub struct WooTerm {
    #[serde(default)]
    pub name: String,
}

/// A gallery image; the first entry is the featured image.
#[derive(Debug, Deserialize)]
pub struct WooImage {
    #[serde(default)]
    pub src: String,
}

/// A product attribute such as `Artist` or `Medium`.
///
/// WooCommerce allows several values per attribute; only the first is used.
#[derive(Debug, Deserialize)]
pub struct WooAttribute {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub options: Vec<String>,
}
