use serde::{Deserialize, Serialize};

/// Title used when the source record has no name.
pub const DEFAULT_TITLE: &str = "Untitled";
/// Artist used when no attribute, column, or category names one.
pub const DEFAULT_ARTIST: &str = "Unknown Artist";
/// Year used when the source carries no date information.
pub const DEFAULT_YEAR: &str = "Date unknown";
/// Medium used when the source does not say what the piece is made of.
pub const DEFAULT_MEDIUM: &str = "Print";
/// Image path rendered when the source has no image.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

/// A catalog entry normalized from either backend, ready for display.
///
/// Transforms substitute the `DEFAULT_*` constants for anything the source
/// leaves empty, with one exception: `description` falls back to the title
/// text and is `""` when the source has neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique within its source. Commerce Hub row id, or the WooCommerce
    /// slug (falling back to the numeric id).
    pub id: String,
    pub title: String,
    pub artist: String,
    pub year: String,
    /// Human-readable backend name, e.g. `"Commerce Hub"`.
    pub origin: String,
    pub medium: String,
    /// Absolute image URL, or [`PLACEHOLDER_IMAGE`].
    pub image: String,
    /// Plain-text description; HTML is stripped by the transforms.
    pub description: String,
    /// Tag names in the order the backend returned them.
    pub tags: Vec<String>,
}

/// Returns `Some(value)` when `value` is present and non-empty.
///
/// Both backends send `""` and `null` interchangeably for missing text, so
/// every fallback chain treats them the same.
#[must_use]
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
