//! Row shapes returned by the Commerce Hub PostgREST endpoints.
//!
//! PostgREST serializes SQL `NULL` as JSON `null`, so every nullable column is
//! an `Option`. Ids are `uuid` columns in the current schema but older
//! deployments used `bigint`; [`string_or_number`] accepts either.

use serde::{Deserialize, Deserializer};

/// A row from `GET /rest/v1/stores?select=id,platform`.
#[derive(Debug, Deserialize)]
pub struct HubStore {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Platform the store syncs from, e.g. `"shopify"` or `"woocommerce"`.
    pub platform: String,
}

/// A row from `GET /rest/v1/products?select=*`.
///
/// Columns not used for display (`price`, `sku`, `status`, timestamps) are
/// ignored during deserialization.
#[derive(Debug, Deserialize)]
pub struct HubProduct {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    #[serde(default)]
    pub title: Option<String>,

    /// Plain-text description; the hub stores no HTML.
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub artist: Option<String>,

    /// Free-form category; doubles as the medium and the only tag.
    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,
}

/// Accepts a JSON string or integer and yields its string form.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
    })
}
