//! Mapping from WooCommerce products to [`artfeed_core::Product`].
//!
//! Artwork metadata lives in free-form product attributes, so artist, year,
//! and medium are found by attribute name (case-insensitive), with a couple
//! of accepted synonyms each.

use artfeed_core::products::{
    non_empty, DEFAULT_ARTIST, DEFAULT_MEDIUM, DEFAULT_TITLE, DEFAULT_YEAR, PLACEHOLDER_IMAGE,
};
use artfeed_core::Product;

use crate::backend::Backend;
use crate::html::strip_html;
use crate::woocommerce::types::{WooAttribute, WooProduct};

const ARTIST_ATTRIBUTES: &[&str] = &["artist", "author"];
const YEAR_ATTRIBUTES: &[&str] = &["year", "date"];
const MEDIUM_ATTRIBUTES: &[&str] = &["medium", "material"];

/// Normalizes a [`WooProduct`] into a [`Product`].
#[must_use]
pub fn normalize_product(product: WooProduct) -> Product {
    let name = product.name.as_deref().unwrap_or_default();

    let artist = attribute_value(&product.attributes, ARTIST_ATTRIBUTES)
        .or_else(|| {
            product
                .categories
                .first()
                .and_then(|c| non_empty(Some(c.name.as_str())))
        })
        .unwrap_or(DEFAULT_ARTIST);

    let year = attribute_value(&product.attributes, YEAR_ATTRIBUTES).unwrap_or(DEFAULT_YEAR);
    let medium =
        attribute_value(&product.attributes, MEDIUM_ATTRIBUTES).unwrap_or(DEFAULT_MEDIUM);

    // The short description wins whenever it is non-empty, even if it turns
    // out to be nothing but markup.
    let raw_description = non_empty(product.short_description.as_deref())
        .or_else(|| non_empty(product.description.as_deref()))
        .unwrap_or_default();
    let mut description = strip_html(raw_description);
    if description.is_empty() {
        description = name.to_owned();
    }

    let image = product
        .images
        .first()
        .and_then(|img| non_empty(Some(img.src.as_str())))
        .unwrap_or(PLACEHOLDER_IMAGE);

    let id = non_empty(product.slug.as_deref())
        .map_or_else(|| product.id.to_string(), str::to_owned);

    Product {
        id,
        title: non_empty(Some(name)).unwrap_or(DEFAULT_TITLE).to_owned(),
        artist: artist.to_owned(),
        year: year.to_owned(),
        origin: Backend::WooCommerce.origin().to_owned(),
        medium: medium.to_owned(),
        image: image.to_owned(),
        description,
        tags: product.tags.iter().map(|t| t.name.clone()).collect(),
    }
}

/// Returns the first option of the first attribute whose name matches one
/// of `names`.
///
/// Only the first matching attribute is consulted: if it has no options the
/// result is `None`, even when a later attribute would also match.
fn attribute_value<'a>(attributes: &'a [WooAttribute], names: &[&str]) -> Option<&'a str> {
    attributes
        .iter()
        .find(|attr| names.iter().any(|n| attr.name.eq_ignore_ascii_case(n)))
        .and_then(|attr| attr.options.first())
        .and_then(|opt| non_empty(Some(opt.as_str())))
}

#[cfg(test)]
#[path = "../woocommerce_normalize_test.rs"]
mod tests;
