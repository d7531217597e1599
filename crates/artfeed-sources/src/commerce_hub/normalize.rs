//! Mapping from Commerce Hub rows to [`artfeed_core::Product`].

use artfeed_core::products::{
    non_empty, DEFAULT_ARTIST, DEFAULT_MEDIUM, DEFAULT_TITLE, DEFAULT_YEAR, PLACEHOLDER_IMAGE,
};
use artfeed_core::Product;

use crate::backend::Backend;
use crate::commerce_hub::types::HubProduct;

/// Normalizes a [`HubProduct`] row into a [`Product`].
///
/// The hub has no year column, so `year` is always the default. `category`
/// fills both `medium` and the single tag.
#[must_use]
pub fn normalize_product(row: HubProduct) -> Product {
    let title = non_empty(row.title.as_deref());
    let category = non_empty(row.category.as_deref());

    let description = non_empty(row.description.as_deref())
        .or(title)
        .unwrap_or_default()
        .to_owned();

    Product {
        title: title.unwrap_or(DEFAULT_TITLE).to_owned(),
        artist: non_empty(row.artist.as_deref())
            .unwrap_or(DEFAULT_ARTIST)
            .to_owned(),
        year: DEFAULT_YEAR.to_owned(),
        origin: Backend::CommerceHub.origin().to_owned(),
        medium: category.unwrap_or(DEFAULT_MEDIUM).to_owned(),
        image: non_empty(row.image_url.as_deref())
            .unwrap_or(PLACEHOLDER_IMAGE)
            .to_owned(),
        description,
        tags: category.map(str::to_owned).into_iter().collect(),
        id: row.id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row() -> HubProduct {
        HubProduct {
            id: "p-1".to_owned(),
            title: Some("Harbor at Dusk".to_owned()),
            description: Some("Four-colour lithograph.".to_owned()),
            artist: Some("M. Okafor".to_owned()),
            category: Some("Lithograph".to_owned()),
            image_url: Some("https://cdn.example.com/harbor.jpg".to_owned()),
        }
    }

    #[test]
    fn normalize_product_maps_populated_row() {
        let product = normalize_product(make_row());
        assert_eq!(product.id, "p-1");
        assert_eq!(product.title, "Harbor at Dusk");
        assert_eq!(product.artist, "M. Okafor");
        assert_eq!(product.year, "Date unknown");
        assert_eq!(product.origin, "Commerce Hub");
        assert_eq!(product.medium, "Lithograph");
        assert_eq!(product.image, "https://cdn.example.com/harbor.jpg");
        assert_eq!(product.description, "Four-colour lithograph.");
        assert_eq!(product.tags, vec!["Lithograph".to_owned()]);
    }

    #[test]
    fn normalize_product_defaults_every_missing_field() {
        let row = HubProduct {
            id: "p-2".to_owned(),
            title: None,
            description: None,
            artist: None,
            category: None,
            image_url: None,
        };
        let product = normalize_product(row);
        assert_eq!(product.title, DEFAULT_TITLE);
        assert_eq!(product.artist, DEFAULT_ARTIST);
        assert_eq!(product.medium, DEFAULT_MEDIUM);
        assert_eq!(product.image, PLACEHOLDER_IMAGE);
        assert_eq!(product.description, "");
        assert!(product.tags.is_empty());
    }

    #[test]
    fn normalize_product_treats_empty_strings_as_missing() {
        let mut row = make_row();
        row.artist = Some(String::new());
        row.category = Some(String::new());
        row.image_url = Some(String::new());
        let product = normalize_product(row);
        assert_eq!(product.artist, DEFAULT_ARTIST);
        assert_eq!(product.medium, DEFAULT_MEDIUM);
        assert_eq!(product.image, PLACEHOLDER_IMAGE);
        assert!(product.tags.is_empty());
    }

    #[test]
    fn normalize_product_description_falls_back_to_title() {
        let mut row = make_row();
        row.description = None;
        let product = normalize_product(row);
        assert_eq!(product.description, "Harbor at Dusk");
    }
}
