use super::*;

const BASE: &str = "https://rapidwoo.com/commerce";

#[test]
fn list_url_requests_first_published_page() {
    let url = WooCommerceClient::list_url(BASE, "ck_1", "cs_2", 24).unwrap();
    assert_eq!(
        url.as_str(),
        "https://rapidwoo.com/commerce/wp-json/wc/v3/products?consumer_key=ck_1&consumer_secret=cs_2&per_page=24&page=1&status=publish"
    );
}

#[test]
fn slug_url_adds_slug_param() {
    let url = WooCommerceClient::slug_url(BASE, "ck_1", "cs_2", "sunset").unwrap();
    assert_eq!(
        url.as_str(),
        "https://rapidwoo.com/commerce/wp-json/wc/v3/products?consumer_key=ck_1&consumer_secret=cs_2&slug=sunset"
    );
}

#[test]
fn id_url_appends_path_segment() {
    let url = WooCommerceClient::id_url(BASE, "ck_1", "cs_2", "42").unwrap();
    assert_eq!(
        url.as_str(),
        "https://rapidwoo.com/commerce/wp-json/wc/v3/products/42?consumer_key=ck_1&consumer_secret=cs_2"
    );
}

#[test]
fn id_url_encodes_slashes_in_identifier() {
    let url = WooCommerceClient::id_url(BASE, "ck_1", "cs_2", "../orders").unwrap();
    assert!(
        url.path().ends_with("/products/..%2Forders"),
        "identifier must stay one segment: {url}"
    );
}

#[test]
fn products_url_strips_trailing_slash() {
    let url = WooCommerceClient::slug_url("https://shop.example.com/", "k", "s", "a").unwrap();
    assert!(
        url.as_str()
            .starts_with("https://shop.example.com/wp-json/wc/v3/products?"),
        "unexpected url: {url}"
    );
}

#[test]
fn products_url_rejects_invalid_base() {
    let err = WooCommerceClient::list_url("rapidwoo", "k", "s", 1).unwrap_err();
    assert!(
        matches!(err, SourceError::InvalidBaseUrl { .. }),
        "expected InvalidBaseUrl, got: {err:?}"
    );
}

#[test]
fn credentials_report_missing_secret() {
    let config = WooCommerceConfig {
        base_url: BASE.to_owned(),
        consumer_key: Some("ck_1".to_owned()),
        consumer_secret: None,
    };
    let client = WooCommerceClient::new(&config, 5, "artfeed-test/0.1").unwrap();
    assert!(!client.is_configured());
    assert_eq!(client.base_url(), BASE);
    let err = client.credentials().unwrap_err();
    assert!(
        matches!(
            err,
            SourceError::NotConfigured {
                missing: "WOOCOMMERCE_SECRET",
                ..
            }
        ),
        "expected NotConfigured(WOOCOMMERCE_SECRET), got: {err:?}"
    );
}
