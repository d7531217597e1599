use artfeed_core::{CommerceHubConfig, WooCommerceConfig};

use super::*;

fn config(hub: CommerceHubConfig, woo: WooCommerceConfig) -> SourcesConfig {
    SourcesConfig {
        commerce_hub: hub,
        woocommerce: woo,
        log_level: "info".to_owned(),
        request_timeout_secs: 5,
        user_agent: "artfeed-test/0.1".to_owned(),
    }
}

fn catalog(hub: CommerceHubConfig, woo: WooCommerceConfig) -> Catalog {
    Catalog::from_config(&config(hub, woo)).expect("clients should build")
}

#[test]
fn status_lines_show_unconfigured_backends() {
    let lines = catalog(CommerceHubConfig::default(), WooCommerceConfig::default()).status_lines();
    assert_eq!(
        lines,
        vec![
            "hub     no          (unset)".to_owned(),
            "woo     no          https://rapidwoo.com/commerce".to_owned(),
        ]
    );
    assert!(lines.iter().all(|line| line.is_ascii()));
}

#[test]
fn status_lines_show_configured_backends() {
    let lines = catalog(
        CommerceHubConfig {
            base_url: Some("https://hub.example.com".to_owned()),
            anon_key: Some("anon".to_owned()),
        },
        WooCommerceConfig {
            base_url: "https://shop.example.com".to_owned(),
            consumer_key: Some("ck".to_owned()),
            consumer_secret: Some("cs".to_owned()),
        },
    )
    .status_lines();
    assert_eq!(lines[0], "hub     yes         https://hub.example.com");
    assert_eq!(lines[1], "woo     yes         https://shop.example.com");
}

#[test]
fn status_lines_report_partial_configuration() {
    let lines = catalog(
        CommerceHubConfig {
            base_url: Some("https://hub.example.com".to_owned()),
            anon_key: None,
        },
        WooCommerceConfig {
            base_url: "https://shop.example.com".to_owned(),
            consumer_key: Some("ck".to_owned()),
            consumer_secret: None,
        },
    )
    .status_lines();
    assert_eq!(lines[0], "hub     no          https://hub.example.com");
    assert_eq!(lines[1], "woo     no          https://shop.example.com");
}

#[test]
fn status_lines_never_print_secrets() {
    let lines = catalog(
        CommerceHubConfig {
            base_url: Some("https://hub.example.com".to_owned()),
            anon_key: Some("anon-secret".to_owned()),
        },
        WooCommerceConfig {
            base_url: "https://shop.example.com".to_owned(),
            consumer_key: Some("ck_live".to_owned()),
            consumer_secret: Some("cs_live".to_owned()),
        },
    )
    .status_lines();
    let joined = lines.join("\n");
    assert!(!joined.contains("anon-secret"));
    assert!(!joined.contains("ck_live"));
    assert!(!joined.contains("cs_live"));
}

#[tokio::test]
async fn unconfigured_catalog_returns_nothing() {
    let catalog = catalog(CommerceHubConfig::default(), WooCommerceConfig::default());

    assert!(catalog
        .products(None, StoreFilter::All, None)
        .await
        .is_empty());
    assert!(catalog.product(Source::Hub, "p-1").await.is_none());
    assert!(catalog.product(Source::Woo, "sunset").await.is_none());
}
