//! Integration tests for the Shopware API SDK.
//!
//! These tests verify end-to-end functionality of the SDK configuration system.

use shopware_api::config::{ENV_ACCESS_TOKEN, ENV_API_TYPE, ENV_STORE_DOMAIN};
use shopware_api::{
    AccessToken, ApiType, ConfigError, ContextToken, ShopwareConfig, StoreApi, StoreApiClient,
    StoreDomain,
};

fn lookup(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |name: &str| {
        vars.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| (*value).to_string())
    }
}

#[test]
fn test_full_workflow_create_newtypes_build_config_access_fields() {
    let domain = StoreDomain::new("https://shop.example.com/").unwrap();
    let token = AccessToken::new("SWSCABC").unwrap();

    let config = ShopwareConfig::builder()
        .store_domain(domain)
        .access_token(token)
        .api_type(ApiType::StoreApi)
        .user_agent_prefix("Headless/2.0")
        .build()
        .unwrap();

    assert_eq!(config.store_domain().as_ref(), "https://shop.example.com");
    assert_eq!(config.access_token().as_ref(), "SWSCABC");
    assert_eq!(config.api_type(), ApiType::StoreApi);
    assert_eq!(config.user_agent_prefix(), Some("Headless/2.0"));
    assert_eq!(config.base_url(), "https://shop.example.com/store-api");
}

#[test]
fn test_multi_tenant_scenario_multiple_independent_configs() {
    let config_a = ShopwareConfig::builder()
        .store_domain(StoreDomain::new("https://a.example.com").unwrap())
        .access_token(AccessToken::new("KEY-A").unwrap())
        .build()
        .unwrap();

    let config_b = ShopwareConfig::builder()
        .store_domain(StoreDomain::new("https://b.example.com").unwrap())
        .access_token(AccessToken::new("KEY-B").unwrap())
        .api_type(ApiType::AdminApi)
        .build()
        .unwrap();

    let api_a = StoreApi::new(config_a);
    let api_b = StoreApi::new(config_b);

    assert_eq!(api_a.client(None).base_url(), "https://a.example.com/store-api");
    assert_eq!(api_b.client(None).base_url(), "https://b.example.com/api");
}

#[test]
fn test_config_from_lookup_reads_all_variables() {
    let config = ShopwareConfig::from_lookup(lookup(&[
        (ENV_STORE_DOMAIN, "https://shop.example.com"),
        (ENV_ACCESS_TOKEN, "SWSCENV"),
        (ENV_API_TYPE, "admin"),
    ]))
    .unwrap();

    assert_eq!(config.api_type(), ApiType::AdminApi);
    assert_eq!(config.base_url(), "https://shop.example.com/api");
}

#[test]
fn test_config_from_lookup_reports_missing_variables() {
    let result = ShopwareConfig::from_lookup(lookup(&[(ENV_ACCESS_TOKEN, "SWSCENV")]));
    assert!(matches!(
        result,
        Err(ConfigError::MissingEnvVar {
            name: ENV_STORE_DOMAIN
        })
    ));

    let result =
        ShopwareConfig::from_lookup(lookup(&[(ENV_STORE_DOMAIN, "https://shop.example.com")]));
    assert!(matches!(
        result,
        Err(ConfigError::MissingEnvVar {
            name: ENV_ACCESS_TOKEN
        })
    ));
}

#[test]
fn test_config_from_lookup_rejects_bad_values() {
    let result = ShopwareConfig::from_lookup(lookup(&[
        (ENV_STORE_DOMAIN, "shop.example.com"),
        (ENV_ACCESS_TOKEN, "SWSCENV"),
    ]));
    assert!(matches!(result, Err(ConfigError::InvalidStoreDomain { .. })));

    let result = ShopwareConfig::from_lookup(lookup(&[
        (ENV_STORE_DOMAIN, "https://shop.example.com"),
        (ENV_ACCESS_TOKEN, "SWSCENV"),
        (ENV_API_TYPE, "graphql"),
    ]));
    assert!(matches!(result, Err(ConfigError::InvalidApiType { .. })));
}

#[test]
fn test_error_handling_missing_required_fields() {
    let result = ShopwareConfig::builder()
        .access_token(AccessToken::new("SWSC").unwrap())
        .build();
    assert!(matches!(
        result,
        Err(ConfigError::MissingRequiredField {
            field: "store_domain"
        })
    ));

    let result = ShopwareConfig::builder()
        .store_domain(StoreDomain::new("https://shop.example.com").unwrap())
        .build();
    assert!(matches!(
        result,
        Err(ConfigError::MissingRequiredField {
            field: "access_token"
        })
    ));
}

#[test]
fn test_secrets_are_masked_in_debug_output() {
    let config = ShopwareConfig::builder()
        .store_domain(StoreDomain::new("https://shop.example.com").unwrap())
        .access_token(AccessToken::new("super-secret-key").unwrap())
        .build()
        .unwrap();
    let token = ContextToken::new("session-secret").unwrap();

    let debug = format!("{config:?} {token:?}");
    assert!(!debug.contains("super-secret-key"));
    assert!(!debug.contains("session-secret"));
}

#[test]
fn test_client_carries_context_token() {
    let config = ShopwareConfig::builder()
        .store_domain(StoreDomain::new("https://shop.example.com").unwrap())
        .access_token(AccessToken::new("SWSC").unwrap())
        .build()
        .unwrap();
    let token = ContextToken::new("cart-7").unwrap();

    let client = StoreApiClient::new(&config, Some(&token));

    assert_eq!(
        client.default_headers().get("sw-context-token"),
        Some(&"cart-7".to_string())
    );
}

#[test]
fn test_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<ShopwareConfig>();
    assert_send_sync::<StoreApi>();
    assert_send_sync::<StoreApiClient>();
    assert_send_sync::<ContextToken>();
}
