//! Integration tests for the operation invoker.
//!
//! These tests verify how [`StoreApiClient::invoke`] resolves operation
//! identifiers into HTTP requests and classifies each kind of failure.

use serde_json::{json, Value};
use shopware_api::clients::{
    ApiClientError, FailureKind, InvalidOperationError, InvokeError, RequestParams,
    StoreApiClient, UnknownError,
};
use shopware_api::{AccessToken, ShopwareConfig, StoreDomain};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer) -> StoreApiClient {
    let config = ShopwareConfig::builder()
        .store_domain(StoreDomain::new(server.uri()).unwrap())
        .access_token(AccessToken::new("SWSCKEY").unwrap())
        .build()
        .unwrap();
    StoreApiClient::new(&config, None)
}

#[tokio::test]
async fn test_get_sends_leftover_params_as_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/store-api/country"))
        .and(query_param("limit", "5"))
        .and(query_param("onlyActive", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"elements": []})))
        .expect(1)
        .mount(&server)
        .await;

    let params = RequestParams::new()
        .with("limit", 5)
        .with("onlyActive", true)
        .with("skipped", Value::Null);
    let result: Value = create_client(&server)
        .invoke("readCountry get /country", params)
        .await
        .unwrap();

    assert_eq!(result, json!({"elements": []}));
}

#[tokio::test]
async fn test_post_sends_remaining_params_as_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/store-api/product"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"limit": 2, "filter": [{"type": "equals", "field": "active", "value": true}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"elements": []})))
        .expect(1)
        .mount(&server)
        .await;

    let params = RequestParams::new()
        .with("limit", 2)
        .with("filter", json!([{"type": "equals", "field": "active", "value": true}]));
    let result: Value = create_client(&server)
        .invoke("readProduct post /product", params)
        .await
        .unwrap();

    assert_eq!(result["elements"], json!([]));
}

#[tokio::test]
async fn test_path_parameters_are_url_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/store-api/product/a%20b/cross-selling"))
        .and(body_json(json!({"limit": 3})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let params = RequestParams::new().with("productId", "a b").with("limit", 3);
    let result: Vec<Value> = create_client(&server)
        .invoke(
            "readProductCrossSellings post /product/{productId}/cross-selling",
            params,
        )
        .await
        .unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn test_header_parameter_takes_given_value() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/store-api/navigation/main-navigation/main-navigation"))
        .and(header("sw-include-seo-urls", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let params = RequestParams::new()
        .with("activeId", "main-navigation")
        .with("rootId", "main-navigation")
        .with("sw-include-seo-urls", false);
    let result: Result<Vec<Value>, _> = create_client(&server)
        .invoke(
            "readNavigation post /navigation/{activeId}/{rootId} sw-include-seo-urls",
            params,
        )
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_empty_success_body_decodes_as_null() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/store-api/account/logout"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let result: Option<Value> = create_client(&server)
        .invoke("logout delete /account/logout", RequestParams::new())
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_client_reported_error_keeps_status_and_details() {
    let server = MockServer::start().await;
    let body = json!({
        "errors": [{"status": "400", "title": "Bad Request", "detail": "limit must be positive"}]
    });

    Mock::given(method("POST"))
        .and(path("/store-api/product"))
        .respond_with(ResponseTemplate::new(400).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let error = create_client(&server)
        .invoke::<Value>("readProduct post /product", RequestParams::new().with("limit", -1))
        .await
        .unwrap_err();

    assert_eq!(error.kind(), FailureKind::ClientReported);
    assert_eq!(error.details(), Some(&body));
    match error {
        InvokeError::Client(ApiClientError {
            status, message, ..
        }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "limit must be positive");
        }
        other => panic!("Expected client error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_without_json_body_uses_status_line() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/store-api/product"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down"))
        .mount(&server)
        .await;

    let error = create_client(&server)
        .invoke::<Value>("readProduct post /product", RequestParams::new())
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "503 Service Unavailable");
    assert_eq!(error.details(), Some(&Value::Null));
}

#[tokio::test]
async fn test_undecodable_success_body_is_unknown() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/store-api/context"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let error = create_client(&server)
        .invoke::<Value>("readContext get /context", RequestParams::new())
        .await
        .unwrap_err();

    assert_eq!(error.kind(), FailureKind::Unknown);
    assert!(error.details().is_none());
    assert!(matches!(error, InvokeError::Unknown(UnknownError::Decode(_))));
}

#[tokio::test]
async fn test_missing_path_parameter_is_unknown_and_sends_nothing() {
    let server = MockServer::start().await;

    let error = create_client(&server)
        .invoke::<Value>(
            "readProductListing post /product-listing/{categoryId}",
            RequestParams::new(),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        InvokeError::Unknown(UnknownError::InvalidOperation(
            InvalidOperationError::MissingPathParameter { ref name, .. }
        )) if name == "categoryId"
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_method_is_rejected() {
    let server = MockServer::start().await;

    let error = create_client(&server)
        .invoke::<Value>("readProduct fetch /product", RequestParams::new())
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        InvokeError::Unknown(UnknownError::InvalidOperation(
            InvalidOperationError::InvalidMethod { .. }
        ))
    ));
}
