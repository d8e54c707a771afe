//! Generic invoker for Shopware HTTP APIs.
//!
//! This module provides [`StoreApiClient`], which turns an operation
//! identifier plus a [`RequestParams`] object into one HTTP request and
//! decodes the JSON response.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::{ApiClientError, InvokeError, UnknownError};
use crate::clients::operation::Operation;
use crate::clients::params::RequestParams;
use crate::config::{ApiType, ContextToken, ShopwareConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the sales channel access key (Store API).
pub const ACCESS_KEY_HEADER: &str = "sw-access-key";

/// Header carrying the session or cart context token.
pub const CONTEXT_TOKEN_HEADER: &str = "sw-context-token";

/// HTTP client for a single Shopware API.
///
/// The client handles:
/// - Base URL construction from the store domain and API type
/// - Default headers including User-Agent, access key, and context token
/// - Operation identifier resolution
/// - JSON decoding of successful responses
/// - Conversion of non-2xx responses into [`ApiClientError`]
///
/// It performs no retries and sets no timeout.
///
/// # Thread Safety
///
/// `StoreApiClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shopware_api::clients::{RequestParams, StoreApiClient};
///
/// let client = StoreApiClient::new(&config, None);
/// let context: serde_json::Value = client
///     .invoke("readContext get /context", RequestParams::new())
///     .await?;
/// ```
#[derive(Debug)]
pub struct StoreApiClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://shop.example.com/store-api`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify StoreApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreApiClient>();
};

impl StoreApiClient {
    /// Creates a new client for the configured store.
    ///
    /// # Arguments
    ///
    /// * `config` - Store domain, access token, API type, and user agent prefix
    /// * `context_token` - Optional session or cart token sent as `sw-context-token`
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &ShopwareConfig, context_token: Option<&ContextToken>) -> Self {
        let base_url = config.base_url();

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Shopware API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let token = config.access_token().as_ref();
        match config.api_type() {
            ApiType::StoreApi => {
                default_headers.insert(ACCESS_KEY_HEADER.to_string(), token.to_string());
            }
            ApiType::AdminApi => {
                default_headers.insert("Authorization".to_string(), format!("Bearer {token}"));
            }
        }

        if let Some(context_token) = context_token {
            default_headers.insert(
                CONTEXT_TOKEN_HEADER.to_string(),
                context_token.as_ref().to_string(),
            );
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Invokes an operation and decodes the response as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::Client`] for non-2xx responses, and
    /// [`InvokeError::Unknown`] when the identifier cannot be resolved, the
    /// request fails at the network level, or the body does not decode as `T`.
    pub async fn invoke<T>(&self, operation: &str, params: RequestParams) -> Result<T, InvokeError>
    where
        T: DeserializeOwned,
    {
        let operation = Operation::parse(operation)?;
        let request = operation.resolve(params)?;

        tracing::debug!(
            operation = operation.name(),
            "Sending {} request to {}",
            request.method,
            request.path
        );

        let url = format!("{}{}", self.base_url, request.path);
        let mut req_builder = self.client.request(request.method.into(), &url);

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.json(body);
        }

        let res = req_builder.send().await?;
        let status = res.status();
        let body_text = res.text().await?;

        if status.is_success() {
            let text = if body_text.trim().is_empty() {
                "null"
            } else {
                body_text.as_str()
            };
            return serde_json::from_str(text)
                .map_err(|e| InvokeError::Unknown(UnknownError::Decode(e)));
        }

        let details = serde_json::from_str(&body_text).unwrap_or(serde_json::Value::Null);
        Err(
            ApiClientError::from_response(status.as_u16(), status.canonical_reason(), details)
                .into(),
        )
    }
}
