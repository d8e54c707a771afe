//! # Shopware API Rust SDK
//!
//! A Rust SDK for the Shopware Store API, providing type-safe configuration,
//! a small operation-based HTTP client, and typed storefront requests.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ShopwareConfig`] and [`ShopwareConfigBuilder`]
//! - Validated newtypes for the store URL and access tokens
//! - An async client that invokes operations named like
//!   `"readCategory post /category/{navigationId}?slots"` via [`clients`]
//! - Search criteria types for filters, sorting, and paging via [`store`]
//! - Typed storefront requests that never fail loudly via [`StoreApi`]
//!
//! ## Quick Start
//!
//! ```rust
//! use shopware_api::{AccessToken, ShopwareConfig, StoreApi, StoreDomain};
//!
//! // Create configuration using the builder pattern
//! let config = ShopwareConfig::builder()
//!     .store_domain(StoreDomain::new("https://shop.example.com").unwrap())
//!     .access_token(AccessToken::new("SWSCXYZ").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let api = StoreApi::new(config);
//! assert_eq!(api.config().base_url(), "https://shop.example.com/store-api");
//! ```
//!
//! ## Storefront Requests
//!
//! Every request method returns `Option<T>`. Failures are logged through
//! `tracing` and come back as `None`:
//!
//! ```rust,ignore
//! use shopware_api::{ShopwareConfig, StoreApi};
//! use shopware_api::store::{NavigationType, RouteName};
//!
//! let api = StoreApi::new(ShopwareConfig::from_env()?);
//!
//! let navigation = api.request_navigation(&NavigationType::Main, 2).await;
//! let seo_urls = api.request_seo_urls_default(&RouteName::NavigationPage).await;
//! let page = api.request_seo_url_default("shoes/boots").await;
//! ```
//!
//! ## Sessions
//!
//! A context token binds a request to a session or cart:
//!
//! ```rust,ignore
//! use shopware_api::ContextToken;
//!
//! let token = ContextToken::new(cookie_value)?;
//! let context = api.request_context(Some(&token)).await;
//! ```
//!
//! ## Raw Invocation
//!
//! When the failure reason matters, invoke operations directly:
//!
//! ```rust,ignore
//! use shopware_api::clients::{InvokeError, RequestParams};
//!
//! let client = api.client(None);
//! match client.invoke::<serde_json::Value>("readProduct post /product", RequestParams::new()).await {
//!     Ok(listing) => println!("{listing}"),
//!     Err(InvokeError::Client(e)) => eprintln!("store said {}: {}", e.status, e.message),
//!     Err(InvokeError::Unknown(e)) => eprintln!("request failed: {e}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Stateless requests**: Each call builds its own client; nothing is cached

pub mod clients;
pub mod config;
pub mod error;
pub mod store;

// Re-export public types at crate root for convenience
pub use config::{
    AccessToken, ApiType, ContextToken, ShopwareConfig, ShopwareConfigBuilder, StoreDomain,
};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    ApiClientError, FailureKind, HttpMethod, InvalidOperationError, InvokeError, Operation,
    RequestParams, StoreApiClient, UnknownError,
};

// Re-export storefront types
pub use store::{
    Category, CategoryListingResult, Criteria, CrossSellingElement, Filter, NavigationType,
    Product, ProductListingCriteria, ProductListingResult, RouteName, SalesChannelContext, SeoUrl,
    SeoUrlResult, StoreApi,
};
