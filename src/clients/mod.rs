//! Client types for Shopware API communication.
//!
//! This module provides the invocation layer underneath the typed request
//! helpers in [`crate::store`]. It turns an operation identifier and a
//! parameter object into one HTTP request and classifies every failure.
//!
//! # Overview
//!
//! - [`StoreApiClient`]: The async client with a single `invoke` entry point
//! - [`Operation`]: A parsed operation identifier
//! - [`RequestParams`]: The parameter object of a request
//! - [`InvokeError`]: Unified error type, split into [`ApiClientError`]
//!   (client-reported) and [`UnknownError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use shopware_api::clients::{RequestParams, StoreApiClient};
//!
//! let client = StoreApiClient::new(&config, None);
//! let params = RequestParams::new().with("limit", 10);
//!
//! let listing: serde_json::Value = client.invoke("readProduct post /product", params).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Each call sends exactly one request; failures are returned to the
//! caller as they occur.

mod api_client;
mod errors;
mod operation;
mod params;

pub use api_client::{StoreApiClient, ACCESS_KEY_HEADER, CONTEXT_TOKEN_HEADER, SDK_VERSION};
pub use errors::{ApiClientError, FailureKind, InvalidOperationError, InvokeError, UnknownError};
pub use operation::{HttpMethod, Operation, ResolvedRequest};
pub use params::RequestParams;
