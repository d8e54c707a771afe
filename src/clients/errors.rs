//! Error types for Store API invocations.
//!
//! Every failure of [`StoreApiClient::invoke`](crate::clients::StoreApiClient::invoke)
//! falls into one of two kinds:
//!
//! - [`ApiClientError`]: a client-reported failure. The remote endpoint
//!   answered with a non-2xx status; the decoded error body is kept as
//!   [`details`](ApiClientError::details).
//! - [`UnknownError`]: anything else. Malformed operation identifiers,
//!   missing path parameters, network failures, and (de)serialization
//!   failures.
//!
//! [`InvokeError`] unifies both and exposes the classification through
//! [`InvokeError::kind`] and [`InvokeError::details`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shopware_api::clients::{FailureKind, InvokeError};
//!
//! match client.invoke::<serde_json::Value>("readContext get /context", params).await {
//!     Ok(context) => println!("token: {}", context["token"]),
//!     Err(error) if error.kind() == FailureKind::ClientReported => {
//!         println!("rejected: {error}, details: {:?}", error.details());
//!     }
//!     Err(error) => println!("failed: {error}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the remote endpoint answers with a non-successful status.
///
/// # Example
///
/// ```rust
/// use shopware_api::clients::ApiClientError;
/// use serde_json::json;
///
/// let error = ApiClientError {
///     status: 404,
///     message: "Category not found".to_string(),
///     details: json!({"errors": [{"status": "404", "detail": "Category not found"}]}),
/// };
///
/// assert_eq!(error.to_string(), "Category not found");
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiClientError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// A human readable summary of the failure.
    pub message: String,
    /// The decoded response body, or `null` when the body was empty or not JSON.
    pub details: serde_json::Value,
}

impl ApiClientError {
    /// Builds the error for a failed response from its status and decoded body.
    ///
    /// The message is taken from the first `errors[].detail` (falling back to
    /// `errors[].title`) of a Shopware error document, or from the status
    /// line when the body carries neither.
    #[must_use]
    pub fn from_response(status: u16, reason: Option<&str>, details: serde_json::Value) -> Self {
        let first_error = details
            .get("errors")
            .and_then(serde_json::Value::as_array)
            .and_then(|errors| errors.first());
        let described = first_error
            .and_then(|e| e.get("detail").or_else(|| e.get("title")))
            .and_then(serde_json::Value::as_str)
            .filter(|s| !s.is_empty());

        let message = described.map_or_else(
            || match reason {
                Some(reason) => format!("{status} {reason}"),
                None => status.to_string(),
            },
            ToString::to_string,
        );

        Self {
            status,
            message,
            details,
        }
    }
}

/// Error returned when an operation identifier cannot be turned into a request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidOperationError {
    /// The identifier does not have the `<name> <method> <path>` shape.
    #[error("Malformed operation '{operation}'. Expected '<name> <method> <path>'.")]
    Malformed {
        /// The identifier that was provided.
        operation: String,
    },

    /// The HTTP method token is not supported.
    #[error("Invalid Http method {method} in operation '{operation}'.")]
    InvalidMethod {
        /// The identifier that was provided.
        operation: String,
        /// The unsupported method token.
        method: String,
    },

    /// A `{placeholder}` in the path has no matching parameter.
    #[error("Missing path parameter '{name}' for operation '{operation}'.")]
    MissingPathParameter {
        /// The identifier that was provided.
        operation: String,
        /// The placeholder name.
        name: String,
    },
}

/// Any failure that is not reported by the remote endpoint itself.
#[derive(Debug, Error)]
pub enum UnknownError {
    /// The operation identifier could not be resolved.
    #[error(transparent)]
    InvalidOperation(#[from] InvalidOperationError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Request parameters could not be turned into JSON.
    #[error("Failed to serialize request parameters: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The response body did not match the expected type.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Classification of a failed invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The remote endpoint reported the failure and supplied details.
    ClientReported,
    /// Any other failure.
    Unknown,
}

/// Unified error type for Store API invocations.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// A client-reported failure.
    #[error(transparent)]
    Client(#[from] ApiClientError),

    /// Any other failure.
    #[error(transparent)]
    Unknown(#[from] UnknownError),
}

impl InvokeError {
    /// Returns the details payload of a client-reported failure.
    ///
    /// Unknown failures carry no details and return `None`.
    #[must_use]
    pub const fn details(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Client(error) => Some(&error.details),
            Self::Unknown(_) => None,
        }
    }

    /// Classifies the failure: client-reported when it exposes details.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        if self.details().is_some() {
            FailureKind::ClientReported
        } else {
            FailureKind::Unknown
        }
    }
}

impl From<InvalidOperationError> for InvokeError {
    fn from(error: InvalidOperationError) -> Self {
        Self::Unknown(error.into())
    }
}

impl From<reqwest::Error> for InvokeError {
    fn from(error: reqwest::Error) -> Self {
        Self::Unknown(error.into())
    }
}
