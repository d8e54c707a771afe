//! Error types for the Shopware API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use shopware_api::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Shopware sales channel access key.")]
    EmptyAccessToken,

    /// Context token cannot be empty.
    #[error("Context token cannot be empty. Omit the token instead of passing an empty string.")]
    EmptyContextToken,

    /// Store domain is invalid.
    #[error("Invalid store domain '{domain}'. Expected an absolute URL with scheme (e.g., 'https://shop.example.com').")]
    InvalidStoreDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// API type is not recognised.
    #[error("Invalid API type '{value}'. Expected 'store-api' or 'admin-api'.")]
    InvalidApiType {
        /// The invalid value that was provided.
        value: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required environment variable is not set.
    #[error("Missing environment variable '{name}'.")]
    MissingEnvVar {
        /// The name of the environment variable.
        name: &'static str,
    },
}
