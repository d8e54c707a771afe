//! Configuration types for the Shopware API SDK.
//!
//! This module provides the core configuration types used to reach a
//! Shopware store.
//!
//! # Overview
//!
//! - [`ShopwareConfig`]: The main configuration struct holding all SDK settings
//! - [`ShopwareConfigBuilder`]: A builder for constructing [`ShopwareConfig`] instances
//! - [`StoreDomain`]: A validated store base URL
//! - [`AccessToken`]: A validated access key with masked debug output
//! - [`ContextToken`]: A session or cart token with masked debug output
//! - [`ApiType`]: Which Shopware API to call
//!
//! # Example
//!
//! ```rust
//! use shopware_api::{AccessToken, ApiType, ShopwareConfig, StoreDomain};
//!
//! let config = ShopwareConfig::builder()
//!     .store_domain(StoreDomain::new("https://shop.example.com").unwrap())
//!     .access_token(AccessToken::new("SWSCXYZ").unwrap())
//!     .api_type(ApiType::StoreApi)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://shop.example.com/store-api");
//! ```

mod api_type;
mod newtypes;

pub use api_type::ApiType;
pub use newtypes::{AccessToken, ContextToken, StoreDomain};

use crate::error::ConfigError;

/// Environment variable holding the store base URL.
pub const ENV_STORE_DOMAIN: &str = "SHOPWARE_STORE_DOMAIN";

/// Environment variable holding the sales channel access key.
pub const ENV_ACCESS_TOKEN: &str = "SHOPWARE_ACCESS_TOKEN";

/// Environment variable selecting the API type (optional).
pub const ENV_API_TYPE: &str = "SHOPWARE_API_TYPE";

/// Configuration for the Shopware API SDK.
///
/// # Thread Safety
///
/// `ShopwareConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct ShopwareConfig {
    store_domain: StoreDomain,
    access_token: AccessToken,
    api_type: ApiType,
    user_agent_prefix: Option<String>,
}

impl ShopwareConfig {
    /// Creates a new builder for constructing a `ShopwareConfig`.
    #[must_use]
    pub fn builder() -> ShopwareConfigBuilder {
        ShopwareConfigBuilder::new()
    }

    /// Builds a configuration from the process environment.
    ///
    /// Reads [`ENV_STORE_DOMAIN`] and [`ENV_ACCESS_TOKEN`] (required) and
    /// [`ENV_API_TYPE`] (optional, defaults to the Store API).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when a required variable is
    /// unset, or the validation error of the offending value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// This is the testable core of [`from_env`](Self::from_env).
    ///
    /// # Errors
    ///
    /// See [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let domain = lookup(ENV_STORE_DOMAIN).ok_or(ConfigError::MissingEnvVar {
            name: ENV_STORE_DOMAIN,
        })?;
        let token = lookup(ENV_ACCESS_TOKEN).ok_or(ConfigError::MissingEnvVar {
            name: ENV_ACCESS_TOKEN,
        })?;

        let mut builder = Self::builder()
            .store_domain(StoreDomain::new(domain)?)
            .access_token(AccessToken::new(token)?);

        if let Some(api_type) = lookup(ENV_API_TYPE).filter(|v| !v.trim().is_empty()) {
            builder = builder.api_type(api_type.parse()?);
        }

        builder.build()
    }

    /// Returns the store domain.
    #[must_use]
    pub const fn store_domain(&self) -> &StoreDomain {
        &self.store_domain
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API type.
    #[must_use]
    pub const fn api_type(&self) -> ApiType {
        self.api_type
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the store domain joined with the API type path segment.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!(
            "{}/{}",
            self.store_domain.as_ref(),
            self.api_type.path_segment()
        )
    }
}

// Verify ShopwareConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopwareConfig>();
};

/// Builder for constructing [`ShopwareConfig`] instances.
///
/// Required fields are `store_domain` and `access_token`.
///
/// # Defaults
///
/// - `api_type`: [`ApiType::StoreApi`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ShopwareConfigBuilder {
    store_domain: Option<StoreDomain>,
    access_token: Option<AccessToken>,
    api_type: Option<ApiType>,
    user_agent_prefix: Option<String>,
}

impl ShopwareConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store domain (required).
    #[must_use]
    pub fn store_domain(mut self, domain: StoreDomain) -> Self {
        self.store_domain = Some(domain);
        self
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API type.
    #[must_use]
    pub const fn api_type(mut self, api_type: ApiType) -> Self {
        self.api_type = Some(api_type);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ShopwareConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `store_domain` or
    /// `access_token` are not set.
    pub fn build(self) -> Result<ShopwareConfig, ConfigError> {
        let store_domain = self
            .store_domain
            .ok_or(ConfigError::MissingRequiredField {
                field: "store_domain",
            })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        Ok(ShopwareConfig {
            store_domain,
            access_token,
            api_type: self.api_type.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
