//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Shopware sales channel access key.
///
/// This newtype ensures the token is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use shopware_api::AccessToken;
///
/// let token = AccessToken::new("SWSCXYZ").unwrap();
/// assert_eq!(token.as_ref(), "SWSCXYZ");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A Shopware context token identifying a session or cart.
///
/// Sent as the `sw-context-token` header. The value is masked in debug output.
///
/// # Example
///
/// ```rust
/// use shopware_api::ContextToken;
///
/// let token = ContextToken::new("cart-123").unwrap();
/// assert_eq!(token.as_ref(), "cart-123");
/// assert!(ContextToken::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ContextToken(String);

impl ContextToken {
    /// Creates a new context token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyContextToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyContextToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ContextToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ContextToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ContextToken(*****)")
    }
}

impl Serialize for ContextToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ContextToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated Shopware store domain.
///
/// The domain must be an absolute `http` or `https` URL. Trailing slashes
/// are trimmed so paths can be appended safely.
///
/// # Example
///
/// ```rust
/// use shopware_api::StoreDomain;
///
/// let domain = StoreDomain::new("https://shop.example.com/").unwrap();
/// assert_eq!(domain.as_ref(), "https://shop.example.com");
/// assert_eq!(domain.scheme(), "https");
/// assert_eq!(domain.host_name(), "shop.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreDomain {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl StoreDomain {
    /// Creates a new validated store domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStoreDomain`] if the URL has no
    /// `http`/`https` scheme, no host, or contains whitespace.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into();
        let url = domain.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidStoreDomain {
            domain: domain.clone(),
        };

        if url.chars().any(char::is_whitespace) {
            return Err(invalid());
        }

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = url[..scheme_end].to_ascii_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for StoreDomain {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for StoreDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
