//! Shopware API type selection.
//!
//! Shopware exposes two HTTP APIs under different path prefixes. This module
//! provides the [`ApiType`] enum for choosing between them.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// The Shopware API a client talks to.
///
/// # Example
///
/// ```rust
/// use shopware_api::ApiType;
///
/// let api_type: ApiType = "store-api".parse().unwrap();
/// assert_eq!(api_type, ApiType::StoreApi);
/// assert_eq!(api_type.path_segment(), "store-api");
/// assert_eq!(ApiType::default(), ApiType::StoreApi);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiType {
    /// The sales channel Store API (`/store-api`), authenticated by `sw-access-key`.
    #[default]
    StoreApi,
    /// The Admin API (`/api`), authenticated by a bearer token.
    AdminApi,
}

impl ApiType {
    /// Returns the path segment appended to the store domain.
    #[must_use]
    pub const fn path_segment(&self) -> &'static str {
        match self {
            Self::StoreApi => "store-api",
            Self::AdminApi => "api",
        }
    }

    /// Returns the canonical configuration name of this API type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StoreApi => "store-api",
            Self::AdminApi => "admin-api",
        }
    }
}

impl fmt::Display for ApiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "store-api" | "store" => Ok(Self::StoreApi),
            "admin-api" | "admin" | "api" => Ok(Self::AdminApi),
            _ => Err(ConfigError::InvalidApiType {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_canonical_and_short_names() {
        assert_eq!("store-api".parse::<ApiType>().unwrap(), ApiType::StoreApi);
        assert_eq!("STORE".parse::<ApiType>().unwrap(), ApiType::StoreApi);
        assert_eq!("admin-api".parse::<ApiType>().unwrap(), ApiType::AdminApi);
        assert_eq!(" api ".parse::<ApiType>().unwrap(), ApiType::AdminApi);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let result = "graphql".parse::<ApiType>();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidApiType { value }) if value == "graphql"
        ));
    }

    #[test]
    fn test_path_segment() {
        assert_eq!(ApiType::StoreApi.path_segment(), "store-api");
        assert_eq!(ApiType::AdminApi.path_segment(), "api");
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for api_type in [ApiType::StoreApi, ApiType::AdminApi] {
            assert_eq!(api_type.to_string().parse::<ApiType>().unwrap(), api_type);
        }
    }
}
