//! Decoded Store API response types.
//!
//! The Store API returns large, extensible entity documents. These types
//! name the fields storefronts commonly read and keep everything else in an
//! `extra` map, so decoding never fails on unknown or missing fields.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A SEO URL record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoUrl {
    pub id: Option<String>,
    pub sales_channel_id: Option<String>,
    pub language_id: Option<String>,
    /// Id of the entity the URL points at.
    pub foreign_key: Option<String>,
    pub route_name: Option<String>,
    /// The technical path (e.g., `/navigation/<id>`).
    pub path_info: Option<String>,
    /// The human-readable path, without a leading slash.
    pub seo_path_info: Option<String>,
    pub is_canonical: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A category, as returned by navigation and category reads.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    pub id: Option<String>,
    pub parent_id: Option<String>,
    pub name: Option<String>,
    pub level: Option<u32>,
    pub active: Option<bool>,
    pub visible: Option<bool>,
    pub child_count: Option<u32>,
    /// Category type (`page`, `link`, `folder`).
    #[serde(rename = "type")]
    pub category_type: Option<String>,
    pub external_link: Option<String>,
    pub translated: Option<Value>,
    pub media: Option<Value>,
    pub cms_page: Option<Value>,
    pub seo_urls: Option<Vec<SeoUrl>>,
    /// Child nodes of a navigation tree.
    pub children: Option<Vec<Category>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A product.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub id: Option<String>,
    pub parent_id: Option<String>,
    pub product_number: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
    pub stock: Option<i64>,
    pub calculated_price: Option<Value>,
    pub cover: Option<Value>,
    pub translated: Option<Value>,
    pub seo_urls: Option<Vec<SeoUrl>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Decodes a list that the store may send as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A paged entity search result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    default,
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct EntitySearchResult<T> {
    #[serde(deserialize_with = "null_as_empty")]
    pub elements: Vec<T>,
    pub total: Option<u64>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub aggregations: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T> Default for EntitySearchResult<T> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            total: None,
            page: None,
            limit: None,
            aggregations: None,
            extra: Map::new(),
        }
    }
}

/// A page of categories.
pub type CategoryListingResult = EntitySearchResult<Category>;

/// A page of SEO URL records.
pub type SeoUrlResult = EntitySearchResult<SeoUrl>;

/// A page of products with the storefront listing state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductListingResult {
    #[serde(deserialize_with = "null_as_empty")]
    pub elements: Vec<Product>,
    pub total: Option<u64>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub aggregations: Option<Value>,
    /// The active sorting key.
    pub sorting: Option<String>,
    pub available_sortings: Option<Vec<Value>>,
    pub current_filters: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One cross-selling group of a product.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CrossSellingElement {
    /// The cross-selling definition (name, type, position).
    pub cross_selling: Option<Value>,
    #[serde(deserialize_with = "null_as_empty")]
    pub products: Vec<Product>,
    pub total: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The sales channel context of a session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalesChannelContext {
    /// The context token of the session.
    pub token: Option<String>,
    pub currency: Option<Value>,
    pub customer: Option<Value>,
    pub sales_channel: Option<Value>,
    pub shipping_method: Option<Value>,
    pub payment_method: Option<Value>,
    pub context: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Which navigation tree to read.
///
/// The named variants are the sales channel's configured entry points; a
/// concrete category id reads the tree below that category.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavigationType {
    /// The main navigation.
    Main,
    /// The footer navigation.
    Footer,
    /// The service navigation.
    Service,
    /// The tree below a specific category.
    Id(String),
}

impl NavigationType {
    /// Returns the value used as both active and root id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Main => "main-navigation",
            Self::Footer => "footer-navigation",
            Self::Service => "service-navigation",
            Self::Id(id) => id,
        }
    }
}

impl fmt::Display for NavigationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storefront route names used to look up SEO URLs.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    /// Category pages.
    NavigationPage,
    /// Product detail pages.
    DetailPage,
    /// Landing pages.
    LandingPage,
    /// Any other route name.
    Custom(String),
}

impl RouteName {
    /// Returns the route name string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::NavigationPage => "frontend.navigation.page",
            Self::DetailPage => "frontend.detail.page",
            Self::LandingPage => "frontend.landing.page",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for RouteName {
    fn from(name: &str) -> Self {
        match name {
            "frontend.navigation.page" => Self::NavigationPage,
            "frontend.detail.page" => Self::DetailPage,
            "frontend.landing.page" => Self::LandingPage,
            other => Self::Custom(other.to_string()),
        }
    }
}
