//! Search criteria for listing-style operations.
//!
//! These types mirror the Shopware criteria JSON format. Every field is
//! optional and omitted from the serialized form when unset, so a default
//! value is an empty (partial) criteria object.
//!
//! # Example
//!
//! ```rust
//! use shopware_api::store::{Criteria, Filter, Sort};
//! use serde_json::json;
//!
//! let criteria = Criteria {
//!     limit: Some(10),
//!     filter: Some(vec![Filter::equals("active", true)]),
//!     sort: Some(vec![Sort::desc("createdAt")]),
//!     ..Criteria::default()
//! };
//!
//! assert_eq!(
//!     serde_json::to_value(&criteria).unwrap(),
//!     json!({
//!         "limit": 10,
//!         "filter": [{"type": "equals", "field": "active", "value": true}],
//!         "sort": [{"field": "createdAt", "order": "DESC"}]
//!     })
//! );
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Logical operator joining the queries of a `multi` or `not` filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOperator {
    /// All queries must match.
    And,
    /// At least one query must match.
    Or,
}

/// Bounds of a `range` filter.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeParameters {
    /// Greater than or equal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<Value>,
    /// Less than or equal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<Value>,
    /// Strictly greater than.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<Value>,
    /// Strictly less than.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<Value>,
}

/// A criteria filter.
///
/// Serialized with a `type` discriminator, e.g.
/// `{"type": "equals", "field": "routeName", "value": "frontend.navigation.page"}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Filter {
    /// Field equals a value.
    Equals {
        /// The field path.
        field: String,
        /// The expected value.
        value: Value,
    },
    /// Field equals any of the values.
    EqualsAny {
        /// The field path.
        field: String,
        /// The accepted values.
        value: Vec<Value>,
    },
    /// Field contains a substring.
    Contains {
        /// The field path.
        field: String,
        /// The substring.
        value: String,
    },
    /// Field starts with a prefix.
    Prefix {
        /// The field path.
        field: String,
        /// The prefix.
        value: String,
    },
    /// Field ends with a suffix.
    Suffix {
        /// The field path.
        field: String,
        /// The suffix.
        value: String,
    },
    /// Field lies within bounds.
    Range {
        /// The field path.
        field: String,
        /// The bounds.
        parameters: RangeParameters,
    },
    /// Combination of nested filters.
    Multi {
        /// How the nested filters are joined.
        operator: FilterOperator,
        /// The nested filters.
        queries: Vec<Filter>,
    },
    /// Negated combination of nested filters.
    Not {
        /// How the nested filters are joined before negation.
        operator: FilterOperator,
        /// The nested filters.
        queries: Vec<Filter>,
    },
}

impl Filter {
    /// Creates an `equals` filter.
    #[must_use]
    pub fn equals(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Equals {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates an `equalsAny` filter.
    #[must_use]
    pub fn equals_any<V: Into<Value>>(
        field: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Self::EqualsAny {
            field: field.into(),
            value: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a `contains` filter.
    #[must_use]
    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Contains {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates a `multi` filter matching when any query matches.
    #[must_use]
    pub const fn any(queries: Vec<Self>) -> Self {
        Self::Multi {
            operator: FilterOperator::Or,
            queries,
        }
    }

    /// Creates a `multi` filter matching when all queries match.
    #[must_use]
    pub const fn all(queries: Vec<Self>) -> Self {
        Self::Multi {
            operator: FilterOperator::And,
            queries,
        }
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

/// A sorting instruction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sort {
    /// The field path.
    pub field: String,
    /// The direction.
    pub order: SortDirection,
    /// Whether to sort numbers inside strings naturally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub natural_sorting: Option<bool>,
}

impl Sort {
    /// Ascending sort on `field`.
    #[must_use]
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortDirection::Asc,
            natural_sorting: None,
        }
    }

    /// Descending sort on `field`.
    #[must_use]
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortDirection::Desc,
            natural_sorting: None,
        }
    }
}

/// How the total number of matches is computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TotalCountMode {
    /// No total is computed.
    None,
    /// The exact total is computed.
    Exact,
    /// Only whether further pages exist is computed.
    NextPages,
}

/// Generic entity search criteria.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criteria {
    /// One-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Restrict the search to these ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,
    /// Free-text search term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    /// Filters applied before aggregation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Vec<Filter>>,
    /// Filters applied after aggregation.
    #[serde(rename = "post-filter", skip_serializing_if = "Option::is_none")]
    pub post_filter: Option<Vec<Filter>>,
    /// Sorting instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<Sort>>,
    /// Associations to load, keyed by association name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associations: Option<BTreeMap<String, Criteria>>,
    /// Aggregation definitions, passed through verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Vec<Value>>,
    /// Fields to include per entity API alias.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub includes: Option<BTreeMap<String, Vec<String>>>,
    /// Fields to group results by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping: Option<Vec<String>>,
    /// Total count computation mode.
    #[serde(rename = "total-count-mode", skip_serializing_if = "Option::is_none")]
    pub total_count_mode: Option<TotalCountMode>,
}

/// Criteria for product listings, search, and cross-selling.
///
/// Extends [`Criteria`] with the storefront listing parameters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductListingCriteria {
    /// The generic criteria fields.
    #[serde(flatten)]
    pub criteria: Criteria,
    /// Free-text query, also used to build the search term of a search request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Sorting key of the listing (e.g., `name-asc`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    /// Pipe-separated manufacturer ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    /// Pipe-separated property option ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<String>,
    /// Lower price bound.
    #[serde(rename = "min-price", skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    /// Upper price bound.
    #[serde(rename = "max-price", skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    /// Minimum average rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    /// Only products with free shipping.
    #[serde(rename = "shipping-free", skip_serializing_if = "Option::is_none")]
    pub shipping_free: Option<bool>,
    /// Skip aggregations in the response.
    #[serde(rename = "no-aggregations", skip_serializing_if = "Option::is_none")]
    pub no_aggregations: Option<bool>,
    /// Return only aggregations.
    #[serde(rename = "only-aggregations", skip_serializing_if = "Option::is_none")]
    pub only_aggregations: Option<bool>,
}

impl From<Criteria> for ProductListingCriteria {
    fn from(criteria: Criteria) -> Self {
        Self {
            criteria,
            ..Self::default()
        }
    }
}
