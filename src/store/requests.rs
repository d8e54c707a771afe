//! Operation identifiers and parameter builders of the storefront requests.
//!
//! Each builder assembles the [`RequestParams`] of one operation. The merge
//! order matters: a later write wins on a key collision, so the order below
//! decides whether a criteria field or an explicit argument survives.

use serde_json::json;

use crate::clients::RequestParams;
use crate::store::criteria::{Criteria, Filter, ProductListingCriteria};
use crate::store::types::{NavigationType, RouteName};

pub const READ_NAVIGATION: &str =
    "readNavigation post /navigation/{activeId}/{rootId} sw-include-seo-urls";
pub const READ_CATEGORY: &str = "readCategory post /category/{navigationId}?slots";
pub const READ_CATEGORY_LIST: &str = "readCategoryList post /category";
pub const READ_PRODUCT: &str = "readProduct post /product";
pub const READ_PRODUCT_LISTING: &str = "readProductListing post /product-listing/{categoryId}";
pub const SEARCH_PAGE: &str = "searchPage post /search";
pub const READ_SEO_URL: &str = "readSeoUrl post /seo-url";
pub const READ_PRODUCT_CROSS_SELLINGS: &str =
    "readProductCrossSellings post /product/{productId}/cross-selling";
pub const READ_CONTEXT: &str = "readContext get /context";

/// Default page size of a route-name SEO URL lookup.
pub const DEFAULT_SEO_URLS_LIMIT: u32 = 100;

/// Default page size of a handle SEO URL lookup.
pub const DEFAULT_SEO_URL_LIMIT: u32 = 1;

/// `activeId` and `rootId` both name the navigation, plus the tree depth.
#[must_use]
pub fn navigation_params(navigation: &NavigationType, depth: u32) -> RequestParams {
    RequestParams::new()
        .with("activeId", navigation.as_str())
        .with("rootId", navigation.as_str())
        .with("depth", depth)
}

/// The category id, with the criteria nested under `criteria` when given.
///
/// # Errors
///
/// Returns an error if the criteria cannot be serialized.
pub fn category_params(
    category_id: &str,
    criteria: Option<&ProductListingCriteria>,
) -> Result<RequestParams, serde_json::Error> {
    let criteria = criteria.map(serde_json::to_value).transpose()?;
    Ok(RequestParams::new()
        .with("navigationId", category_id)
        .with_opt("criteria", criteria))
}

/// The criteria fields at top level.
///
/// # Errors
///
/// Returns an error if the criteria cannot be serialized.
pub fn criteria_params(criteria: &Criteria) -> Result<RequestParams, serde_json::Error> {
    RequestParams::new().merge(criteria)
}

/// The listing criteria fields at top level.
///
/// # Errors
///
/// Returns an error if the criteria cannot be serialized.
pub fn product_criteria_params(
    criteria: &ProductListingCriteria,
) -> Result<RequestParams, serde_json::Error> {
    RequestParams::new().merge(criteria)
}

/// Criteria fields first, then `categoryId`, so the explicit id wins.
///
/// # Errors
///
/// Returns an error if the criteria cannot be serialized.
pub fn category_products_params(
    category_id: &str,
    criteria: &ProductListingCriteria,
) -> Result<RequestParams, serde_json::Error> {
    Ok(RequestParams::new()
        .merge(criteria)?
        .with("categoryId", category_id))
}

/// `search` holds the URI-component-encoded query (empty when absent), then the
/// criteria fields.
///
/// # Errors
///
/// Returns an error if the criteria cannot be serialized.
pub fn search_params(
    criteria: Option<&ProductListingCriteria>,
) -> Result<RequestParams, serde_json::Error> {
    let query = criteria.and_then(|c| c.query.as_deref()).unwrap_or_default();
    RequestParams::new()
        .with("search", encode_uri_component(query))
        .merge(&criteria)
}

/// Paging plus an equality filter on `routeName`.
#[must_use]
pub fn seo_urls_params(route_name: &RouteName, page: u32, limit: u32) -> RequestParams {
    paged_filter_params(page, limit, Filter::equals("routeName", route_name.as_str()))
}

/// Paging plus a filter matching `seoPathInfo` with or without a trailing slash.
#[must_use]
pub fn seo_url_params(handle: &str, page: u32, limit: u32) -> RequestParams {
    let filter = Filter::any(vec![
        Filter::equals("seoPathInfo", format!("{handle}/")),
        Filter::equals("seoPathInfo", handle),
    ]);
    paged_filter_params(page, limit, filter)
}

/// `productId` first, then the criteria fields.
///
/// # Errors
///
/// Returns an error if the criteria cannot be serialized.
pub fn cross_sell_params(
    product_id: &str,
    criteria: Option<&ProductListingCriteria>,
) -> Result<RequestParams, serde_json::Error> {
    RequestParams::new()
        .with("productId", product_id)
        .merge(&criteria)
}

/// Percent-encodes a search term, leaving `A-Za-z0-9 - _ . ! ~ * ' ( )` as is.
fn encode_uri_component(value: &str) -> String {
    urlencoding::encode(value)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

fn paged_filter_params(page: u32, limit: u32, filter: Filter) -> RequestParams {
    RequestParams::new()
        .with("page", page)
        .with("limit", limit)
        .with("filter", json!([filter]))
}
