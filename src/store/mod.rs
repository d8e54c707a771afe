//! Typed storefront requests against the Shopware Store API.
//!
//! [`StoreApi`] offers one method per storefront operation: navigation,
//! categories, product listings, search, SEO URLs, cross-selling, and the
//! session context. Every method builds its parameters, sends them through a
//! fresh [`StoreApiClient`], and returns `Some(result)` on success.
//!
//! # Failure Handling
//!
//! No method returns an error. Any failure is logged through [`safe_invoke`]
//! and collapses to `None`, so "not found", "network down", and "bad request"
//! all look the same to the caller. Use [`StoreApi::client`] and
//! [`StoreApiClient::invoke`] directly when the failure reason matters.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopware_api::{ShopwareConfig, StoreApi};
//! use shopware_api::store::{NavigationType, ProductListingCriteria};
//!
//! let api = StoreApi::new(ShopwareConfig::from_env()?);
//!
//! if let Some(tree) = api.request_navigation(&NavigationType::Main, 2).await {
//!     for category in tree {
//!         println!("{:?}", category.name);
//!     }
//! }
//!
//! let criteria = ProductListingCriteria {
//!     query: Some("red shirt".to_string()),
//!     ..ProductListingCriteria::default()
//! };
//! let results = api.request_search_collection_products(Some(&criteria)).await;
//! ```

mod criteria;
pub mod requests;
mod safe_invoke;
mod types;

pub use criteria::{
    Criteria, Filter, FilterOperator, ProductListingCriteria, RangeParameters, Sort,
    SortDirection, TotalCountMode,
};
pub use requests::{DEFAULT_SEO_URLS_LIMIT, DEFAULT_SEO_URL_LIMIT};
pub use safe_invoke::{report_failure, safe_invoke};
pub use types::{
    Category, CategoryListingResult, CrossSellingElement, EntitySearchResult, NavigationType,
    Product, ProductListingResult, RouteName, SalesChannelContext, SeoUrl, SeoUrlResult,
};

use serde::de::DeserializeOwned;

use crate::clients::{InvokeError, RequestParams, StoreApiClient, UnknownError};
use crate::config::{ContextToken, ShopwareConfig};

/// Typed request helpers for one Shopware store.
///
/// Holds only the immutable configuration; a new [`StoreApiClient`] is
/// built for every call.
///
/// # Thread Safety
///
/// `StoreApi` is `Clone`, `Send`, and `Sync`. Calls share no mutable state
/// and may run concurrently.
#[derive(Clone, Debug)]
pub struct StoreApi {
    config: ShopwareConfig,
}

// Verify StoreApi is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreApi>();
};

impl StoreApi {
    /// Creates the request helpers for a configured store.
    #[must_use]
    pub const fn new(config: ShopwareConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ShopwareConfig {
        &self.config
    }

    /// Builds a fresh client, optionally bound to a session or cart.
    #[must_use]
    pub fn client(&self, context_token: Option<&ContextToken>) -> StoreApiClient {
        StoreApiClient::new(&self.config, context_token)
    }

    /// Reads a navigation tree.
    ///
    /// The navigation is used as both active and root id; SEO URLs are
    /// included in the response.
    pub async fn request_navigation(
        &self,
        navigation: &NavigationType,
        depth: u32,
    ) -> Option<Vec<Category>> {
        self.request(requests::READ_NAVIGATION, None, || {
            Ok(requests::navigation_params(navigation, depth))
        })
        .await
    }

    /// Reads a single category, with optional listing criteria for its products.
    pub async fn request_category(
        &self,
        category_id: &str,
        criteria: Option<&ProductListingCriteria>,
    ) -> Option<Category> {
        self.request(requests::READ_CATEGORY, None, || {
            requests::category_params(category_id, criteria)
        })
        .await
    }

    /// Reads a page of categories.
    pub async fn request_category_list(
        &self,
        criteria: &Criteria,
    ) -> Option<CategoryListingResult> {
        self.request(requests::READ_CATEGORY_LIST, None, || {
            requests::criteria_params(criteria)
        })
        .await
    }

    /// Reads a page of products.
    pub async fn request_products_collection(
        &self,
        criteria: &ProductListingCriteria,
    ) -> Option<ProductListingResult> {
        self.request(requests::READ_PRODUCT, None, || {
            requests::product_criteria_params(criteria)
        })
        .await
    }

    /// Reads the product listing of a category.
    pub async fn request_category_products_collection(
        &self,
        category_id: &str,
        criteria: &ProductListingCriteria,
    ) -> Option<ProductListingResult> {
        self.request(requests::READ_PRODUCT_LISTING, None, || {
            requests::category_products_params(category_id, criteria)
        })
        .await
    }

    /// Searches products by `criteria.query`.
    pub async fn request_search_collection_products(
        &self,
        criteria: Option<&ProductListingCriteria>,
    ) -> Option<ProductListingResult> {
        self.request(requests::SEARCH_PAGE, None, || requests::search_params(criteria))
            .await
    }

    /// Lists SEO URLs of a route.
    pub async fn request_seo_urls(
        &self,
        route_name: &RouteName,
        page: u32,
        limit: u32,
    ) -> Option<SeoUrlResult> {
        self.request(requests::READ_SEO_URL, None, || {
            Ok(requests::seo_urls_params(route_name, page, limit))
        })
        .await
    }

    /// Lists SEO URLs of a route: first page, [`DEFAULT_SEO_URLS_LIMIT`] records.
    pub async fn request_seo_urls_default(&self, route_name: &RouteName) -> Option<SeoUrlResult> {
        self.request_seo_urls(route_name, 1, DEFAULT_SEO_URLS_LIMIT).await
    }

    /// Resolves a path handle to its SEO URL records.
    ///
    /// Matches the handle stored with or without a trailing slash.
    pub async fn request_seo_url(
        &self,
        handle: &str,
        page: u32,
        limit: u32,
    ) -> Option<SeoUrlResult> {
        self.request(requests::READ_SEO_URL, None, || {
            Ok(requests::seo_url_params(handle, page, limit))
        })
        .await
    }

    /// Resolves a path handle: first page, [`DEFAULT_SEO_URL_LIMIT`] record.
    pub async fn request_seo_url_default(&self, handle: &str) -> Option<SeoUrlResult> {
        self.request_seo_url(handle, 1, DEFAULT_SEO_URL_LIMIT).await
    }

    /// Reads the cross-selling groups of a product.
    pub async fn request_cross_sell(
        &self,
        product_id: &str,
        criteria: Option<&ProductListingCriteria>,
    ) -> Option<Vec<CrossSellingElement>> {
        self.request(requests::READ_PRODUCT_CROSS_SELLINGS, None, || {
            requests::cross_sell_params(product_id, criteria)
        })
        .await
    }

    /// Reads the sales channel context, of a session when a token is given.
    pub async fn request_context(
        &self,
        context_token: Option<&ContextToken>,
    ) -> Option<SalesChannelContext> {
        self.request(requests::READ_CONTEXT, context_token, || Ok(RequestParams::new()))
            .await
    }

    /// Builds the parameters, invokes `operation` on a fresh client, and
    /// collapses any failure to `None`.
    async fn request<T, P>(
        &self,
        operation: &str,
        context_token: Option<&ContextToken>,
        build_params: P,
    ) -> Option<T>
    where
        T: DeserializeOwned,
        P: FnOnce() -> Result<RequestParams, serde_json::Error>,
    {
        safe_invoke(operation, async {
            let params = build_params()
                .map_err(|error| InvokeError::from(UnknownError::Serialization(error)))?;
            self.client(context_token)
                .invoke::<T>(operation, params)
                .await
        })
        .await
    }
}
