//! The typed Storefront API client.

use serde::de::DeserializeOwned;
use serde_json::json;

use ink_commerce::catalog::{Product, ProductSummary};

use crate::graphql::{GraphQlRequest, GraphQlResponse};
use crate::http::HttpRequest;
use crate::queries;
use crate::wire::{BrandsData, ProductCardNode, ProductData, ProductNode, ProductsData};
use crate::ApiError;

/// Store URL used when the environment provides none.
const DEFAULT_STORE_URL: &str = "https://inkorner.myshopify.com";

/// Connection settings for the Storefront API.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Origin of the shop, e.g. `https://inkorner.myshopify.com`.
    pub store_url: String,
    /// Public Storefront API access token.
    pub access_token: String,
}

impl StorefrontConfig {
    /// Create a config from explicit values.
    pub fn new(store_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            store_url: store_url.into(),
            access_token: access_token.into(),
        }
    }

    /// Read `SHOPIFY_STORE_URL` and `SHOPIFY_STOREFRONT_ACCESS_TOKEN`
    /// from the environment. Missing values fall back to the demo store
    /// URL and an empty token; requests then fail and pages degrade to
    /// their fallback content.
    pub fn from_env() -> Self {
        Self {
            store_url: std::env::var("SHOPIFY_STORE_URL")
                .unwrap_or_else(|_| DEFAULT_STORE_URL.to_string()),
            access_token: std::env::var("SHOPIFY_STOREFRONT_ACCESS_TOKEN")
                .unwrap_or_default(),
        }
    }

    /// The GraphQL endpoint URL.
    pub fn endpoint(&self) -> String {
        format!("{}/api/graphql", self.store_url.trim_end_matches('/'))
    }
}

/// Typed client for the Storefront GraphQL API.
pub struct StorefrontClient {
    config: StorefrontConfig,
}

impl StorefrontClient {
    /// Create a client with an explicit config.
    pub fn new(config: StorefrontConfig) -> Self {
        Self { config }
    }

    /// Create a client configured from the environment.
    pub fn from_env() -> Self {
        Self::new(StorefrontConfig::from_env())
    }

    /// The endpoint requests go to, for logs and metrics.
    pub fn endpoint(&self) -> String {
        self.config.endpoint()
    }

    /// Fetch the home-page featured products.
    pub async fn featured_products(&self) -> Result<Vec<ProductSummary>, ApiError> {
        let data: ProductsData = self
            .execute(
                GraphQlRequest::new(queries::FEATURED_PRODUCTS_QUERY),
                "featured products",
            )
            .await?;
        summaries(data)
    }

    /// Fetch a full product by its handle. `None` when the handle does
    /// not resolve to a product.
    pub async fn product_by_handle(&self, handle: &str) -> Result<Option<Product>, ApiError> {
        let request = GraphQlRequest::with_variables(
            queries::PRODUCT_BY_HANDLE_QUERY,
            json!({ "handle": handle }),
        );
        let data: ProductData = self.execute(request, "product").await?;
        data.product.map(ProductNode::into_product).transpose()
    }

    /// Fetch the products of one brand (vendor).
    pub async fn products_by_brand(&self, vendor: &str) -> Result<Vec<ProductSummary>, ApiError> {
        let request = GraphQlRequest::with_variables(
            queries::PRODUCTS_BY_BRAND_QUERY,
            json!({ "vendor": field_filter("vendor", vendor) }),
        );
        let data: ProductsData = self.execute(request, "brand products").await?;
        summaries(data)
    }

    /// Fetch every vendor name the shop knows.
    pub async fn brands(&self) -> Result<Vec<String>, ApiError> {
        let data: BrandsData = self
            .execute(GraphQlRequest::new(queries::BRANDS_QUERY), "brands")
            .await?;
        Ok(data.shop.vendors.into_nodes())
    }

    /// Free-text product search.
    pub async fn search_products(&self, term: &str) -> Result<Vec<ProductSummary>, ApiError> {
        let request = GraphQlRequest::with_variables(
            queries::SEARCH_PRODUCTS_QUERY,
            json!({ "query": term }),
        );
        let data: ProductsData = self.execute(request, "search results").await?;
        summaries(data)
    }

    /// Fetch the products of one category, matched on product type.
    pub async fn products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<ProductSummary>, ApiError> {
        let request = GraphQlRequest::with_variables(
            queries::PRODUCTS_BY_CATEGORY_QUERY,
            json!({ "query": field_filter("product_type", category) }),
        );
        let data: ProductsData = self.execute(request, "category products").await?;
        summaries(data)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: GraphQlRequest<'_>,
        operation: &'static str,
    ) -> Result<T, ApiError> {
        let response = HttpRequest::post(self.config.endpoint())
            .header(
                "X-Shopify-Storefront-Access-Token",
                self.config.access_token.as_str(),
            )
            .json(&request)?
            .send()
            .await?
            .error_for_status()?;

        response.json::<GraphQlResponse<T>>()?.into_data(operation)
    }
}

fn summaries(data: ProductsData) -> Result<Vec<ProductSummary>, ApiError> {
    data.products
        .into_nodes()
        .into_iter()
        .map(ProductCardNode::into_summary)
        .collect()
}

/// Build a `field:value` filter for the products search query, quoting
/// values with whitespace so multi-word vendors and categories stay one
/// term. Double quotes in the value would end the term early and are
/// replaced.
fn field_filter(field: &str, value: &str) -> String {
    let cleaned = value.replace('"', " ");
    if cleaned.contains(char::is_whitespace) {
        format!("{}:\"{}\"", field, cleaned.trim())
    } else {
        format!("{}:{}", field, cleaned)
    }
}
