//! Storefront GraphQL API client for Inkorner catalog data.
//!
//! All catalog reads go through the shop's Storefront API: one POST per
//! operation to `{store}/api/graphql`, authenticated with the public
//! storefront token, answered in the standard `{data, errors}` envelope.
//! Wire shapes land as decimal-string money and `edges`/`node`
//! connections; this crate converts them into the `ink-commerce` domain
//! types before anything renders.
//!
//! # Example
//!
//! ```rust,ignore
//! use ink_storefront_api::StorefrontClient;
//!
//! // In a request handler
//! let client = StorefrontClient::from_env();
//!
//! let featured = client.featured_products().await?;
//! for product in &featured {
//!     println!("{}: {}", product.title, product.price.display());
//! }
//!
//! if let Some(product) = client.product_by_handle("panthera-encre-noir-or").await? {
//!     println!("{} variants", product.variants.len());
//! }
//! ```

mod client;
mod error;
mod graphql;
mod http;
pub mod queries;
mod wire;

pub use client::{StorefrontClient, StorefrontConfig};
pub use error::ApiError;
pub use graphql::{GraphQlError, GraphQlRequest, GraphQlResponse};
pub use http::{ApiResponse, HttpRequest, Method};
pub use wire::{ProductCardNode, ProductNode, ProductsData};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{ApiError, StorefrontClient, StorefrontConfig};
}
