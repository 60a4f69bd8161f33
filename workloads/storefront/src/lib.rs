//! Inkorner storefront - the deployable Spin workload.
//!
//! A server-rendered storefront for a tattoo-supply shop: home page with
//! carousel, category tiles, brand grid and featured products, product
//! detail with variant selection, brand and category listings, search,
//! and a session-backed shopping cart driven by form posts.
//!
//! Catalog data comes from the Storefront GraphQL API
//! (`ink-storefront-api`); the cart lives in `ink-commerce` and is
//! persisted per visitor session (`ink-cache`). Pages are assembled as
//! whole HTML bodies from the section renderers in `sections`; the
//! `pages` module orchestrates one route each.
//!
//! Everything except the Spin component entry compiles natively, so the
//! route table, forms, sections and cart flow run under plain
//! `cargo test`.

pub mod data;
pub mod pages;
pub mod routes;
pub mod sections;

#[cfg(target_arch = "wasm32")]
mod component;
