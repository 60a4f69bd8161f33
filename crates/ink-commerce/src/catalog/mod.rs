//! Product catalog module.
//!
//! Catalog data always comes from the remote commerce API; these types
//! model it for rendering, plus the site's fixed navigation lists.

mod navigation;
mod product;

pub use navigation::{
    brand_display_name, brand_for_slug, brand_slug, category_slug, nav_category_for_slug,
    CategoryTile, CATEGORY_TILES, FEATURED_BRANDS, NAV_CATEGORIES,
};
pub use product::{
    Product, ProductImage, ProductOption, ProductSummary, ProductVariant, SelectedOption,
};
