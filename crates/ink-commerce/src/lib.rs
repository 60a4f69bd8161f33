//! Commerce domain types for the Inkorner storefront.
//!
//! - **Money**: fixed-point amounts in minor units, parsed from the
//!   API's decimal strings; no floating point anywhere in currency math.
//! - **Cart**: the session cart — ordered line items, merge-on-add,
//!   derived totals — plus `CartStore`, the mutex-guarded handle with
//!   change subscriptions that pages mutate the cart through.
//! - **Catalog**: products, variants and the site's fixed navigation
//!   lists, shaped after what the Storefront API returns.
//!
//! # Example
//!
//! ```
//! use ink_commerce::prelude::*;
//!
//! let store = CartStore::new(Currency::CHF);
//! let ink = LineItemInput::new(
//!     VariantId::new("gid://shopify/ProductVariant/1"),
//!     "Encre Panthera Noir",
//!     Money::parse("35.00", Currency::CHF).unwrap(),
//! );
//! store.add_item(ink, 2).unwrap();
//!
//! assert_eq!(store.item_count(), 2);
//! assert_eq!(store.total().display(), "70.00 CHF");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use cart::{Cart, CartSnapshot, CartStore, LineItem, LineItemInput};
pub use error::{CartError, MoneyError};
pub use ids::{ProductId, VariantId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CartError, MoneyError};
    pub use crate::ids::{ProductId, VariantId};
    pub use crate::money::{Currency, Money};

    pub use crate::cart::{
        Cart, CartSnapshot, CartStore, LineItem, LineItemInput, SubscriptionId,
        MAX_LINE_ITEMS, MAX_QUANTITY_PER_ITEM,
    };

    pub use crate::catalog::{
        brand_display_name, brand_for_slug, brand_slug, category_slug, nav_category_for_slug,
        CategoryTile, Product, ProductImage, ProductOption, ProductSummary, ProductVariant,
        SelectedOption, CATEGORY_TILES, FEATURED_BRANDS, NAV_CATEGORIES,
    };
}
