//! Shopping cart module.
//!
//! `Cart` holds the state and the operations; `CartStore` is the
//! lock-guarded, subscribable handle the storefront injects into its
//! pages.

mod cart;
mod store;

pub use cart::{
    Cart, CartSnapshot, LineItem, LineItemInput, MAX_LINE_ITEMS, MAX_QUANTITY_PER_ITEM,
    MAX_UNIT_PRICE_CENTS,
};
pub use store::{CartStore, SubscriptionId};
