//! Cart and line item types.
//!
//! The cart is an ordered list of line items, one per product variant,
//! mutated only through the operations here. It performs no I/O, never
//! blocks and never produces user-facing text; callers decide how to
//! surface a rejected `add_item`.

use serde::{Deserialize, Serialize};

use crate::error::CartError;
use crate::ids::VariantId;
use crate::money::{Currency, Money};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// Maximum number of distinct line items in a cart.
pub const MAX_LINE_ITEMS: usize = 500;

/// Maximum unit price accepted into the cart, in minor units.
///
/// Together with the quantity and line caps this bounds the worst-case
/// cart total at 500 * 9999 * 10^9, comfortably below `i64::MAX`, which is
/// what keeps `total()` a total function with no overflow error path.
pub const MAX_UNIT_PRICE_CENTS: i64 = 1_000_000_000;

/// A line item in the cart: one chosen product variant plus quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// The purchasable unit — a specific product variant. Unique within
    /// the cart.
    pub id: VariantId,
    /// Product title (denormalized for display).
    pub title: String,
    /// Unit price.
    pub unit_price: Money,
    /// Display image URL.
    pub image: Option<String>,
    /// Product handle, for linking back to the product page.
    pub handle: Option<String>,
    /// Human-readable option combination (e.g., "13.00 / Rouge").
    pub variant_name: Option<String>,
    /// Quantity, always >= 1.
    pub quantity: i64,
}

impl LineItem {
    /// Line total (unit price times quantity).
    ///
    /// Saturating by construction; the caps enforced at insertion keep the
    /// product far below `i64::MAX`, so saturation is unreachable for any
    /// cart built through the public operations.
    pub fn line_total(&self) -> Money {
        Money::new(
            self.unit_price.amount_cents.saturating_mul(self.quantity),
            self.unit_price.currency,
        )
    }
}

/// Input record for `add_item`: the product fields the views pass in,
/// without a quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItemInput {
    pub id: VariantId,
    pub title: String,
    pub unit_price: Money,
    pub image: Option<String>,
    pub handle: Option<String>,
    pub variant_name: Option<String>,
}

impl LineItemInput {
    /// Create an input with the required fields.
    pub fn new(id: VariantId, title: impl Into<String>, unit_price: Money) -> Self {
        Self {
            id,
            title: title.into(),
            unit_price,
            image: None,
            handle: None,
            variant_name: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    pub fn with_variant_name(mut self, name: impl Into<String>) -> Self {
        self.variant_name = Some(name.into());
        self
    }
}

/// Serializable snapshot of a cart: the ordered line items plus currency.
///
/// This is the persistence format — a flat list keyed by variant id.
/// Restoring skips entries that violate the cart invariants instead of
/// failing, so a corrupt session record degrades to a partial cart rather
/// than an error page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CartSnapshot {
    pub currency: Currency,
    pub items: Vec<LineItem>,
}

/// A shopping cart: ordered line items, one per variant, single currency.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart in the given currency.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Rebuild a cart from a snapshot, dropping entries that violate the
    /// invariants (duplicate id, non-positive or over-cap quantity,
    /// negative or over-cap price, foreign currency, empty id or title).
    pub fn from_snapshot(snapshot: CartSnapshot) -> Self {
        let mut cart = Cart::new(snapshot.currency);
        for item in snapshot.items {
            if item.id.is_empty()
                || item.title.is_empty()
                || item.quantity < 1
                || item.quantity > MAX_QUANTITY_PER_ITEM
                || item.unit_price.is_negative()
                || item.unit_price.amount_cents > MAX_UNIT_PRICE_CENTS
                || item.unit_price.currency != cart.currency
                || cart.get_item(&item.id).is_some()
                || cart.items.len() >= MAX_LINE_ITEMS
            {
                continue;
            }
            cart.items.push(item);
        }
        cart
    }

    /// Snapshot the current state for serialization.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            currency: self.currency,
            items: self.items.clone(),
        }
    }

    /// Add an item to the cart.
    ///
    /// If a line with the same id already exists its quantity is increased
    /// by `quantity` (the entry is never duplicated); otherwise a new line
    /// is appended. An empty cart adopts the currency of the first item
    /// added.
    ///
    /// Rejects with [`CartError::InvalidInput`] if:
    /// - `quantity` is not positive
    /// - the id or title is empty
    /// - the unit price is negative or above [`MAX_UNIT_PRICE_CENTS`]
    /// - the item's currency differs from the cart's
    /// - the merged quantity would exceed [`MAX_QUANTITY_PER_ITEM`]
    /// - the cart already holds [`MAX_LINE_ITEMS`] distinct lines
    pub fn add_item(&mut self, input: LineItemInput, quantity: i64) -> Result<(), CartError> {
        if quantity <= 0 {
            return Err(CartError::invalid(format!(
                "quantity must be positive, got {quantity}"
            )));
        }
        if input.id.is_empty() {
            return Err(CartError::invalid("missing variant id"));
        }
        if input.title.is_empty() {
            return Err(CartError::invalid("missing title"));
        }
        if input.unit_price.is_negative() {
            return Err(CartError::invalid(format!(
                "negative unit price: {}",
                input.unit_price.display_amount()
            )));
        }
        if input.unit_price.amount_cents > MAX_UNIT_PRICE_CENTS {
            return Err(CartError::invalid(format!(
                "unit price out of range: {}",
                input.unit_price.display_amount()
            )));
        }
        if self.items.is_empty() {
            self.currency = input.unit_price.currency;
        } else if input.unit_price.currency != self.currency {
            return Err(CartError::invalid(format!(
                "currency mismatch: cart is {}, item is {}",
                self.currency.code(),
                input.unit_price.currency.code()
            )));
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == input.id) {
            let new_quantity = existing.quantity.saturating_add(quantity);
            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CartError::invalid(format!(
                    "quantity {new_quantity} exceeds maximum {MAX_QUANTITY_PER_ITEM}"
                )));
            }
            existing.quantity = new_quantity;
            return Ok(());
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CartError::invalid(format!(
                "quantity {quantity} exceeds maximum {MAX_QUANTITY_PER_ITEM}"
            )));
        }
        if self.items.len() >= MAX_LINE_ITEMS {
            return Err(CartError::invalid(format!(
                "cart is full ({MAX_LINE_ITEMS} lines)"
            )));
        }

        self.items.push(LineItem {
            id: input.id,
            title: input.title,
            unit_price: input.unit_price,
            image: input.image,
            handle: input.handle,
            variant_name: input.variant_name,
            quantity,
        });
        Ok(())
    }

    /// Set the quantity of an existing line.
    ///
    /// Policy: a quantity below 1 removes the line, exactly like
    /// [`Cart::remove_item`]. Quantities above [`MAX_QUANTITY_PER_ITEM`]
    /// clamp to the cap. A missing id is a no-op. Returns whether the cart
    /// changed.
    pub fn update_quantity(&mut self, id: &VariantId, quantity: i64) -> bool {
        if quantity < 1 {
            return self.remove_item(id);
        }
        let quantity = quantity.min(MAX_QUANTITY_PER_ITEM);
        if let Some(item) = self.items.iter_mut().find(|i| &i.id == id) {
            let changed = item.quantity != quantity;
            item.quantity = quantity;
            changed
        } else {
            false
        }
    }

    /// Remove the line with the given id. Absent id is a no-op, not an
    /// error. Returns whether a line was removed.
    pub fn remove_item(&mut self, id: &VariantId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() < len_before
    }

    /// Remove all line items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Cart total: sum over lines of unit price times quantity, in minor
    /// units. Pure; rounding happens only when the result is displayed.
    pub fn total(&self) -> Money {
        let cents = self.items.iter().fold(0_i64, |acc, item| {
            acc.saturating_add(item.unit_price.amount_cents.saturating_mul(item.quantity))
        });
        Money::new(cents, self.currency)
    }

    /// Total unit count (sum of quantities), not distinct-line count.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// The cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Get a line by variant id.
    pub fn get_item(&self, id: &VariantId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::CHF)
    }
}
