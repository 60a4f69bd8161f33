//! Cart store: the owned, injectable handle views mutate the cart through.
//!
//! The store serializes every read and mutation behind one mutex, so the
//! whole cart is a single critical section no matter which host calls in.
//! No operation performs I/O or awaits; each one locks, runs to completion
//! and unlocks.
//!
//! Views never receive the cart itself — reads hand out cloned snapshots
//! and derived values, and all writes go through the operations here.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::cart::{Cart, CartSnapshot, LineItem, LineItemInput};
use crate::error::CartError;
use crate::ids::VariantId;
use crate::money::{Currency, Money};

/// Handle returned by [`CartStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&CartSnapshot) + Send>;

struct StoreInner {
    cart: Cart,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

/// Thread-safe owner of one session's cart.
///
/// Create one per request (or per session scope), pass it by reference to
/// whatever needs the cart, and let subscribers react to changes — the
/// storefront registers its persistence hook this way.
pub struct CartStore {
    inner: Mutex<StoreInner>,
}

impl CartStore {
    /// Create a store around an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self::with_cart(Cart::new(currency))
    }

    /// Create a store from a persisted snapshot (invalid entries are
    /// dropped, see [`Cart::from_snapshot`]).
    pub fn from_snapshot(snapshot: CartSnapshot) -> Self {
        Self::with_cart(Cart::from_snapshot(snapshot))
    }

    fn with_cart(cart: Cart) -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                cart,
                subscribers: Vec::new(),
                next_subscription: 0,
            }),
        }
    }

    // A poisoned mutex only means another thread panicked mid-operation;
    // the cart data is still structurally valid, so recover the guard.
    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add an item (see [`Cart::add_item`]). Notifies subscribers on
    /// success.
    pub fn add_item(&self, input: LineItemInput, quantity: i64) -> Result<(), CartError> {
        let mut inner = self.lock();
        inner.cart.add_item(input, quantity)?;
        notify(&inner);
        Ok(())
    }

    /// Set a line's quantity (see [`Cart::update_quantity`]; below 1
    /// removes). Notifies subscribers when the cart changed.
    pub fn update_quantity(&self, id: &VariantId, quantity: i64) -> bool {
        let mut inner = self.lock();
        let changed = inner.cart.update_quantity(id, quantity);
        if changed {
            notify(&inner);
        }
        changed
    }

    /// Remove a line (see [`Cart::remove_item`]). Notifies subscribers
    /// when a line was actually removed.
    pub fn remove_item(&self, id: &VariantId) -> bool {
        let mut inner = self.lock();
        let removed = inner.cart.remove_item(id);
        if removed {
            notify(&inner);
        }
        removed
    }

    /// Remove all lines. Notifies subscribers unless the cart was already
    /// empty.
    pub fn clear(&self) {
        let mut inner = self.lock();
        if inner.cart.is_empty() {
            return;
        }
        inner.cart.clear();
        notify(&inner);
    }

    /// Cart total. Pure read.
    pub fn total(&self) -> Money {
        self.lock().cart.total()
    }

    /// Sum of quantities across lines. Pure read.
    pub fn item_count(&self) -> i64 {
        self.lock().cart.item_count()
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.lock().cart.unique_item_count()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lock().cart.is_empty()
    }

    /// The cart currency.
    pub fn currency(&self) -> Currency {
        self.lock().cart.currency()
    }

    /// Cloned line items in insertion order, for rendering.
    pub fn items(&self) -> Vec<LineItem> {
        self.lock().cart.items().to_vec()
    }

    /// Cloned line by variant id.
    pub fn get_item(&self, id: &VariantId) -> Option<LineItem> {
        self.lock().cart.get_item(id).cloned()
    }

    /// Snapshot the cart for serialization.
    pub fn snapshot(&self) -> CartSnapshot {
        self.lock().cart.snapshot()
    }

    /// Register a callback invoked with a snapshot after every mutation
    /// that changed the cart.
    ///
    /// Callbacks run synchronously on the mutating caller's thread while
    /// the store lock is held — they must not call back into the store.
    pub fn subscribe(&self, f: impl Fn(&CartSnapshot) + Send + 'static) -> SubscriptionId {
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_subscription);
        inner.next_subscription += 1;
        inner.subscribers.push((id, Box::new(f)));
        id
    }

    /// Remove a subscriber. Returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        let len_before = inner.subscribers.len();
        inner.subscribers.retain(|(sid, _)| *sid != id);
        inner.subscribers.len() < len_before
    }
}

fn notify(inner: &StoreInner) {
    if inner.subscribers.is_empty() {
        return;
    }
    let snapshot = inner.cart.snapshot();
    for (_, subscriber) in &inner.subscribers {
        subscriber(&snapshot);
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(Currency::CHF)
    }
}
