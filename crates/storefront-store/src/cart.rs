//! # Cart
//!
//! The cart collection and its pure mutation rules. No locking and no
//! notification here; [`CartStore`](crate::CartStore) wraps this in a mutex
//! and notifies subscribers.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  add(item, n)            id present? quantity += n : push new line      │
//! │                          (quantities saturate at i64::MAX)              │
//! │  update_quantity(id, n)  id absent  → nothing                           │
//! │                          n <= 0     → remove line                       │
//! │                          otherwise  → quantity = n (absolute)           │
//! │  remove(id)              retain lines with another id                   │
//! │  clear()                 no lines                                       │
//! │                                                                         │
//! │  Lines keep insertion order. Never two lines with the same id.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use storefront_core::{CartItem, Money, NewCartItem};

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `product_id`
/// - Every line has `quantity >= 1`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,
}

/// What `update_quantity` did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
    /// No line with that product id.
    Missing,
    /// The line was removed because the new quantity was <= 0.
    Removed,
    /// The line now has the requested quantity.
    Set,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds `quantity` units of the item, merging with an existing line.
    ///
    /// `quantity` must already be normalized to >= 1 by the caller.
    pub fn add(&mut self, item: NewCartItem, quantity: i64) {
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.product_id == item.product_id)
        {
            line.quantity = line.quantity.saturating_add(quantity);
            return;
        }

        self.items.push(CartItem::from_new(item, quantity));
    }

    /// Sets a line's quantity exactly, removing it when `quantity <= 0`.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> QuantityUpdate {
        let Some(index) = self
            .items
            .iter()
            .position(|line| line.product_id == product_id)
        else {
            return QuantityUpdate::Missing;
        };

        if quantity <= 0 {
            self.items.remove(index);
            return QuantityUpdate::Removed;
        }

        self.items[index].quantity = quantity;
        QuantityUpdate::Set
    }

    /// Removes the line for `product_id`. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|line| line.product_id != product_id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|line| line.product_id == product_id)
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all line quantities, saturating.
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0, |count, line| count.saturating_add(line.quantity))
    }

    /// Sum of price × quantity. No tax, no discounts.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cart totals summary for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub item_count: i64,
    pub subtotal: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            item_count: cart.item_count(),
            subtotal: cart.subtotal(),
        }
    }
}

/// Items plus totals, read under one lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        CartSnapshot {
            items: cart.items.clone(),
            totals: CartTotals::from(cart),
        }
    }
}
