//! # Cart Store
//!
//! The store object the presentation layer talks to. Created once by the
//! composition root and handed to every consumer; clones share one cart.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Presentation Action      Store Call              Cart Change           │
//! │  ───────────────────      ──────────              ───────────           │
//! │  "Add to Cart" ─────────► add(item, qty) ───────► merge or push   ─┐    │
//! │  Quantity +/- ──────────► update_quantity() ────► set or remove   ─┤    │
//! │  Trash icon ────────────► remove(id) ───────────► filter out      ─┤    │
//! │  Checkout success ──────► clear() ──────────────► empty           ─┤    │
//! │                                                                    │    │
//! │  subscribers ◄──────────── notify() ◄──────────────────────────────┘    │
//! │  (re-read items(), count(), total() and re-render)                     │
//! │                                                                         │
//! │  The cart lock is released before subscribers run, so a subscriber    │
//! │  can read the store from inside its callback.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Not-Found Is Not An Error
//! Updating or removing a product that is not in the cart succeeds silently.
//! `remove` still notifies subscribers in that case; `update_quantity` does
//! not.

use std::sync::{Arc, Mutex, PoisonError};

use storefront_core::{
    Acknowledgment, CartItem, Money, NewCartItem, ShippingOption, ShippingSpeed, TrackingEvent,
    DEFAULT_ADD_QUANTITY,
};
use tracing::debug;

use crate::cart::{Cart, CartSnapshot, QuantityUpdate};
use crate::config::StoreConfig;
use crate::shipping;
use crate::subscribers::{SubscriberRegistry, Subscription};
use crate::tracking;

const ADDED_MESSAGE: &str = "Added to cart!";
const REMOVED_MESSAGE: &str = "Removed from cart";

/// Handle to the cart store.
#[derive(Debug, Clone)]
pub struct CartStore {
    inner: Arc<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    cart: Mutex<Cart>,
    subscribers: Arc<SubscriberRegistry>,
    config: StoreConfig,
}

impl CartStore {
    /// Creates a store with an empty cart.
    pub fn new(config: StoreConfig) -> Self {
        CartStore {
            inner: Arc::new(StoreInner {
                cart: Mutex::new(Cart::new()),
                subscribers: Arc::new(SubscriberRegistry::new()),
                config,
            }),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// Runs `f` with read access to the cart.
    fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        // Cart mutations saturate instead of panicking, so a poisoned
        // lock still guards a consistent cart.
        let cart = self.inner.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Runs `f` with write access to the cart. Does not notify.
    fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.inner.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }

    fn notify(&self) {
        self.inner.subscribers.notify();
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Adds an item, merging quantities with an existing line for the same
    /// product.
    ///
    /// `quantity` defaults to 1; zero or negative quantities are also treated
    /// as 1 so a line never drops below one unit. Nothing is validated and the
    /// call always succeeds.
    pub fn add(&self, item: NewCartItem, quantity: Option<i64>) -> Acknowledgment {
        let quantity = quantity
            .filter(|q| *q > 0)
            .unwrap_or(DEFAULT_ADD_QUANTITY);
        debug!(product_id = %item.product_id, quantity, "Adding to cart");

        self.with_cart_mut(|cart| cart.add(item, quantity));
        self.notify();
        Acknowledgment::with_message(ADDED_MESSAGE)
    }

    /// Sets a line's quantity exactly.
    ///
    /// ## Behavior
    /// - Product not in cart: nothing happens, no notification, still success
    /// - `quantity <= 0`: same as [`CartStore::remove`]
    /// - Otherwise: quantity is replaced (not incremented), subscribers notified
    pub fn update_quantity(&self, product_id: &str, quantity: i64) -> Acknowledgment {
        debug!(product_id = %product_id, quantity, "Updating cart quantity");

        match self.with_cart_mut(|cart| cart.update_quantity(product_id, quantity)) {
            QuantityUpdate::Missing => {
                debug!(product_id = %product_id, "Product not in cart, ignoring update");
            }
            QuantityUpdate::Removed | QuantityUpdate::Set => self.notify(),
        }

        Acknowledgment::ok()
    }

    /// Removes a product's line.
    ///
    /// Succeeds and notifies subscribers whether or not the product was in
    /// the cart.
    pub fn remove(&self, product_id: &str) -> Acknowledgment {
        let removed = self.with_cart_mut(|cart| cart.remove(product_id));
        debug!(product_id = %product_id, removed, "Removing from cart");

        self.notify();
        Acknowledgment::with_message(REMOVED_MESSAGE)
    }

    /// Empties the cart and notifies subscribers.
    pub fn clear(&self) {
        debug!("Clearing cart");
        self.with_cart_mut(Cart::clear);
        self.notify();
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Copy of the cart lines in insertion order. Changing the returned
    /// vector does not touch the store.
    pub fn items(&self) -> Vec<CartItem> {
        self.with_cart(|cart| cart.items().to_vec())
    }

    /// Total number of units across all lines.
    pub fn count(&self) -> i64 {
        self.with_cart(Cart::item_count)
    }

    /// Σ price × quantity.
    pub fn total(&self) -> Money {
        self.with_cart(Cart::subtotal)
    }

    pub fn is_empty(&self) -> bool {
        self.with_cart(Cart::is_empty)
    }

    /// Items and totals read under one lock.
    pub fn snapshot(&self) -> CartSnapshot {
        self.with_cart(|cart| CartSnapshot::from(cart))
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Registers `callback` to run after every mutation.
    ///
    /// ## Usage
    /// ```rust
    /// use storefront_store::{CartStore, StoreConfig};
    ///
    /// let store = CartStore::new(StoreConfig::default());
    /// let view = store.clone();
    /// let subscription = store.subscribe(move || {
    ///     let _count = view.count(); // re-render badge
    /// });
    ///
    /// subscription.unsubscribe();
    /// ```
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.inner.subscribers.subscribe(Arc::new(callback))
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.len()
    }

    // =========================================================================
    // Shipping & Tracking
    // =========================================================================

    /// The three shipping options: standard, express, overnight.
    pub fn shipping_options(&self) -> Vec<ShippingOption> {
        shipping::shipping_options()
    }

    pub fn shipping_cost(&self, speed: ShippingSpeed) -> Money {
        shipping::shipping_cost(speed)
    }

    /// Cart subtotal plus the flat shipping price.
    pub fn total_with_shipping(&self, speed: ShippingSpeed) -> Money {
        self.total() + self.shipping_cost(speed)
    }

    /// Mock tracking history for any order id.
    pub fn order_tracking(&self, order_id: &str) -> Vec<TrackingEvent> {
        tracking::order_tracking(order_id)
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn item(id: &str, price_cents: i64) -> NewCartItem {
        NewCartItem::new(id, "X", Money::from_cents(price_cents), "i")
    }

    fn counting_subscriber(store: &CartStore) -> (Arc<AtomicUsize>, Subscription) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let subscription = store.subscribe(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        (count, subscription)
    }

    #[test]
    fn test_add_twice_merges() {
        let store = CartStore::default();
        store.add(item("1", 1000), None);
        store.add(item("1", 1000), None);

        let items = store.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2);
    }

    #[test]
    fn test_add_accumulates_explicit_quantities() {
        let store = CartStore::default();
        store.add(item("1", 1000), Some(3));
        store.add(item("1", 1000), None);
        store.add(item("1", 1000), Some(4));

        assert_eq!(store.count(), 8);
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn test_add_non_positive_quantity_defaults_to_one() {
        let store = CartStore::default();
        store.add(item("1", 1000), Some(0));
        store.add(item("2", 1000), Some(-3));

        assert!(store.items().iter().all(|line| line.quantity == 1));
    }

    #[test]
    fn test_add_at_quantity_limit_still_succeeds() {
        let store = CartStore::default();
        store.add(item("1", 1000), Some(i64::MAX));
        let ack = store.add(item("1", 1000), None);

        assert!(ack.success);
        assert_eq!(store.count(), i64::MAX);
        assert_eq!(store.total().cents(), i64::MAX);
        assert_eq!(
            store.total_with_shipping(ShippingSpeed::Express).cents(),
            i64::MAX
        );
    }

    #[test]
    fn test_huge_line_total_does_not_overflow() {
        let store = CartStore::default();
        store.add(item("1", 1000), Some(i64::MAX / 10));
        assert_eq!(store.total().cents(), i64::MAX);
    }

    #[test]
    fn test_add_acknowledgment() {
        let store = CartStore::default();
        let ack = store.add(item("1", 1000), None);
        assert!(ack.success);
        assert_eq!(ack.message.as_deref(), Some("Added to cart!"));
    }

    #[test]
    fn test_totals_example() {
        let store = CartStore::default();
        store.add(item("A", 1000), Some(2));
        store.add(item("B", 500), Some(1));

        assert_eq!(store.total().cents(), 2500);
        assert_eq!(store.count(), 3);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.items.len(), 2);
        assert_eq!(snapshot.totals.subtotal.cents(), 2500);
    }

    #[test]
    fn test_empty_cart_reads() {
        let store = CartStore::default();
        assert!(store.items().is_empty());
        assert_eq!(store.count(), 0);
        assert!(store.total().is_zero());
        assert!(store.is_empty());
    }

    #[test]
    fn test_items_is_a_copy() {
        let store = CartStore::default();
        store.add(item("1", 1000), None);

        let mut items = store.items();
        items[0].quantity = 99;
        items.clear();

        assert_eq!(store.items()[0].quantity, 1);
    }

    #[test]
    fn test_update_quantity_sets_absolute_value() {
        let store = CartStore::default();
        store.add(item("1", 1000), Some(5));

        let ack = store.update_quantity("1", 2);
        assert!(ack.success);
        assert_eq!(ack.message, None);
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn test_update_to_zero_is_remove() {
        let updated = CartStore::default();
        let removed = CartStore::default();
        for store in [&updated, &removed] {
            store.add(item("1", 1000), Some(2));
            store.add(item("2", 300), None);
        }

        updated.update_quantity("1", 0);
        removed.remove("1");

        assert_eq!(updated.items(), removed.items());
    }

    #[test]
    fn test_update_missing_is_silent_noop() {
        let store = CartStore::default();
        store.add(item("1", 1000), None);
        let (count, _sub) = counting_subscriber(&store);

        let ack = store.update_quantity("nope", 7);

        assert!(ack.success);
        assert_eq!(store.count(), 1);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_remove_missing_still_succeeds_and_notifies() {
        let store = CartStore::default();
        store.add(item("1", 1000), None);
        let before = store.items();
        let (count, _sub) = counting_subscriber(&store);

        let ack = store.remove("nope");

        assert!(ack.success);
        assert_eq!(ack.message.as_deref(), Some("Removed from cart"));
        assert_eq!(store.items(), before);
        // Notification fires even though nothing changed
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clear() {
        let store = CartStore::default();
        store.add(item("1", 1000), Some(2));
        store.add(item("2", 1000), None);

        store.clear();

        assert!(store.items().is_empty());
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_one_notification_per_mutation() {
        let store = CartStore::default();
        let (count, subscription) = counting_subscriber(&store);

        store.add(item("1", 1000), None);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        store.update_quantity("1", 3);
        assert_eq!(count.load(Ordering::SeqCst), 2);
        store.update_quantity("1", 0);
        assert_eq!(count.load(Ordering::SeqCst), 3);
        store.remove("1");
        assert_eq!(count.load(Ordering::SeqCst), 4);
        store.clear();
        assert_eq!(count.load(Ordering::SeqCst), 5);

        subscription.unsubscribe();
        store.add(item("1", 1000), None);
        store.clear();
        assert_eq!(count.load(Ordering::SeqCst), 5);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_subscriber_can_read_store() {
        let store = CartStore::default();
        let seen = Arc::new(AtomicUsize::new(0));

        let view = store.clone();
        let seen_in_cb = Arc::clone(&seen);
        let _sub = store.subscribe(move || {
            let count = usize::try_from(view.count()).unwrap_or(0);
            seen_in_cb.store(count, Ordering::SeqCst);
        });

        store.add(item("1", 1000), Some(4));
        assert_eq!(seen.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_clones_share_cart() {
        let store = CartStore::default();
        let other = store.clone();
        other.add(item("1", 1000), None);
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_shipping_helpers() {
        let store = CartStore::default();
        store.add(item("1", 1000), Some(2));

        assert_eq!(store.shipping_options().len(), 3);
        assert_eq!(store.shipping_cost(ShippingSpeed::Overnight).cents(), 2499);
        assert_eq!(
            store.total_with_shipping(ShippingSpeed::Standard).cents(),
            2599
        );
    }
}
