//! # Checkout
//!
//! The simulated payment pipeline.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Idle ──checkout()──► Processing                                       │
//! │                           │  sleep(checkout_delay)   (mock round trip)  │
//! │                           ▼                                             │
//! │                     card >= 16 units?                                   │
//! │                      │            │                                     │
//! │                     yes           no                                    │
//! │                      ▼            ▼                                     │
//! │                 Succeeded       Failed                                  │
//! │                 • new OrderId   • "Invalid card number"                 │
//! │                 • clear cart    • cart untouched                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every call is an independent run. There is no in-flight order record, no
//! retry and no idempotency key: two successful calls yield two order ids,
//! and a call on an empty cart succeeds too.
//!
//! ## Interleaving
//! `items` and `shipping_cost` are taken by value when checkout is called.
//! Cart mutations made while the latency is pending do not change what was
//! validated, but a successful run clears whatever the cart holds when it
//! finishes. Dropping the future before it completes leaves the cart as it
//! is.

use storefront_core::validation::validate_card_number;
use storefront_core::{
    CartItem, CheckoutOutcome, CheckoutState, Money, OrderId, PaymentInfo, ShippingInfo,
};
use tracing::{debug, info, instrument, warn};

use crate::store::CartStore;

impl CartStore {
    /// Runs one simulated checkout.
    ///
    /// ## Arguments
    /// * `shipping` - address form (only logged, never stored)
    /// * `payment` - card form; `card_number` is the only field checked
    /// * `items` - the lines being purchased, as the caller saw them
    /// * `shipping_cost` - flat price of the chosen shipping option
    ///
    /// ## Returns
    /// `CheckoutOutcome::Succeeded` with a fresh order id, or
    /// `CheckoutOutcome::Failed` with a message for the shopper. Never panics
    /// and never returns an error.
    #[instrument(
        name = "checkout",
        skip_all,
        fields(lines = items.len(), shipping_cost = %shipping_cost)
    )]
    pub async fn checkout(
        &self,
        shipping: ShippingInfo,
        payment: PaymentInfo,
        items: Vec<CartItem>,
        shipping_cost: Money,
    ) -> CheckoutOutcome {
        let mut state = CheckoutState::Idle;
        debug!(?state, "Checkout requested");

        state = CheckoutState::Processing;
        let delay = self.config().checkout_delay();
        debug!(?state, ?delay, "Contacting payment service");
        tokio::time::sleep(delay).await;

        if let Err(err) = validate_card_number(&payment.card_number) {
            state = CheckoutState::Failed;
            warn!(?state, reason = %err, "Payment rejected");
            return CheckoutOutcome::failed(err.to_string());
        }

        let order_id = OrderId::generate();
        let order_total: Money = items.iter().map(CartItem::line_total).sum::<Money>() + shipping_cost;

        self.clear();

        state = CheckoutState::Succeeded;
        info!(
            ?state,
            order_id = %order_id,
            order_total = %order_total,
            ship_to = %shipping.city,
            "Order placed"
        );
        CheckoutOutcome::succeeded(order_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use storefront_core::NewCartItem;

    use crate::config::StoreConfig;

    const VALID_CARD: &str = "4242424242424242";

    fn instant_store() -> CartStore {
        CartStore::new(StoreConfig::with_checkout_delay(Duration::ZERO))
    }

    fn payment(card_number: &str) -> PaymentInfo {
        PaymentInfo {
            card_number: card_number.to_string(),
            card_name: "Jane Doe".to_string(),
            expiry_date: "12/30".to_string(),
            cvv: "123".to_string(),
        }
    }

    fn stocked(store: &CartStore) {
        store.add(NewCartItem::new("A", "A", Money::from_cents(1000), "a"), Some(2));
        store.add(NewCartItem::new("B", "B", Money::from_cents(500), "b"), None);
    }

    #[tokio::test]
    async fn test_short_card_fails_and_keeps_cart() {
        let store = instant_store();
        stocked(&store);
        let before = store.items();

        let outcome = store
            .checkout(
                ShippingInfo::default(),
                payment("4242"),
                store.items(),
                Money::from_cents(599),
            )
            .await;

        assert!(!outcome.is_success());
        assert_eq!(outcome.message(), "Invalid card number");
        assert_eq!(outcome.order_id(), None);
        assert_eq!(outcome.state(), CheckoutState::Failed);
        assert_eq!(store.items(), before);
    }

    #[tokio::test]
    async fn test_fifteen_characters_is_still_too_short() {
        let store = instant_store();
        let outcome = store
            .checkout(
                ShippingInfo::default(),
                payment(&VALID_CARD[..15]),
                vec![],
                Money::zero(),
            )
            .await;
        assert!(!outcome.is_success());
    }

    #[tokio::test]
    async fn test_valid_card_succeeds_and_clears_cart() {
        let store = instant_store();
        stocked(&store);

        let outcome = store
            .checkout(
                ShippingInfo::default(),
                payment(VALID_CARD),
                store.items(),
                Money::from_cents(1299),
            )
            .await;

        assert!(outcome.is_success());
        assert_eq!(outcome.message(), "Payment processed successfully!");
        let order_id = outcome.order_id().unwrap();
        assert!(order_id.as_str().parse::<OrderId>().is_ok());
        assert!(store.is_empty());
        assert_eq!(store.count(), 0);
    }

    #[tokio::test]
    async fn test_success_notifies_subscribers_failure_does_not() {
        let store = instant_store();
        stocked(&store);

        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let _sub = store.subscribe(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });

        store
            .checkout(ShippingInfo::default(), payment("1"), vec![], Money::zero())
            .await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        store
            .checkout(ShippingInfo::default(), payment(VALID_CARD), vec![], Money::zero())
            .await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_repeat_checkout_yields_distinct_ids_and_empty_cart_succeeds() {
        let store = instant_store();
        stocked(&store);
        let items = store.items();

        let first = store
            .checkout(
                ShippingInfo::default(),
                payment(VALID_CARD),
                items.clone(),
                Money::zero(),
            )
            .await;
        // Cart is already empty now; emptiness is never checked
        let second = store
            .checkout(ShippingInfo::default(), payment(VALID_CARD), items, Money::zero())
            .await;

        assert!(first.is_success());
        assert!(second.is_success());
        assert_ne!(first.order_id(), second.order_id());
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_configured_latency() {
        let store = CartStore::new(StoreConfig::default());
        let started = tokio::time::Instant::now();

        store
            .checkout(ShippingInfo::default(), payment(VALID_CARD), vec![], Money::zero())
            .await;

        assert!(started.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_mutations_during_latency() {
        let store = CartStore::new(StoreConfig::default());
        stocked(&store);
        let captured = store.items();

        let pending = {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .checkout(
                        ShippingInfo::default(),
                        payment(VALID_CARD),
                        captured,
                        Money::from_cents(599),
                    )
                    .await
            })
        };

        // Let the checkout task reach its sleep, then mutate underneath it
        tokio::task::yield_now().await;
        store.add(NewCartItem::new("C", "C", Money::from_cents(100), "c"), None);
        assert_eq!(store.items().len(), 3);

        let outcome = pending.await.unwrap();
        assert!(outcome.is_success());
        assert!(store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_checkout_leaves_cart() {
        let store = CartStore::new(StoreConfig::default());
        stocked(&store);

        let result = tokio::time::timeout(
            Duration::from_millis(100),
            store.checkout(
                ShippingInfo::default(),
                payment(VALID_CARD),
                store.items(),
                Money::zero(),
            ),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(store.count(), 3);
    }
}
