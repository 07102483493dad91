//! # Shopping Session
//!
//! Drives the store the way the presentation layer does: catalog lookups,
//! cart mutations, a shipping choice, a declined then an accepted checkout,
//! and a tracking lookup for the new order.
//!
//! ## Session Script
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. add featured products            header badge re-renders each time │
//! │  2. add headphones again (qty 2)     merges into the existing line     │
//! │  3. set coffee maker qty to 3                                          │
//! │  4. remove skincare set                                                │
//! │  5. pick express shipping            total = subtotal + $12.99         │
//! │  6. checkout with a short card       "Invalid card number", cart kept  │
//! │  7. checkout with a valid card       order id, cart cleared            │
//! │  8. track the order                  three mock events                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde::Serialize;
use storefront_catalog::Catalog;
use storefront_core::{
    CheckoutResponse, Money, PaymentInfo, ShippingInfo, ShippingSpeed, TrackingEvent,
};
use storefront_store::{CartSnapshot, CartStore};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

const DECLINED_CARD: &str = "4242";
const ACCEPTED_CARD: &str = "4242 4242 4242 4242";

/// Everything the session produced, in the shape the presentation layer
/// receives it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    pub cart_before_checkout: CartSnapshot,
    pub shipping: ShippingSpeed,
    pub total_with_shipping: Money,
    pub declined: CheckoutResponse,
    pub accepted: CheckoutResponse,
    pub tracking: Vec<TrackingEvent>,
    pub notifications: usize,
}

/// The storefront's consumers: one catalog, one store.
pub struct Session {
    catalog: Catalog,
    store: CartStore,
}

impl Session {
    pub fn new(catalog: Catalog, store: CartStore) -> Self {
        Session { catalog, store }
    }

    pub fn store(&self) -> &CartStore {
        &self.store
    }

    /// "Add to Cart" button on a product page.
    pub fn add_product(&self, product_id: &str, quantity: Option<i64>) -> AppResult<()> {
        let product = self
            .catalog
            .product_by_id(product_id)
            .ok_or_else(|| AppError::UnknownProduct(product_id.to_string()))?;

        let ack = self.store.add(product.to_cart_item(), quantity);
        debug!(product = %product.name, message = ?ack.message, "Toast");
        Ok(())
    }

    /// Runs the scripted session and reports what the views would show.
    pub async fn run(&self) -> AppResult<SessionReport> {
        let badge_renders = Arc::new(AtomicUsize::new(0));
        let header = {
            let store = self.store.clone();
            let renders = Arc::clone(&badge_renders);
            self.store.subscribe(move || {
                renders.fetch_add(1, Ordering::SeqCst);
                debug!(count = store.count(), "Header badge");
            })
        };

        for product in self.catalog.featured_products() {
            self.add_product(&product.id, None)?;
        }
        self.add_product("1", Some(2))?;
        self.store.update_quantity("2", 3);
        self.store.remove("3");

        let cart_before_checkout = self.store.snapshot();
        let shipping = ShippingSpeed::Express;
        let shipping_cost = self.store.shipping_cost(shipping);
        let total_with_shipping = self.store.total_with_shipping(shipping);
        info!(
            items = cart_before_checkout.totals.item_count,
            subtotal = %self.store.config().format_currency(cart_before_checkout.totals.subtotal),
            total = %self.store.config().format_currency(total_with_shipping),
            "Cart ready for checkout"
        );

        let declined = self
            .store
            .checkout(
                ship_to(),
                card(DECLINED_CARD),
                self.store.items(),
                shipping_cost,
            )
            .await;
        let accepted = self
            .store
            .checkout(
                ship_to(),
                card(ACCEPTED_CARD),
                self.store.items(),
                shipping_cost,
            )
            .await;

        let tracking = accepted
            .order_id()
            .map(|id| self.store.order_tracking(id.as_str()))
            .unwrap_or_default();

        header.unsubscribe();

        Ok(SessionReport {
            cart_before_checkout,
            shipping,
            total_with_shipping,
            declined: CheckoutResponse::from(&declined),
            accepted: CheckoutResponse::from(&accepted),
            tracking,
            notifications: badge_renders.load(Ordering::SeqCst),
        })
    }
}

fn ship_to() -> ShippingInfo {
    ShippingInfo {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        address: "123 Main St".to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        zip: "62701".to_string(),
        ..ShippingInfo::default()
    }
}

fn card(number: &str) -> PaymentInfo {
    PaymentInfo {
        card_number: number.to_string(),
        card_name: "Jane Doe".to_string(),
        expiry_date: "12/30".to_string(),
        cvv: "123".to_string(),
    }
}
