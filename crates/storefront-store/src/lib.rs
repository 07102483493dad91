//! # storefront-store: Cart State for the Storefront
//!
//! Owns the shopping cart, keeps views in sync with it and runs the simulated
//! checkout.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Data Flow                             │
//! │                                                                         │
//! │  Product page "Add to Cart"        Cart page +/-, trash                │
//! │       │                                  │                              │
//! │       ▼                                  ▼                              │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 storefront-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────┐   ┌────────────────┐   ┌────────────────┐  │   │
//! │  │   │  CartStore   │   │  Subscribers   │   │   Checkout     │  │   │
//! │  │   │  (store.rs)  │──►│(subscribers.rs)│   │ (checkout.rs)  │  │   │
//! │  │   │  Mutex<Cart> │   │ notify on every│   │ sleep, check   │  │   │
//! │  │   │              │   │ mutation       │   │ card, clear    │  │   │
//! │  │   └──────────────┘   └────────────────┘   └────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   shipping.rs (flat rates)      tracking.rs (mock history)     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Header badge, cart page and checkout summary re-render               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use storefront_core::{Money, NewCartItem};
//! use storefront_store::{CartStore, StoreConfig};
//!
//! let store = CartStore::new(StoreConfig::default());
//! let item = NewCartItem::new("1", "Wireless Headphones", Money::from_cents(12999), "/a.png");
//!
//! let ack = store.add(item, Some(2));
//! assert_eq!(ack.message.as_deref(), Some("Added to cart!"));
//! assert_eq!(store.count(), 2);
//! assert_eq!(store.total(), Money::from_cents(25998));
//! ```

pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod shipping;
pub mod store;
pub mod subscribers;
pub mod tracking;

pub use cart::{Cart, CartSnapshot, CartTotals, QuantityUpdate};
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use store::CartStore;
pub use subscribers::{SubscriberRegistry, Subscription};
