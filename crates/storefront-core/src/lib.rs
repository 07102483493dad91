//! # storefront-core: Pure Domain Logic for the Storefront
//!
//! Domain types and rules shared by the catalog, the cart store and the
//! presentation layer. Nothing in here performs I/O or owns mutable state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation Layer (TypeScript)                 │   │
//! │  │    Catalog page ──► Product page ──► Cart page ──► Checkout     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌──────────────────────┐  ┌───▼──────────────────────────────────┐   │
//! │  │ storefront-catalog   │  │ storefront-store                     │   │
//! │  │ (read-only lookups)  │  │ (cart, subscribers, checkout)        │   │
//! │  └──────────┬───────────┘  └───┬──────────────────────────────────┘   │
//! │             │                  │                                        │
//! │  ┌──────────▼──────────────────▼──────────────────────────────────┐   │
//! │  │            ★ storefront-core (THIS CRATE) ★                     │   │
//! │  │   types • money • validation • error                           │   │
//! │  │   NO I/O • NO TIMERS • PURE FUNCTIONS                          │   │
//! │  └────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CartItem, Product, ShippingOption, OrderId, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::money::Money;
//! use storefront_core::types::NewCartItem;
//!
//! let item = NewCartItem::new("1", "Wireless Headphones", Money::from_cents(12999), "/img.png");
//! assert_eq!(item.price.to_string(), "$129.99");
//! ```

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum number of UTF-16 code units a card number needs to pass the mock
/// payment check.
pub const MIN_CARD_NUMBER_LEN: usize = 16;

/// Quantity used when `add` is called without one (or with a non-positive one).
pub const DEFAULT_ADD_QUANTITY: i64 = 1;
