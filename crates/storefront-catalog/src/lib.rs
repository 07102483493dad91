//! # storefront-catalog: Catalog Data Provider
//!
//! Read-only access to the storefront's products, categories and reviews.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Data Flow                                │
//! │                                                                         │
//! │  data/catalog.json (embedded at compile time)                          │
//! │       │                                                                 │
//! │       ▼  Catalog::builtin()  (parse + validate once)                   │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                storefront-catalog (THIS CRATE)                  │   │
//! │  │   product_by_id • products_by_category • featured_products      │   │
//! │  │   search • filter_by_price • reviews_for • categories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Presentation layer renders results, builds NewCartItem for the store  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use storefront_catalog::Catalog;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let headphones = catalog.product_by_id("1").unwrap();
//! assert_eq!(headphones.name, "Wireless Headphones");
//!
//! assert!(catalog.product_by_id("does-not-exist").is_none());
//! ```

pub mod catalog;
pub mod error;

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
