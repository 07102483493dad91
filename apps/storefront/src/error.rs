//! # App Error Type
//!
//! Startup and session failures surfaced from `main`.
//!
//! ```text
//!   StoreConfig::from_env()  ── StoreError::Config ──┐
//!   Catalog::builtin()       ── CatalogError ────────┼──► AppError ──► exit 1
//!   Session (product id)     ── UnknownProduct ──────┤
//!   Session (json)           ── serde_json::Error ───┘
//! ```
//!
//! Payment declines are not errors; they are a `CheckoutOutcome`.

use storefront_catalog::CatalogError;
use storefront_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] StoreError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Product not found: {0}")]
    UnknownProduct(String),

    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
