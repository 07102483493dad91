//! # Store Error Types
//!
//! The cart store itself never fails: mutators always succeed and checkout
//! reports payment problems as a `CheckoutOutcome`. The only error source is
//! configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// An environment variable holds a value that cannot be used.
    #[error("Invalid configuration value for {key}: '{value}' ({reason})")]
    Config {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Convenience type alias for store Results.
pub type StoreResult<T> = Result<T, StoreError>;
