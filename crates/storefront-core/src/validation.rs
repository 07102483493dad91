//! # Validation Module
//!
//! Input validation rules for the storefront.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Catalog load (storefront-catalog)                                     │
//! │  ├── validate_product_id   every product/review id is non-empty        │
//! │  └── validate_price        no negative prices in the static table      │
//! │                                                                         │
//! │  Checkout (storefront-store)                                           │
//! │  └── validate_card_number  the mock payment check                      │
//! │                                                                         │
//! │  Cart mutators validate NOTHING: add/update/remove always succeed.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::validate_card_number;
//!
//! assert!(validate_card_number("4242424242424242").is_ok());
//! assert!(validate_card_number("4242").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MIN_CARD_NUMBER_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a card number for the mock payment step.
///
/// ## Rules
/// - At least 16 UTF-16 code units, the length a browser form reports.
///   Spaces and dashes count too; there is no digit or Luhn check.
/// - Characters outside the Basic Multilingual Plane count twice, so this
///   differs from `chars().count()` only for such input.
pub fn validate_card_number(card_number: &str) -> ValidationResult<()> {
    if card_number.encode_utf16().count() < MIN_CARD_NUMBER_LEN {
        return Err(ValidationError::InvalidCardNumber);
    }

    Ok(())
}

/// Validates a product or review identifier.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 64 characters
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > 64 {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: 64,
        });
    }

    Ok(())
}

/// Validates a catalog price.
///
/// ## Rules
/// - Must be non-negative; zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use storefront_core::money::Money;
/// use storefront_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(0)).is_ok());
/// assert!(validate_price(Money::from_cents(-1)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a review rating (1 to 5 stars).
pub fn validate_rating(rating: u8) -> ValidationResult<()> {
    if !(1..=5).contains(&rating) {
        return Err(ValidationError::InvalidFormat {
            field: "rating".to_string(),
            reason: "must be between 1 and 5".to_string(),
        });
    }

    Ok(())
}
