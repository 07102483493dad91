//! # Catalog Error Types
//!
//! Errors raised while loading catalog tables.
//!
//! Lookups never fail: a missing product is `None`, an empty filter is an
//! empty `Vec`. Only loading a malformed table is an error.

use storefront_core::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The JSON document does not match the catalog shape.
    #[error("Catalog data is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Two entities of the same kind share an id.
    #[error("Duplicate {entity} id: '{id}'")]
    DuplicateId { entity: &'static str, id: String },

    /// An entity failed a domain rule (empty id, negative price, ...).
    #[error("Invalid {entity} '{id}': {source}")]
    Invalid {
        entity: &'static str,
        id: String,
        #[source]
        source: ValidationError,
    },
}

/// Convenience type alias for catalog Results.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::DuplicateId {
            entity: "product",
            id: "1".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate product id: '1'");

        let err = CatalogError::Invalid {
            entity: "product",
            id: "9".to_string(),
            source: ValidationError::Negative {
                field: "price".to_string(),
            },
        };
        assert_eq!(err.to_string(), "Invalid product '9': price must not be negative");
    }
}
