//! # Catalog
//!
//! In-memory product, category and review tables with read-only queries.
//!
//! ## Query Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  product_by_id("1")          exact id match, None when absent          │
//! │  products_by_category("home") exact, case-sensitive category match     │
//! │  search("AUDIO")             case-insensitive substring of            │
//! │                              name OR description OR category           │
//! │  filter_by_price(a, b)       a <= price <= b (inclusive both ends)     │
//! │  reviews_for("1")            reviews whose product_id matches          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All results keep table order. Nothing here mutates.

use std::collections::HashSet;

use serde::Deserialize;
use storefront_core::validation::{validate_price, validate_product_id, validate_rating};
use storefront_core::{Category, Money, Product, Review, ValidationError};
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// The catalog tables.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    categories: Vec<Category>,
    products: Vec<Product>,
    reviews: Vec<Review>,
}

impl Catalog {
    /// Loads the catalog bundled with the storefront.
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parses and validates a catalog document.
    ///
    /// ## Expected Shape
    /// ```json
    /// { "categories": [...], "products": [...], "reviews": [...] }
    /// ```
    /// Prices are integer cents.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;

        debug!(
            products = catalog.products.len(),
            categories = catalog.categories.len(),
            reviews = catalog.reviews.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    fn validate(&self) -> CatalogResult<()> {
        let mut seen = HashSet::new();
        for product in &self.products {
            let invalid = |source: ValidationError| CatalogError::Invalid {
                entity: "product",
                id: product.id.clone(),
                source,
            };
            validate_product_id(&product.id).map_err(invalid)?;
            validate_price(product.price).map_err(invalid)?;
            if let Some(original) = product.original_price {
                validate_price(original).map_err(invalid)?;
            }
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    entity: "product",
                    id: product.id.clone(),
                });
            }
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    entity: "category",
                    id: category.id.clone(),
                });
            }
        }

        for review in &self.reviews {
            let invalid = |source: ValidationError| CatalogError::Invalid {
                entity: "review",
                id: review.id.clone(),
                source,
            };
            validate_product_id(&review.id).map_err(invalid)?;
            validate_rating(review.rating).map_err(invalid)?;
        }

        Ok(())
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// All products, in table order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks a product up by id. `None` is the not-found sentinel.
    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products whose category equals `category` exactly.
    pub fn products_by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Products flagged for the home page.
    pub fn featured_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Free-text search.
    ///
    /// Matches when the lowercased query is a substring of the lowercased
    /// name, description or category. The query is not trimmed, so an empty
    /// query matches every product.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        let results: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .collect();

        debug!(query = %query, count = results.len(), "Catalog search");
        results
    }

    /// Products priced within `[min, max]`, inclusive on both ends.
    pub fn filter_by_price(&self, min: Money, max: Money) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.price >= min && p.price <= max)
            .collect()
    }

    // =========================================================================
    // Categories & Reviews
    // =========================================================================

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Reviews written for `product_id`.
    pub fn reviews_for(&self, product_id: &str) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| r.product_id == product_id)
            .collect()
    }
}
