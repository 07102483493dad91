//! # Storefront Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load `StoreConfig` from `STOREFRONT_*` environment variables
//! 3. Load and validate the built-in catalog
//! 4. Create the cart store and attach the header view
//! 5. Run the shopping session
//!
//! The actual setup is in lib.rs so it can be tested.

#[tokio::main]
async fn main() -> Result<(), storefront_app::AppError> {
    storefront_app::run().await
}
