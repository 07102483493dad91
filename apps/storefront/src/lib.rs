//! # Storefront App
//!
//! Composition root: the one place that builds the catalog and the cart
//! store and hands them to their consumers.
//!
//! ## Initialization Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Application Startup                                  │
//! │                                                                         │
//! │  main()                                                                 │
//! │    │                                                                    │
//! │    └──► run()                                                           │
//! │           │                                                             │
//! │           ├──► init_tracing()                                           │
//! │           │      • tracing-subscriber with env filter                   │
//! │           │                                                             │
//! │           ├──► StoreConfig::from_env()                                  │
//! │           │      • checkout latency, currency symbol                    │
//! │           │                                                             │
//! │           ├──► Catalog::builtin()                                       │
//! │           │      • embedded JSON, validated once                        │
//! │           │                                                             │
//! │           ├──► CartStore::new(config)                                   │
//! │           │                                                             │
//! │           └──► Session::run()                                           │
//! │                  • prints the session report as JSON                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod session;

use storefront_catalog::Catalog;
use storefront_store::{CartStore, StoreConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use error::{AppError, AppResult};
pub use session::{Session, SessionReport};

/// Builds everything and runs the shopping session.
pub async fn run() -> AppResult<()> {
    init_tracing();

    let config = StoreConfig::from_env()?;
    info!(
        checkout_delay_ms = config.checkout_delay_ms,
        currency = %config.currency_symbol,
        "Configuration loaded"
    );

    let catalog = Catalog::builtin()?;
    info!(
        products = catalog.products().len(),
        categories = catalog.categories().len(),
        "Catalog loaded"
    );

    let session = Session::new(catalog, CartStore::new(config));
    let report = session.run().await?;

    info!(
        accepted = report.accepted.success,
        notifications = report.notifications,
        "Session complete"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_store=trace` - Trace the cart store only
/// - Default: INFO, with DEBUG for the storefront crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
