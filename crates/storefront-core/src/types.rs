//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Catalog (read-only)        Cart                   Checkout             │
//! │  ─────────────────          ────                   ────────             │
//! │  Product ──to_cart_item──►  NewCartItem ──add──►   ShippingInfo         │
//! │  Category                   CartItem               PaymentInfo          │
//! │  Review                     Acknowledgment         CheckoutState        │
//! │                                                    CheckoutOutcome      │
//! │  Shipping                   Orders                 CheckoutResponse     │
//! │  ────────                   ──────                                      │
//! │  ShippingSpeed              OrderId                                     │
//! │  ShippingOption             OrderStatus, TrackingEvent                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Boundary types serialize in camelCase because the presentation layer is
//! TypeScript; `ts-rs` exports matching `.ts` declarations.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Cart Items
// =============================================================================

/// The item a shopper asks to add to the cart.
///
/// Built at the presentation boundary, usually via [`Product::to_cart_item`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewCartItem {
    pub product_id: String,
    pub name: String,
    pub price: Money,
    pub image: String,
}

impl NewCartItem {
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        NewCartItem {
            product_id: product_id.into(),
            name: name.into(),
            price,
            image: image.into(),
        }
    }
}

/// One line of the cart.
///
/// ## Invariants
/// - Unique by `product_id` within a cart
/// - `quantity >= 1`; a line whose quantity would drop to 0 is removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub price: Money,
    pub quantity: i64,
    pub image: String,
}

impl CartItem {
    /// Creates a cart line from the added item and its starting quantity.
    pub fn from_new(item: NewCartItem, quantity: i64) -> Self {
        CartItem {
            product_id: item.product_id,
            name: item.name,
            price: item.price,
            quantity,
            image: item.image,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

/// Acknowledgment returned by cart mutators.
///
/// Mutators never fail; `success` is always `true`. The message is the short
/// toast text the storefront shows (`None` for quantity updates).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Acknowledgment {
    pub success: bool,
    pub message: Option<String>,
}

impl Acknowledgment {
    pub fn ok() -> Self {
        Acknowledgment {
            success: true,
            message: None,
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Acknowledgment {
            success: true,
            message: Some(message.into()),
        }
    }
}

// =============================================================================
// Shipping
// =============================================================================

/// The three flat-rate delivery tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ShippingSpeed {
    Standard,
    Express,
    Overnight,
}

impl ShippingSpeed {
    /// All tiers, in display order.
    pub const ALL: [ShippingSpeed; 3] = [
        ShippingSpeed::Standard,
        ShippingSpeed::Express,
        ShippingSpeed::Overnight,
    ];

    /// Stable identifier used by the presentation layer.
    pub const fn id(&self) -> &'static str {
        match self {
            ShippingSpeed::Standard => "standard",
            ShippingSpeed::Express => "express",
            ShippingSpeed::Overnight => "overnight",
        }
    }

    /// Flat price of the tier. Does not depend on weight, distance or cart.
    pub const fn price(&self) -> Money {
        match self {
            ShippingSpeed::Standard => Money::from_cents(599),
            ShippingSpeed::Express => Money::from_cents(1299),
            ShippingSpeed::Overnight => Money::from_cents(2499),
        }
    }

    const fn display_name(&self) -> &'static str {
        match self {
            ShippingSpeed::Standard => "Standard Shipping",
            ShippingSpeed::Express => "Express Shipping",
            ShippingSpeed::Overnight => "Overnight Shipping",
        }
    }

    const fn delivery_days(&self) -> &'static str {
        match self {
            ShippingSpeed::Standard => "5-7 business days",
            ShippingSpeed::Express => "2-3 business days",
            ShippingSpeed::Overnight => "1 business day",
        }
    }
}

impl fmt::Display for ShippingSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ShippingSpeed {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShippingSpeed::ALL
            .into_iter()
            .find(|speed| speed.id() == s)
            .ok_or_else(|| CoreError::UnknownShippingSpeed(s.to_string()))
    }
}

/// A row of the shipping options table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShippingOption {
    pub id: ShippingSpeed,
    pub name: String,
    pub days: String,
    pub price: Money,
}

impl From<ShippingSpeed> for ShippingOption {
    fn from(speed: ShippingSpeed) -> Self {
        ShippingOption {
            id: speed,
            name: speed.display_name().to_string(),
            days: speed.delivery_days().to_string(),
            price: speed.price(),
        }
    }
}

// =============================================================================
// Checkout Forms
// =============================================================================

/// Shipping address form. Owned by the caller, never stored by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    pub name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl Default for ShippingInfo {
    /// Empty form with the country preselected.
    fn default() -> Self {
        ShippingInfo {
            name: String::new(),
            email: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            country: "United States".to_string(),
        }
    }
}

/// Payment form. Only `card_number` is checked by the mock payment step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub card_number: String,
    pub card_name: String,
    pub expiry_date: String,
    pub cvv: String,
}

// =============================================================================
// Order Id
// =============================================================================

const ORDER_ID_PREFIX: &str = "ORD-";
const TOKEN_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const TOKEN_MIN_LEN: usize = 5;
const TOKEN_MAX_LEN: usize = 7;

/// Identifier of a mock order: `ORD-<epoch-millis>-<TOKEN>`.
///
/// The token is 5 to 7 characters of `[0-9A-Z]`. Uniqueness is not
/// guaranteed; there is no collision check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderId(String);

impl OrderId {
    /// Generates an order id for the given instant using `rng` for the token.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use storefront_core::types::OrderId;
    ///
    /// let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
    /// let id = OrderId::generate_at(now, &mut rand::thread_rng());
    /// assert!(id.as_str().starts_with("ORD-1700000000000-"));
    /// ```
    pub fn generate_at<R: Rng>(now: DateTime<Utc>, rng: &mut R) -> Self {
        let len = rng.gen_range(TOKEN_MIN_LEN..=TOKEN_MAX_LEN);
        let token: String = (0..len)
            .map(|_| char::from(TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())]))
            .collect();
        OrderId(format!(
            "{}{}-{}",
            ORDER_ID_PREFIX,
            now.timestamp_millis(),
            token
        ))
    }

    /// Generates an order id for the current time.
    pub fn generate() -> Self {
        OrderId::generate_at(Utc::now(), &mut rand::thread_rng())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The epoch-millisecond timestamp embedded in the id.
    pub fn timestamp_millis(&self) -> Option<i64> {
        let rest = self.0.strip_prefix(ORDER_ID_PREFIX)?;
        let (millis, _) = rest.split_once('-')?;
        millis.parse().ok()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for OrderId {
    type Err = CoreError;

    /// Parses and checks the `ORD-<digits>-<token>` shape.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidOrderId(s.to_string());

        let rest = s.strip_prefix(ORDER_ID_PREFIX).ok_or_else(invalid)?;
        let (millis, token) = rest.split_once('-').ok_or_else(invalid)?;

        let millis_ok = !millis.is_empty() && millis.bytes().all(|b| b.is_ascii_digit());
        let token_ok = (TOKEN_MIN_LEN..=TOKEN_MAX_LEN).contains(&token.len())
            && token.bytes().all(|b| TOKEN_ALPHABET.contains(&b));

        if millis_ok && token_ok {
            Ok(OrderId(s.to_string()))
        } else {
            Err(invalid())
        }
    }
}

// =============================================================================
// Checkout
// =============================================================================

/// Phases of one checkout run.
///
/// ```text
/// Idle ──checkout()──► Processing ──card ok──► Succeeded
///                           │
///                           └──card too short──► Failed
/// ```
///
/// Nothing is carried between runs; every call starts at `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutState {
    Idle,
    Processing,
    Succeeded,
    Failed,
}

impl CheckoutState {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, CheckoutState::Succeeded | CheckoutState::Failed)
    }
}

/// Result of a checkout run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    Succeeded { order_id: OrderId, message: String },
    Failed { message: String },
}

impl CheckoutOutcome {
    pub const SUCCESS_MESSAGE: &'static str = "Payment processed successfully!";

    pub fn succeeded(order_id: OrderId) -> Self {
        CheckoutOutcome::Succeeded {
            order_id,
            message: Self::SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        CheckoutOutcome::Failed {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CheckoutOutcome::Succeeded { .. })
    }

    pub fn order_id(&self) -> Option<&OrderId> {
        match self {
            CheckoutOutcome::Succeeded { order_id, .. } => Some(order_id),
            CheckoutOutcome::Failed { .. } => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CheckoutOutcome::Succeeded { message, .. } | CheckoutOutcome::Failed { message } => {
                message
            }
        }
    }

    /// Terminal state the run ended in.
    pub fn state(&self) -> CheckoutState {
        match self {
            CheckoutOutcome::Succeeded { .. } => CheckoutState::Succeeded,
            CheckoutOutcome::Failed { .. } => CheckoutState::Failed,
        }
    }
}

/// Wire shape of a checkout outcome: `{ success, orderId?, message }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    pub message: String,
}

impl From<&CheckoutOutcome> for CheckoutResponse {
    fn from(outcome: &CheckoutOutcome) -> Self {
        CheckoutResponse {
            success: outcome.is_success(),
            order_id: outcome.order_id().cloned(),
            message: outcome.message().to_string(),
        }
    }
}

// =============================================================================
// Order Tracking
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Processing,
    Shipped,
    InTransit,
    Delivered,
}

/// One step of an order's tracking history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrackingEvent {
    pub status: OrderStatus,
    pub location: String,
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
    pub message: String,
}

// =============================================================================
// Catalog Entities
// =============================================================================

/// A product shown in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Money,
    /// Pre-discount price, when the product is on sale.
    #[serde(default)]
    pub original_price: Option<Money>,
    pub rating: f64,
    pub review_count: u32,
    pub image: String,
    pub images: Vec<String>,
    pub category: String,
    pub in_stock: bool,
    #[serde(default)]
    pub featured: bool,
    /// Marketing badge such as "Best Seller" or "New".
    #[serde(default)]
    pub badge: Option<String>,
}

impl Product {
    /// Builds the value handed to the cart store's `add`.
    pub fn to_cart_item(&self) -> NewCartItem {
        NewCartItem::new(&self.id, &self.name, self.price, &self.image)
    }

    /// True when the product has an original price above its current one.
    pub fn is_discounted(&self) -> bool {
        self.original_price
            .map(|original| original > self.price)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub count: u32,
}

/// A customer review of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub product_id: String,
    pub author: String,
    pub rating: u8,
    pub comment: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    #[serde(default)]
    pub avatar: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
