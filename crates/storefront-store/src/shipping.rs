//! # Shipping
//!
//! Flat-rate shipping lookup. Rates depend only on the chosen speed, never
//! on weight, destination or cart contents.
//!
//! | id        | name               | days              | price  |
//! |-----------|--------------------|-------------------|--------|
//! | standard  | Standard Shipping  | 5-7 business days | $5.99  |
//! | express   | Express Shipping   | 2-3 business days | $12.99 |
//! | overnight | Overnight Shipping | 1 business day    | $24.99 |

use storefront_core::{Money, ShippingOption, ShippingSpeed};

/// The shipping table, always standard, express, overnight.
pub fn shipping_options() -> Vec<ShippingOption> {
    ShippingSpeed::ALL
        .into_iter()
        .map(ShippingOption::from)
        .collect()
}

/// Flat cost for a speed.
pub fn shipping_cost(speed: ShippingSpeed) -> Money {
    speed.price()
}
