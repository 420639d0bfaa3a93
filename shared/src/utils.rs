//! # Shared Utility Functions
//!
//! Price helpers used across the storefront.
//!
//! ## Minor units
//!
//! The payment provider's amount fields take the smallest currency unit
//! (cents): a catalog price of `12.99` becomes `1299` on the wire.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{price_to_minor_units, format_price};
//!
//! assert_eq!(price_to_minor_units(12.99), 1299);
//! assert_eq!(format_price(12.99), "R$ 12.99");
//! ```

/// Convert a decimal major-unit price to the provider's minor-unit integer.
///
/// Rounds to the nearest cent so binary-float prices like `12.99`
/// (stored as `12.989999…`) land on the intended amount.
///
/// # Examples
///
/// ```rust
/// use shared::utils::price_to_minor_units;
///
/// assert_eq!(price_to_minor_units(12.99), 1299);
/// assert_eq!(price_to_minor_units(0.1), 10);
/// assert_eq!(price_to_minor_units(100.0), 10000);
/// ```
pub fn price_to_minor_units(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

/// Format a major-unit price for display with the store currency symbol.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_price;
///
/// assert_eq!(format_price(9.99), "R$ 9.99");
/// assert_eq!(format_price(24.0), "R$ 24.00");
/// ```
pub fn format_price(price: f64) -> String {
    format!("R$ {:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minor_units_rounds_float_prices() {
        assert_eq!(price_to_minor_units(12.99), 1299);
        assert_eq!(price_to_minor_units(14.99), 1499);
        assert_eq!(price_to_minor_units(24.99), 2499);
        assert_eq!(price_to_minor_units(0.0), 0);
    }

    #[test]
    fn format_price_two_decimals() {
        assert_eq!(format_price(9.99), "R$ 9.99");
        assert_eq!(format_price(120.5), "R$ 120.50");
    }
}
