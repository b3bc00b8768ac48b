//! The `Book` record

use serde::{Deserialize, Serialize};
use std::fmt;

/// A book with an identifier, a title and a price.
///
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    id: i32,
    title: String,
    price: f64,
}

impl Book {
    /// Create a new book
    pub fn new(id: i32, title: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            title: title.into(),
            price,
        }
    }

    /// Numeric identifier
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Price
    pub fn price(&self) -> f64 {
        self.price
    }
}

/// Renders `"{id} {title} {price}\n"`, the price as [`format_price`] does.
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} {}", self.id, self.title, format_price(self.price))
    }
}

/// Shortest round-trip rendering of a price.
///
/// Magnitudes in `[1e-3, 1e7)` print as plain decimals with at least one
/// fractional digit (`50.0`, `49.99`). Anything else prints in scientific
/// notation with an upper-case `E` (`1.0E7`, `1.5E-4`).
pub fn format_price(price: f64) -> String {
    if price.is_nan() {
        return "NaN".to_string();
    }
    if price.is_infinite() {
        return if price > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = price.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{price:?}");
    }

    let scientific = format!("{price:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    if mantissa.contains('.') {
        format!("{mantissa}E{exponent}")
    } else {
        format!("{mantissa}.0E{exponent}")
    }
}

#[cfg(test)]
#[path = "book_test.rs"]
mod tests;
