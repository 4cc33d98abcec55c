//! Turns a market-data success body into the line shown to the user

use crate::{
    error::PayloadError,
    types::{ChangeDirection, MarketDataResponse, Quote},
};
use console::style;
use std::fmt;

/// Parses a success body into a quote
///
/// Missing fields are not defaulted; they surface as [`PayloadError`].
pub fn parse_quote(body: &str) -> Result<Quote, PayloadError> {
    let response: MarketDataResponse = serde_json::from_str(body)?;
    Ok(Quote::from(response))
}

/// Enough fraction digits to print any finite f64 exactly
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Fixed-point formatting that rounds exact halfway values away from zero
///
/// `{:.N}` rounds ties to even (`2.125` → `2.12`); quotes show `2.13`.
/// Only values whose binary expansion is exactly on the tie are affected.
pub fn to_fixed(value: f64, digits: usize) -> String {
    // Negative zero prints without sign
    let value = if value == 0.0 { 0.0 } else { value };
    if !value.is_finite() {
        return format!("{:.*}", digits, value);
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value);
    let fraction = exact.split_once('.').map(|(_, f)| f).unwrap_or("");
    let tail = fraction.get(digits..).unwrap_or("");
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return format!("{:.*}", digits, value);
    }

    // Exact at digits + 1, drop the trailing 5 and bump the last kept digit
    let mut text = format!("{:.*}", digits + 1, value);
    text.pop();
    if text.ends_with('.') {
        text.pop();
    }
    increment_last_digit(&text)
}

/// Adds one unit in the last place to a plain decimal string, keeping the sign
fn increment_last_digit(text: &str) -> String {
    let (sign, magnitude) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };

    let mut bytes = magnitude.as_bytes().to_vec();
    let mut carry = true;
    for byte in bytes.iter_mut().rev() {
        if !carry {
            break;
        }
        match *byte {
            b'.' => continue,
            b'9' => *byte = b'0',
            _ => {
                *byte += 1;
                carry = false;
            }
        }
    }

    let mut result = String::with_capacity(text.len() + 1);
    result.push_str(sign);
    if carry {
        result.push('1');
    }
    result.push_str(&String::from_utf8_lossy(&bytes));
    result
}

/// Formats a USD price to four decimals, padded for inverse styling
pub fn format_price(price_usd: f64) -> String {
    format!(" {} USD ", to_fixed(price_usd, 4))
}

/// Formats a 24h change to two decimals and classifies its direction
///
/// The direction comes from the formatted text, not the raw value, so
/// `-0.001` becomes `-0.00` and counts as up.
pub fn format_change(percent_change: f64) -> (String, ChangeDirection) {
    let formatted = to_fixed(percent_change, 2);
    let direction = match formatted.parse::<f64>() {
        Ok(value) if value < 0.0 => ChangeDirection::Down,
        _ => ChangeDirection::Up,
    };
    (
        format!("{}{}% (24h)", direction.arrow(), formatted),
        direction,
    )
}

/// Display pieces for one quote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteLine {
    /// `{name} ({symbol})`
    pub label: String,
    /// ` {price} USD `
    pub price: String,
    /// `{arrow}{change}% (24h)`
    pub change: String,
    pub direction: ChangeDirection,
}

impl QuoteLine {
    pub fn from_quote(quote: &Quote) -> Self {
        let (change, direction) = format_change(quote.percent_change_24h);
        Self {
            label: format!("{} ({})", quote.name, quote.symbol),
            price: format_price(quote.price_usd),
            change,
            direction,
        }
    }

    /// Renders the line with terminal colors
    pub fn render(&self) -> String {
        let change = match self.direction {
            ChangeDirection::Up => style(&self.change).green().bright().bold(),
            ChangeDirection::Down => style(&self.change).red().bright().bold(),
        };
        format!(
            "{} - {} {}",
            style(&self.label).yellow().bright().bold(),
            style(&self.price).reverse(),
            change
        )
    }
}

impl fmt::Display for QuoteLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} {}", self.label, self.price, self.change)
    }
}
