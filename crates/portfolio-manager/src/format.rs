//! Display formatting for profit figures.
//!
//! Rounding goes through `Decimal` (half away from zero) so a formatted
//! percent parses back to the same two-decimal value.

use analysis_core::{round_to, AnalysisError};
use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::ProfitInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Krw,
    Usd,
}

impl Currency {
    /// Korean listings (`.KS`, `.KQ` or a bare six-digit code) trade in won.
    pub fn for_symbol(symbol: &str) -> Self {
        let upper = symbol.trim().to_ascii_uppercase();
        let is_krx_code = upper.len() == 6 && upper.bytes().all(|b| b.is_ascii_digit());
        if upper.ends_with(".KS") || upper.ends_with(".KQ") || is_krx_code {
            Currency::Krw
        } else {
            Currency::Usd
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Krw => "₩",
            Currency::Usd => "$",
        }
    }

    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::Krw => 0,
            Currency::Usd => 2,
        }
    }
}

/// Unsigned magnitude rounded half away from zero with exactly `places` decimals.
/// Values outside `Decimal`'s range fall back to f64 formatting.
fn magnitude(value: f64, places: u32) -> String {
    let rounded = Decimal::from_f64(value.abs()).map(|d| {
        let mut d = d.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
        d.rescale(places);
        d
    });
    match rounded {
        Some(d) if d.scale() == places => d.to_string(),
        _ => format!("{:.*}", places as usize, round_to(value.abs(), places)),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Magnitude with thousands separators and fixed decimals, plus whether it is negative.
/// The sign comes from the unrounded amount, so a loss that rounds to zero stays negative.
fn split_amount(amount: f64, places: u32) -> (bool, String) {
    let text = magnitude(amount, places);
    let formatted = match text.split_once('.') {
        Some((int, frac)) => format!("{}.{}", group_thousands(int), frac),
        None => group_thousands(&text),
    };
    (amount < 0.0, formatted)
}

/// `₩1,234,567`, `$1,234.57`, `-$3.10`
pub fn format_currency(amount: f64, currency: Currency) -> String {
    let (negative, text) = split_amount(amount, currency.decimal_places());
    let sign = if negative { "-" } else { "" };
    format!("{sign}{}{text}", currency.symbol())
}

/// Always signed: `+₩500`, `-$12.00`, `+$0.00`
pub fn format_signed_currency(amount: f64, currency: Currency) -> String {
    let (negative, text) = split_amount(amount, currency.decimal_places());
    let sign = if negative { "-" } else { "+" };
    format!("{sign}{}{text}", currency.symbol())
}

/// Signed two-decimal percent: `+12.34%`, `-3.10%`, `+0.00%`.
/// A negative value that rounds to zero prints as `-0.00%`.
pub fn format_percent(percent: f64) -> String {
    let sign = if percent < 0.0 { "-" } else { "+" };
    format!("{sign}{}%", magnitude(percent, 2))
}

/// Inverse of [`format_percent`]; also accepts unsigned input and a missing `%`.
pub fn parse_percent(text: &str) -> Result<f64, AnalysisError> {
    let trimmed = text.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    match number.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AnalysisError::InvalidPercent(text.to_string())),
    }
}

/// `+₩500 (+100.00%)`
pub fn format_profit(info: &ProfitInfo, currency: Currency) -> String {
    format!(
        "{} ({})",
        format_signed_currency(info.total_profit_amount, currency),
        format_percent(info.profit_percent)
    )
}
