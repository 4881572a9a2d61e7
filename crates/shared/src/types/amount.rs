//! Presentation formatting for decimal amounts.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts stay `rust_decimal::Decimal` all the way to the rendered string.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as `#,##0.00`, prefixed by `symbol` when it is not empty.
///
/// Negative amounts carry a leading minus before the symbol: `-TT$ 1,234.50`.
#[must_use]
pub fn format_amount(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    if symbol.is_empty() {
        format!("{sign}{grouped}.{fraction}")
    } else {
        format!("{sign}{symbol} {grouped}.{fraction}")
    }
}
