//! Decimal amount rendering for KPI display.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All rendering works on `rust_decimal::Decimal` values.

use rust_decimal::Decimal;

/// Renders a monetary amount with thousands separators and two decimal
/// places, e.g. `1234567.5` becomes `"1,234,567.50"`.
#[must_use]
pub fn format_grouped(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    group_thousands(&format!("{rounded:.2}"))
}

/// Renders a count as a whole number with thousands separators.
///
/// Fractional inputs round half-to-even before rendering.
#[must_use]
pub fn format_integer(amount: Decimal) -> String {
    let rounded = amount.round_dp(0);
    group_thousands(&format!("{rounded:.0}"))
}

/// Inserts `,` separators into the integer part of a formatted number.
fn group_thousands(s: &str) -> String {
    let (sign, rest) = s.strip_prefix('-').map_or(("", s), |r| ("-", r));
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}
