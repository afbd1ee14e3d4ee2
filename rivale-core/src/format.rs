//! Display formatting for raw financial values.
//!
//! These helpers are pure and operate on `f64`; they are the only
//! "computation" the library performs beyond queries and state handling.

const TRILLION: f64 = 1_000_000_000_000.0;
const BILLION: f64 = 1_000_000_000.0;
const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

/// Abbreviate a dollar amount with a T/B/M/K suffix.
///
/// Thresholds are inclusive lower bounds at 10^12, 10^9, 10^6, and 10^3;
/// values below 1000 get no suffix. Two-decimal precision throughout, so
/// the boundaries are exact: `1_000_000_000_000.0` renders as `"$1.00T"`
/// while `999_999_999_999.0` falls under the threshold and renders as
/// `"$1000.00B"`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    if value >= TRILLION {
        format!("${:.2}T", value / TRILLION)
    } else if value >= BILLION {
        format!("${:.2}B", value / BILLION)
    } else if value >= MILLION {
        format!("${:.2}M", value / MILLION)
    } else if value >= THOUSAND {
        format!("${:.2}K", value / THOUSAND)
    } else {
        format!("${value:.2}")
    }
}

/// Render a percent value with two decimals and an explicit `+` for
/// non-negative values, zero included.
#[must_use]
pub fn format_percent(value: f64) -> String {
    // Collapse -0.0 so the sign branch sees a plain zero.
    let value = if value == 0.0 { 0.0 } else { value };
    if value >= 0.0 {
        format!("+{value:.2}%")
    } else {
        format!("{value:.2}%")
    }
}

/// Render a percent value with a `+` only when strictly positive.
///
/// This is the statement tables' "vs. competitor" convention, which differs
/// from [`format_percent`] in both the sign rule and the caller-chosen
/// precision (the tables render one decimal).
#[must_use]
pub fn format_signed_percent(value: f64, decimals: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    if value > 0.0 {
        format!("+{value:.decimals$}%")
    } else {
        format!("{value:.decimals$}%")
    }
}

/// Percent difference of `current` relative to `previous`.
///
/// Defined as `(current - previous) / |previous| * 100`, and exactly `0.0`
/// when `previous` is zero. The zero return avoids division by zero rather
/// than signaling "no data"; callers cannot distinguish "no change" from
/// "undefined" through this value alone.
#[must_use]
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous.abs() * 100.0
}
