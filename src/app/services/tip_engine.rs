//! Tip arithmetic and rating classification.
//!
//! Everything here is pure: the same inputs always give the same outputs.
//! An absent or unparsable bill is not an error, it is `None`, and the
//! screen clears its derived fields in response.

use crate::app::domain::rating::TipRating;

/// Tip and total derived from one bill/percent pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TipBreakdown {
    pub tip: f64,
    pub total: f64,
}

/// Rating band for a tip percentage.
pub fn classify_tip(percent: u32) -> TipRating {
    TipRating::from_percent(percent)
}

/// Parse free-text bill input.
///
/// Returns `None` for empty text, non-numeric text, negative amounts and
/// non-finite values (`NaN`, `inf`). Surrounding whitespace is ignored.
pub fn parse_bill_amount(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value: f64 = trimmed.parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    // -0 parses as negative zero; render it as a plain 0
    Some(value.abs())
}

/// `tip = bill * percent / 100`, `total = bill + tip`. No intermediate rounding.
pub fn compute_amounts(bill: Option<f64>, percent: u32) -> Option<TipBreakdown> {
    let bill = bill.filter(|b| b.is_finite() && *b >= 0.0)?;
    let tip = bill * f64::from(percent) / 100.0;
    Some(TipBreakdown {
        tip,
        total: bill + tip,
    })
}

/// Parse and compute in one step, as the screen does on every event.
pub fn compute_from_text(bill_text: &str, percent: u32) -> Option<TipBreakdown> {
    compute_amounts(parse_bill_amount(bill_text), percent)
}

/// Two-decimal currency rendering, e.g. `$10.00`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, amount)
}

pub fn format_percent(percent: u32) -> String {
    format!("{}%", percent)
}
