//! Derived invoice amount.
//!
//! Hourly invoices derive their amount from rate times hours, rounded to two
//! decimal places; one-time invoices take the payer's amount verbatim.
//! Unparseable or missing numbers count as zero, matching the original
//! form's `parseFloat(x) || 0` behavior, so derivation never errors.

use crate::core::record::InvoiceType;

/// Parses a raw money/hours field; anything unparseable counts as zero.
pub fn parse_money(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Formats a dollar amount with exactly two decimal places.
pub fn format_money(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Computes the effective invoice amount.
///
/// Hourly: `round(rate * hours, 2)`, clamped at zero so a stray negative
/// input cannot produce a negative invoice. One-time: `manual` verbatim.
pub fn derive_amount(invoice_type: InvoiceType, rate: &str, hours: &str, manual: &str) -> String {
    match invoice_type {
        InvoiceType::Hourly => {
            let raw = parse_money(rate) * parse_money(hours);
            let rounded = (raw * 100.0).round() / 100.0;
            format_money(rounded.max(0.0))
        }
        InvoiceType::OneTime => manual.to_string(),
    }
}
