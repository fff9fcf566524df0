//! Clipboard text assembly.
//!
//! Deterministic string templates over a record and one instant: the
//! multi-section email body and the one-line subject. A line is included
//! only when its source field is non-empty, and exactly one payment-method
//! block appears, chosen by the record's method.

use crate::config::recipients::RecipientDirectory;
use crate::core::dates::{format_invoice_date, format_invoice_dates};
use crate::core::recipient::resolve_identity;
use crate::core::record::{InvoiceRecord, PaymentMethod};
use chrono::{DateTime, TimeZone};

fn push_field(out: &mut String, label: &str, value: &str) {
    if !value.is_empty() {
        out.push_str(label);
        out.push_str(": ");
        out.push_str(value);
        out.push('\n');
    }
}

fn push_money_field(out: &mut String, label: &str, value: &str) {
    if !value.is_empty() {
        out.push_str(label);
        out.push_str(": $");
        out.push_str(value);
        out.push('\n');
    }
}

fn quoted_or_na(value: &str) -> &str {
    if value.is_empty() { "N/A" } else { value }
}

/// Assembles the full multi-section summary placed on the clipboard as the
/// email body.
pub fn render_summary<Tz: TimeZone>(
    record: &InvoiceRecord,
    directory: &RecipientDirectory,
    now: &DateTime<Tz>,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    // Normalizing first guarantees the exactly-one-method-block invariant
    // even if stale sub-fields linger in the form state.
    let record = record.normalized();
    let dates = format_invoice_dates(now);
    let identity = resolve_identity(
        directory,
        &record.invoice_id,
        &record.custom_name,
        &record.custom_email,
    );

    let mut out = String::new();
    out.push_str("Invoice Preview\n\n");
    out.push_str(&dates.local);
    out.push('\n');
    push_field(&mut out, "Eastern", &dates.eastern);
    push_field(&mut out, "GMT", &dates.gmt);
    out.push_str(&dates.utc_offset);
    out.push('\n');

    out.push_str("\nPersonal Info\n");
    out.push_str(&format!(
        "Invoice Id: \"{}\" For \"{}\"\n",
        quoted_or_na(&record.invoice_id),
        quoted_or_na(&record.full_legal_name),
    ));
    push_field(
        &mut out,
        "Invoiced To",
        &format!("{} ({})", identity.name, identity.email),
    );
    push_field(&mut out, "Full Name", &record.full_legal_name);
    push_field(&mut out, "Email", &record.email);
    push_field(&mut out, "Discord Display Name", &record.discord_display_name);
    push_field(&mut out, "Discord Username", &record.discord_username);
    push_field(&mut out, "Phone Number", &record.phone_number);
    push_field(&mut out, "Reddit Username", &record.reddit_username);
    push_field(&mut out, "Country", &record.country);

    out.push_str("\nPayment Information\n");
    push_field(&mut out, "Invoice Type", record.invoice_type.as_str());
    if record.invoice_type == crate::core::record::InvoiceType::Hourly {
        push_money_field(&mut out, "Hourly Rate", &record.hourly_rate);
        push_field(&mut out, "Hours Worked", &record.hours_worked);
    }
    push_money_field(&mut out, "Invoice Amount", &record.invoice_amount);
    push_field(
        &mut out,
        "Invoice Status",
        record.invoice_status.map_or("", |s| s.as_str()),
    );
    push_field(
        &mut out,
        "Payment Method",
        record.payment_method.map_or("", |m| m.as_str()),
    );
    match record.payment_method {
        Some(PaymentMethod::Paypal) => {
            push_field(&mut out, "PayPal Email", &record.paypal_email);
            push_field(
                &mut out,
                "PayPal Account Holder",
                if record.is_paypal_account_holder { "Yes" } else { "No" },
            );
            if let Some(dob) = record.paypal_dob {
                push_field(&mut out, "PayPal DOB", &dob.format("%B %-d, %Y").to_string());
            }
        }
        Some(PaymentMethod::LtcCrypto) => {
            push_field(&mut out, "LTC Wallet Address", &record.ltc_wallet_address);
        }
        Some(PaymentMethod::Other) => {
            push_field(&mut out, "Other Payment Details", &record.other_payment_details);
        }
        None => {}
    }

    out.push_str("\nAdditional Information\n");
    push_field(&mut out, "Task Description", &record.task_description);
    push_field(&mut out, "Notes", &record.notes);
    push_field(&mut out, "Accounting Category", &record.accounting_category);

    out
}

/// Assembles the one-line subject: invoice ID, payee name, and the current
/// date.
pub fn render_subject_line<Tz: TimeZone>(record: &InvoiceRecord, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "Invoice Id: \"{}\" For \"{}\" - {}",
        quoted_or_na(&record.invoice_id),
        quoted_or_na(&record.full_legal_name),
        format_invoice_date(now),
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::record::{InvoiceStatus, InvoiceType};
    use crate::test_utils::{sample_record, test_instant};

    #[test]
    fn test_summary_omits_empty_fields() {
        let directory = RecipientDirectory::builtin();
        let mut record = sample_record();
        record.reddit_username = String::new();
        record.notes = String::new();

        let text = render_summary(&record, &directory, &test_instant());
        assert!(!text.contains("Reddit Username"));
        assert!(!text.contains("Notes:"));
        assert!(text.contains("Full Name: Matt Jackson"));
        assert!(text.contains("Country: USA"));
    }

    #[test]
    fn test_summary_has_exactly_one_method_block() {
        let directory = RecipientDirectory::builtin();
        let mut record = sample_record();
        // Stale fields from switching methods around in the form
        record.payment_method = Some(PaymentMethod::Paypal);
        record.paypal_email = "payee@example.com".to_string();
        record.ltc_wallet_address = "ltc1qexample".to_string();
        record.other_payment_details = "wire".to_string();

        let text = render_summary(&record, &directory, &test_instant());
        assert!(text.contains("PayPal Email: payee@example.com"));
        assert!(text.contains("PayPal Account Holder: No"));
        assert!(!text.contains("LTC Wallet Address"));
        assert!(!text.contains("Other Payment Details"));
    }

    #[test]
    fn test_summary_hourly_lines() {
        let directory = RecipientDirectory::builtin();
        let mut record = sample_record();
        record.invoice_type = InvoiceType::Hourly;
        record.hourly_rate = "10.00".to_string();
        record.hours_worked = "5.25".to_string();
        record.invoice_amount = "52.50".to_string();

        let text = render_summary(&record, &directory, &test_instant());
        assert!(text.contains("Invoice Type: hourly"));
        assert!(text.contains("Hourly Rate: $10.00"));
        assert!(text.contains("Hours Worked: 5.25"));
        assert!(text.contains("Invoice Amount: $52.50"));
    }

    #[test]
    fn test_summary_header_and_identity() {
        let directory = RecipientDirectory::builtin();
        let mut record = sample_record();
        record.invoice_id = "HC-7XJ2PQ9".to_string();
        record.invoice_status = Some(InvoiceStatus::Unpaid);

        let text = render_summary(&record, &directory, &test_instant());
        assert!(text.starts_with("Invoice Preview\n"));
        assert!(text.contains("Tuesday, August 25, 2026 at 3:04 PM"));
        assert!(text.contains("UTC+00:00"));
        assert!(text.contains("Invoice Id: \"HC-7XJ2PQ9\" For \"Matt Jackson\""));
        assert!(text.contains("Invoiced To: Hypnosis Capital (hypnosiscapital@gmail.com)"));
        assert!(text.contains("Invoice Status: unpaid"));
    }

    #[test]
    fn test_subject_line() {
        let mut record = sample_record();
        record.invoice_id = "MJ-7XJ2PQ9".to_string();

        let subject = render_subject_line(&record, &test_instant());
        assert_eq!(
            subject,
            "Invoice Id: \"MJ-7XJ2PQ9\" For \"Matt Jackson\" - August 25, 2026"
        );
    }

    #[test]
    fn test_subject_line_falls_back_to_na() {
        let record = InvoiceRecord::default();
        let subject = render_subject_line(&record, &test_instant());
        assert_eq!(subject, "Invoice Id: \"N/A\" For \"N/A\" - August 25, 2026");
    }
}
