//! Database submission of a finished record.
//!
//! One operation: validate, normalize, insert one row, return the stored
//! model. No retry, no timeout, no idempotency key; a failed insert leaves
//! nothing behind and the caller keeps its form state.

use crate::core::record::InvoiceRecord;
use crate::core::validate::validate;
use crate::entities::invoice;
use crate::errors::{Error, Result};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use tracing::{info, instrument};

/// Validates and persists a record, returning the stored row.
///
/// Field validation failures come back as [`Error::Validation`] with the
/// full field/message set; the database is not touched in that case.
#[instrument(skip(db, record), fields(invoice_id = %record.invoice_id))]
pub async fn create_invoice(
    db: &DatabaseConnection,
    record: &InvoiceRecord,
) -> Result<invoice::Model> {
    let now = Utc::now();
    validate(record, now.date_naive()).map_err(Error::Validation)?;

    let record = record.normalized();
    let model = invoice::ActiveModel {
        invoice_id: Set(record.invoice_id),
        recipient: Set(record.recipient),
        full_legal_name: Set(record.full_legal_name),
        email: Set(record.email),
        discord_display_name: Set(record.discord_display_name),
        discord_username: Set(record.discord_username),
        phone_number: Set(record.phone_number),
        reddit_username: Set(record.reddit_username),
        country: Set(record.country),
        custom_name: Set(record.custom_name),
        custom_email: Set(record.custom_email),
        invoice_type: Set(record.invoice_type.as_str().to_string()),
        hourly_rate: Set(record.hourly_rate),
        hours_worked: Set(record.hours_worked),
        invoice_amount: Set(record.invoice_amount),
        invoice_status: Set(record
            .invoice_status
            .map_or_else(String::new, |s| s.as_str().to_string())),
        payment_method: Set(record
            .payment_method
            .map_or_else(String::new, |m| m.as_str().to_string())),
        paypal_email: Set(record.paypal_email),
        is_paypal_account_holder: Set(record.is_paypal_account_holder),
        paypal_dob: Set(record.paypal_dob),
        ltc_wallet_address: Set(record.ltc_wallet_address),
        other_payment_details: Set(record.other_payment_details),
        task_description: Set(record.task_description),
        notes: Set(record.notes),
        accounting_category: Set(record.accounting_category),
        submitted_at: Set(now),
        ..Default::default()
    };

    let stored = model.insert(db).await?;
    info!(id = stored.id, invoice_id = %stored.invoice_id, "Invoice stored");
    Ok(stored)
}
