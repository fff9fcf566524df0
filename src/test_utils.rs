//! Shared test utilities for `InvoiceDesk`.
//!
//! Common helpers for setting up an in-memory database and building sample
//! records with realistic, valid field values.

use crate::core::record::{InvoiceRecord, InvoiceStatus, InvoiceType, PaymentMethod};
use crate::errors::Result;
use chrono::{DateTime, FixedOffset, NaiveDate};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all submission tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// A fully filled, valid one-time LTC invoice record.
pub fn sample_record() -> InvoiceRecord {
    InvoiceRecord {
        invoice_id: "MJ-TEST234".to_string(),
        recipient: "MattyJacks".to_string(),
        full_legal_name: "Matt Jackson".to_string(),
        email: "mattyjacks11@gmail.com".to_string(),
        discord_display_name: "Matt Jackson".to_string(),
        discord_username: "@mattyjacks".to_string(),
        phone_number: "+15106005735".to_string(),
        reddit_username: "u/growthget".to_string(),
        country: "USA".to_string(),
        invoice_type: InvoiceType::OneTime,
        invoice_amount: "150.00".to_string(),
        invoice_status: Some(InvoiceStatus::Unpaid),
        payment_method: Some(PaymentMethod::LtcCrypto),
        ltc_wallet_address: "ltc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4".to_string(),
        task_description: "Landing page copy and deployment.".to_string(),
        notes: "Second half due next week.".to_string(),
        ..InvoiceRecord::default()
    }
}

/// A fixed instant (2026-08-25 15:04 UTC) for deterministic date strings.
#[allow(clippy::unwrap_used)]
pub fn test_instant() -> DateTime<FixedOffset> {
    NaiveDate::from_ymd_opt(2026, 8, 25)
        .unwrap()
        .and_hms_opt(15, 4, 0)
        .unwrap()
        .and_local_timezone(FixedOffset::east_opt(0).unwrap())
        .unwrap()
}
