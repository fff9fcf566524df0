//! Invoice entity - one row per submitted invoice.
//!
//! Column layout mirrors the form record: free-text fields are stored as
//! text, enum tags (`invoice_type`, `invoice_status`, `payment_method`) are
//! stored as their wire strings, and the money fields keep the exact strings
//! the payer saw in the form.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Invoice database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    /// Unique row identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Client-generated invoice ID, e.g. `"MJ-7XJ2PQ9"`
    pub invoice_id: String,
    /// Selected recipient key, e.g. `"MattyJacks"` or `"custom"`
    pub recipient: String,
    /// Payee's full legal name
    pub full_legal_name: String,
    /// Payee's contact email
    pub email: String,
    /// Optional Discord display name
    pub discord_display_name: String,
    /// Optional Discord username
    pub discord_username: String,
    /// WhatsApp phone number with country code
    pub phone_number: String,
    /// Optional Reddit username
    pub reddit_username: String,
    /// Payee's country
    pub country: String,
    /// Custom recipient name override, empty unless `recipient` is custom
    pub custom_name: String,
    /// Custom recipient email override, empty unless `recipient` is custom
    pub custom_email: String,
    /// Invoice type tag: `"one-time"` or `"hourly"`
    pub invoice_type: String,
    /// Hourly rate as entered, empty for one-time invoices
    pub hourly_rate: String,
    /// Hours worked as entered, empty for one-time invoices
    pub hours_worked: String,
    /// Invoice amount, two decimal places when derived
    pub invoice_amount: String,
    /// Invoice status tag: `"paid"`, `"unpaid"`, or `"other"`, empty if unset
    pub invoice_status: String,
    /// Payment method tag: `"ltc-crypto"`, `"paypal"`, or `"other"`, empty if unset
    pub payment_method: String,
    /// PayPal email, populated only for PayPal payments
    pub paypal_email: String,
    /// Whether the payer owns the PayPal account
    pub is_paypal_account_holder: bool,
    /// Date of birth collected when the payer is not the account holder
    pub paypal_dob: Option<Date>,
    /// LTC wallet address, populated only for crypto payments
    pub ltc_wallet_address: String,
    /// Free-form details for the "other" payment method
    pub other_payment_details: String,
    /// Required description of the completed task
    pub task_description: String,
    /// Optional free-form notes
    pub notes: String,
    /// Optional accounting category label
    pub accounting_category: String,
    /// When the record was accepted by the store
    pub submitted_at: DateTimeUtc,
}

/// No relations; invoices are standalone rows
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
