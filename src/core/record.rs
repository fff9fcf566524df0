//! The invoice record - form state for one invoice.
//!
//! Free-text fields stay `String` so the record mirrors what the payer typed;
//! the money fields keep their raw strings and are parsed only by the
//! derivation code. Serde uses `camelCase` keys so exported documents match
//! the original `invoice_data.json` format, and the enum tags keep the wire
//! spellings (`"one-time"`, `"ltc-crypto"`, ...) of that format.

use crate::config::recipients::{DEFAULT_RECIPIENT_KEY, RecipientDirectory};
use crate::core::recipient::generate_invoice_id;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How the invoice amount is determined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceType {
    /// Fixed amount entered by the payer
    #[default]
    #[serde(rename = "one-time")]
    OneTime,
    /// Amount derived from hourly rate times hours worked
    #[serde(rename = "hourly")]
    Hourly,
}

impl InvoiceType {
    /// The wire tag for this type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneTime => "one-time",
            Self::Hourly => "hourly",
        }
    }
}

/// Payment state of the invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    /// Already settled
    #[serde(rename = "paid", alias = "Paid")]
    Paid,
    /// Awaiting payment
    #[serde(rename = "unpaid", alias = "Unpaid")]
    Unpaid,
    /// Anything else, described in the notes
    #[serde(rename = "other", alias = "Other")]
    Other,
}

impl InvoiceStatus {
    /// The wire tag for this status.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Unpaid => "unpaid",
            Self::Other => "other",
        }
    }
}

/// How the payer wants to be paid. Selects which method-specific field
/// group is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Litecoin to `ltcWalletAddress`
    #[serde(rename = "ltc-crypto")]
    LtcCrypto,
    /// PayPal Goods and Services to `paypalEmail`
    #[serde(rename = "paypal")]
    Paypal,
    /// As described in `otherPaymentDetails`
    // The original form used both "Other" and "others" for this tag;
    // accept both on import.
    #[serde(rename = "other", alias = "Other", alias = "others")]
    Other,
}

impl PaymentMethod {
    /// The wire tag for this method.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LtcCrypto => "ltc-crypto",
            Self::Paypal => "paypal",
            Self::Other => "other",
        }
    }
}

/// The full set of invoice fields for one invoice instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceRecord {
    /// Client-generated identifier, prefix plus seven random characters
    pub invoice_id: String,
    /// Selected recipient key; `"custom"` switches to the override fields
    pub recipient: String,
    /// Payee's full legal name (required, min length 2)
    pub full_legal_name: String,
    /// Payee's contact email (required)
    pub email: String,
    /// Optional Discord display name
    pub discord_display_name: String,
    /// Optional Discord username
    pub discord_username: String,
    /// WhatsApp phone number with country code (required, min 10 characters)
    pub phone_number: String,
    /// Optional Reddit username
    pub reddit_username: String,
    /// Payee's country (required)
    pub country: String,
    /// Custom recipient name, used only when `recipient` is `"custom"`
    pub custom_name: String,
    /// Custom recipient email, used only when `recipient` is `"custom"`
    pub custom_email: String,
    /// One-time or hourly
    pub invoice_type: InvoiceType,
    /// Hourly rate in dollars, raw form input
    pub hourly_rate: String,
    /// Hours worked, raw form input
    pub hours_worked: String,
    /// Invoice amount in dollars; derived for hourly invoices
    pub invoice_amount: String,
    /// Paid, unpaid, or other; `None` until selected
    #[serde(deserialize_with = "compat_tag::deserialize")]
    pub invoice_status: Option<InvoiceStatus>,
    /// Payment method; `None` until selected
    #[serde(deserialize_with = "compat_tag::deserialize")]
    pub payment_method: Option<PaymentMethod>,
    /// PayPal email for PayPal payments
    pub paypal_email: String,
    /// Whether the payer owns the PayPal account
    pub is_paypal_account_holder: bool,
    /// Date of birth, collected when the payer is not the account holder
    #[serde(with = "compat_date")]
    pub paypal_dob: Option<NaiveDate>,
    /// LTC wallet address for crypto payments
    pub ltc_wallet_address: String,
    /// Free-form details for the "other" payment method
    pub other_payment_details: String,
    /// Description of the completed task (required)
    pub task_description: String,
    /// Optional free-form notes
    pub notes: String,
    /// Optional accounting category label
    pub accounting_category: String,
}

impl InvoiceRecord {
    /// Creates an empty record with a freshly generated invoice ID for the
    /// default recipient.
    pub fn fresh(directory: &RecipientDirectory) -> Self {
        Self {
            invoice_id: generate_invoice_id(directory, DEFAULT_RECIPIENT_KEY),
            recipient: DEFAULT_RECIPIENT_KEY.to_string(),
            ..Self::default()
        }
    }

    /// Returns a copy with only the selected payment method's field group
    /// populated; the other groups are cleared.
    ///
    /// The date of birth is kept only when the payer is not the PayPal
    /// account holder.
    pub fn normalized(&self) -> Self {
        let mut record = self.clone();
        match record.payment_method {
            Some(PaymentMethod::Paypal) => {
                record.ltc_wallet_address.clear();
                record.other_payment_details.clear();
                if record.is_paypal_account_holder {
                    record.paypal_dob = None;
                }
            }
            Some(PaymentMethod::LtcCrypto) => {
                record.clear_paypal_fields();
                record.other_payment_details.clear();
            }
            Some(PaymentMethod::Other) => {
                record.clear_paypal_fields();
                record.ltc_wallet_address.clear();
            }
            None => {
                record.clear_paypal_fields();
                record.ltc_wallet_address.clear();
                record.other_payment_details.clear();
            }
        }
        if record.recipient != crate::config::recipients::CUSTOM_RECIPIENT_KEY {
            record.custom_name.clear();
            record.custom_email.clear();
        }
        record
    }

    fn clear_paypal_fields(&mut self) {
        self.paypal_email.clear();
        self.is_paypal_account_holder = false;
        self.paypal_dob = None;
    }
}

/// A partial record parsed from an uploaded JSON document.
///
/// Only keys present in the document become `Some`; unknown keys are ignored
/// by serde, and applying the patch leaves absent fields untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordPatch {
    #[allow(missing_docs)]
    pub invoice_id: Option<String>,
    #[allow(missing_docs)]
    pub recipient: Option<String>,
    #[allow(missing_docs)]
    pub full_legal_name: Option<String>,
    #[allow(missing_docs)]
    pub email: Option<String>,
    #[allow(missing_docs)]
    pub discord_display_name: Option<String>,
    #[allow(missing_docs)]
    pub discord_username: Option<String>,
    #[allow(missing_docs)]
    pub phone_number: Option<String>,
    #[allow(missing_docs)]
    pub reddit_username: Option<String>,
    #[allow(missing_docs)]
    pub country: Option<String>,
    #[allow(missing_docs)]
    pub custom_name: Option<String>,
    #[allow(missing_docs)]
    pub custom_email: Option<String>,
    #[allow(missing_docs)]
    pub invoice_type: Option<InvoiceType>,
    #[allow(missing_docs)]
    pub hourly_rate: Option<String>,
    #[allow(missing_docs)]
    pub hours_worked: Option<String>,
    #[allow(missing_docs)]
    pub invoice_amount: Option<String>,
    #[serde(deserialize_with = "compat_tag::deserialize")]
    #[allow(missing_docs)]
    pub invoice_status: Option<InvoiceStatus>,
    #[serde(deserialize_with = "compat_tag::deserialize")]
    #[allow(missing_docs)]
    pub payment_method: Option<PaymentMethod>,
    #[allow(missing_docs)]
    pub paypal_email: Option<String>,
    #[allow(missing_docs)]
    pub is_paypal_account_holder: Option<bool>,
    #[serde(with = "compat_date")]
    #[allow(missing_docs)]
    pub paypal_dob: Option<NaiveDate>,
    #[allow(missing_docs)]
    pub ltc_wallet_address: Option<String>,
    #[allow(missing_docs)]
    pub other_payment_details: Option<String>,
    #[allow(missing_docs)]
    pub task_description: Option<String>,
    #[allow(missing_docs)]
    pub notes: Option<String>,
    #[allow(missing_docs)]
    pub accounting_category: Option<String>,
}

impl RecordPatch {
    /// Applies every present field onto `record`; absent fields retain
    /// their prior value.
    pub fn apply(self, record: &mut InvoiceRecord) {
        macro_rules! apply_field {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = self.$field {
                    record.$field = value;
                })*
            };
        }
        apply_field!(
            invoice_id,
            recipient,
            full_legal_name,
            email,
            discord_display_name,
            discord_username,
            phone_number,
            reddit_username,
            country,
            custom_name,
            custom_email,
            invoice_type,
            hourly_rate,
            hours_worked,
            invoice_amount,
            paypal_email,
            is_paypal_account_holder,
            ltc_wallet_address,
            other_payment_details,
            task_description,
            notes,
            accounting_category,
        );
        if self.invoice_status.is_some() {
            record.invoice_status = self.invoice_status;
        }
        if self.payment_method.is_some() {
            record.payment_method = self.payment_method;
        }
        if self.paypal_dob.is_some() {
            record.paypal_dob = self.paypal_dob;
        }
    }
}

/// Date (de)serialization compatible with documents exported by the original
/// form, where `paypalDob` could be a full ISO timestamp. Serializes as
/// `YYYY-MM-DD`; accepts either that or a timestamp with a date prefix.
mod compat_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => {
                let date_part = s.get(..10).unwrap_or(s.as_str());
                NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
                    .map(Some)
                    .map_err(serde::de::Error::custom)
            }
        }
    }
}

/// Tag deserialization compatible with documents exported by the original
/// form, where an unselected `invoiceStatus`/`paymentMethod` was stored as
/// `""` rather than omitted. The empty string maps to `None`; any other
/// string must be a known tag.
mod compat_tag {
    use serde::de::IntoDeserializer;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => T::deserialize(s.into_deserializer()).map(Some),
        }
    }
}
