//! Field-level validation rules.
//!
//! Validation never panics and never stops at the first problem: every
//! failing field gets its message, keyed by the field's camelCase name so
//! a form layer can place each message next to its input.

use crate::core::record::InvoiceRecord;
use chrono::NaiveDate;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

/// Message shown for a too-short legal name.
pub const MSG_FULL_NAME: &str = "Full name must be at least 2 characters.";
/// Message shown for a malformed email address.
pub const MSG_EMAIL: &str = "Please enter a valid email address.";
/// Message shown for a too-short phone number.
pub const MSG_PHONE: &str = "Phone number must be at least 10 digits.";
/// Message shown for a missing task description.
pub const MSG_TASK: &str = "Task description is required.";
/// Message shown for an out-of-range date of birth.
pub const MSG_DOB: &str = "Date of birth must be between January 1, 1900 and today.";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    // The pattern is a literal, so construction cannot fail.
    #[allow(clippy::unwrap_used)]
    let re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    re
});

/// Ordered set of field-level error messages, keyed by camelCase field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    /// Records a message for a field. A later message for the same field
    /// replaces the earlier one.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// True when no field failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The message for one field, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Iterates `(field, message)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// True when `value` looks like an email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Checks every field-local rule and returns the full error set, or `Ok`
/// when the record is submittable.
///
/// `today` bounds the date-of-birth check so the function stays a pure
/// function of its inputs.
pub fn validate(record: &InvoiceRecord, today: NaiveDate) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if record.full_legal_name.chars().count() < 2 {
        errors.add("fullLegalName", MSG_FULL_NAME);
    }
    if !is_valid_email(&record.email) {
        errors.add("email", MSG_EMAIL);
    }
    if !record.custom_email.is_empty() && !is_valid_email(&record.custom_email) {
        errors.add("customEmail", MSG_EMAIL);
    }
    if record.phone_number.chars().count() < 10 {
        errors.add("phoneNumber", MSG_PHONE);
    }
    if record.task_description.is_empty() {
        errors.add("taskDescription", MSG_TASK);
    }
    if let Some(dob) = record.paypal_dob {
        // 1900-01-01 is a valid calendar date, the constant cannot fail
        let floor = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN);
        if dob < floor || dob > today {
            errors.add("paypalDob", MSG_DOB);
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::sample_record;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 25).unwrap()
    }

    #[test]
    fn test_valid_record_passes() {
        assert!(validate(&sample_record(), today()).is_ok());
    }

    #[test]
    fn test_collects_every_failing_field() {
        let record = InvoiceRecord::default();
        let errors = validate(&record, today()).unwrap_err();

        assert_eq!(errors.get("fullLegalName"), Some(MSG_FULL_NAME));
        assert_eq!(errors.get("email"), Some(MSG_EMAIL));
        assert_eq!(errors.get("phoneNumber"), Some(MSG_PHONE));
        assert_eq!(errors.get("taskDescription"), Some(MSG_TASK));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_email_syntax() {
        assert!(is_valid_email("mattyjacks11@gmail.com"));
        assert!(is_valid_email("a.b+c@sub.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_custom_email_checked_only_when_present() {
        let mut record = sample_record();
        record.custom_email = String::new();
        assert!(validate(&record, today()).is_ok());

        record.custom_email = "bogus".to_string();
        let errors = validate(&record, today()).unwrap_err();
        assert_eq!(errors.get("customEmail"), Some(MSG_EMAIL));
    }

    #[test]
    fn test_phone_minimum_length() {
        let mut record = sample_record();
        record.phone_number = "123456789".to_string();
        let errors = validate(&record, today()).unwrap_err();
        assert_eq!(errors.get("phoneNumber"), Some(MSG_PHONE));

        record.phone_number = "+15106005735".to_string();
        assert!(validate(&record, today()).is_ok());
    }

    #[test]
    fn test_dob_bounds() {
        let mut record = sample_record();

        record.paypal_dob = NaiveDate::from_ymd_opt(1899, 12, 31);
        assert!(validate(&record, today()).is_err());

        record.paypal_dob = NaiveDate::from_ymd_opt(2026, 8, 26); // tomorrow
        assert!(validate(&record, today()).is_err());

        record.paypal_dob = NaiveDate::from_ymd_opt(1990, 1, 15);
        assert!(validate(&record, today()).is_ok());

        record.paypal_dob = Some(today()); // boundary: today is allowed
        assert!(validate(&record, today()).is_ok());
    }
}
