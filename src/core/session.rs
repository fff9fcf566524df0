//! Interactive form session.
//!
//! Owns the in-progress record and the small amount of state the pure
//! functions must not carry: the reactive amount derivation (last writer
//! wins between the derived value and a manual edit), the invoice-ID
//! regeneration rule, and the single-submission guard. All derivation goes
//! through the `core` functions so it stays independently testable.

use crate::config::recipients::RecipientDirectory;
use crate::core::amount::derive_amount;
use crate::core::json::{export_to_file, import_from_file};
use crate::core::recipient::{Identity, generate_invoice_id, resolve_identity};
use crate::core::record::{InvoiceRecord, InvoiceType};
use crate::core::submit::create_invoice;
use crate::core::summary::{render_subject_line, render_summary};
use crate::entities::invoice;
use crate::errors::{Error, Result};
use chrono::{DateTime, TimeZone};
use sea_orm::DatabaseConnection;
use std::path::Path;
use tracing::{debug, warn};

/// One write per copy: the full text is assembled first, then handed to the
/// host clipboard in a single call, so a failure cannot leave a partial
/// payload behind.
pub trait ClipboardSink {
    /// Replaces the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The in-progress form: one record plus the session flags.
#[derive(Debug)]
pub struct FormSession {
    directory: RecipientDirectory,
    record: InvoiceRecord,
    /// Set once the user supplies their own ID; blocks regeneration.
    custom_invoice_id: bool,
    /// True while a submission is outstanding.
    submitting: bool,
}

impl FormSession {
    /// Starts a session with a fresh default record.
    pub fn new(directory: RecipientDirectory) -> Self {
        let record = InvoiceRecord::fresh(&directory);
        Self {
            directory,
            record,
            custom_invoice_id: false,
            submitting: false,
        }
    }

    /// The current record.
    pub fn record(&self) -> &InvoiceRecord {
        &self.record
    }

    /// The recipient directory this session resolves against.
    pub fn directory(&self) -> &RecipientDirectory {
        &self.directory
    }

    /// Whether a submission is outstanding.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Selects a recipient. Regenerates the invoice ID for the new
    /// recipient's prefix unless a custom ID was explicitly set.
    pub fn set_recipient(&mut self, key: &str) {
        self.record.recipient = key.to_string();
        if self.custom_invoice_id {
            debug!(%key, "Recipient changed, keeping explicit invoice ID");
        } else {
            self.record.invoice_id = generate_invoice_id(&self.directory, key);
            debug!(%key, invoice_id = %self.record.invoice_id, "Recipient changed, regenerated invoice ID");
        }
    }

    /// Sets a user-supplied invoice ID. From here on, recipient changes no
    /// longer regenerate it.
    pub fn set_invoice_id(&mut self, id: impl Into<String>) {
        self.record.invoice_id = id.into();
        self.custom_invoice_id = true;
    }

    /// Switches between one-time and hourly, re-deriving the amount when
    /// entering hourly mode.
    pub fn set_invoice_type(&mut self, invoice_type: InvoiceType) {
        self.record.invoice_type = invoice_type;
        if invoice_type == InvoiceType::Hourly {
            self.recompute_amount();
        }
    }

    /// Updates the hourly rate and re-derives the amount.
    pub fn set_hourly_rate(&mut self, raw: impl Into<String>) {
        self.record.hourly_rate = raw.into();
        self.recompute_amount();
    }

    /// Updates the hours worked and re-derives the amount.
    pub fn set_hours_worked(&mut self, raw: impl Into<String>) {
        self.record.hours_worked = raw.into();
        self.recompute_amount();
    }

    /// Manually overrides the amount. The override stands until the next
    /// rate or hours edit re-derives it (last writer wins).
    pub fn set_invoice_amount(&mut self, raw: impl Into<String>) {
        self.record.invoice_amount = raw.into();
    }

    /// Mutable access for the plain fields that carry no derivation.
    pub fn record_mut(&mut self) -> &mut InvoiceRecord {
        &mut self.record
    }

    fn recompute_amount(&mut self) {
        if self.record.invoice_type == InvoiceType::Hourly {
            self.record.invoice_amount = derive_amount(
                InvoiceType::Hourly,
                &self.record.hourly_rate,
                &self.record.hours_worked,
                &self.record.invoice_amount,
            );
        }
    }

    /// Resolves who the current record is addressed to.
    pub fn identity(&self) -> Identity {
        resolve_identity(
            &self.directory,
            &self.record.invoice_id,
            &self.record.custom_name,
            &self.record.custom_email,
        )
    }

    /// Renders the full email-body summary for the current record.
    pub fn summary<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        render_summary(&self.record, &self.directory, now)
    }

    /// Renders the one-line email subject for the current record.
    pub fn subject<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        render_subject_line(&self.record, now)
    }

    /// Assembles the summary and hands it to the clipboard in one write.
    pub fn copy_summary<Tz: TimeZone>(
        &self,
        clipboard: &mut dyn ClipboardSink,
        now: &DateTime<Tz>,
    ) -> Result<()>
    where
        Tz::Offset: std::fmt::Display,
    {
        let text = self.summary(now);
        clipboard.set_text(&text)
    }

    /// Assembles the subject line and hands it to the clipboard in one write.
    pub fn copy_subject<Tz: TimeZone>(
        &self,
        clipboard: &mut dyn ClipboardSink,
        now: &DateTime<Tz>,
    ) -> Result<()>
    where
        Tz::Offset: std::fmt::Display,
    {
        let text = self.subject(now);
        clipboard.set_text(&text)
    }

    /// Exports the current record as `invoice_data.json`-style document.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        export_to_file(&self.record, path)
    }

    /// Imports a saved document, applying recognized keys onto the current
    /// record. On failure the record is unchanged.
    pub fn import<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        import_from_file(&mut self.record, path)
    }

    /// Submits the record to storage.
    ///
    /// Rejects re-entry while a submission is outstanding; the flag clears
    /// when the request settles regardless of outcome. Success resets the
    /// session to a fresh record; failure preserves the form state so the
    /// user can retry.
    pub async fn submit(&mut self, db: &DatabaseConnection) -> Result<invoice::Model> {
        if self.submitting {
            warn!("Submission rejected: one already in flight");
            return Err(Error::SubmissionInFlight);
        }
        self.submitting = true;
        let result = create_invoice(db, &self.record).await;
        self.submitting = false;

        if result.is_ok() {
            self.reset();
        }
        result
    }

    /// Discards the current record for a fresh default one.
    pub fn reset(&mut self) {
        self.record = InvoiceRecord::fresh(&self.directory);
        self.custom_invoice_id = false;
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{sample_record, setup_test_db, test_instant};

    /// Clipboard fake recording every write, optionally failing.
    #[derive(Default)]
    struct FakeClipboard {
        writes: Vec<String>,
        fail: bool,
    }

    impl ClipboardSink for FakeClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(Error::Clipboard {
                    message: "denied".to_string(),
                });
            }
            self.writes.push(text.to_string());
            Ok(())
        }
    }

    fn session_with_sample() -> FormSession {
        let mut session = FormSession::new(RecipientDirectory::builtin());
        *session.record_mut() = sample_record();
        session
    }

    #[test]
    fn test_reactive_amount_derivation() {
        let mut session = session_with_sample();
        session.set_invoice_type(InvoiceType::Hourly);
        session.set_hourly_rate("10.00");
        session.set_hours_worked("5.25");
        assert_eq!(session.record().invoice_amount, "52.50");

        // Manual edit wins over the derived value...
        session.set_invoice_amount("55.00");
        assert_eq!(session.record().invoice_amount, "55.00");

        // ...until the next rate/hours edit re-derives it.
        session.set_hours_worked("6");
        assert_eq!(session.record().invoice_amount, "60.00");
    }

    #[test]
    fn test_recipient_change_regenerates_id() {
        let mut session = FormSession::new(RecipientDirectory::builtin());
        assert!(session.record().invoice_id.starts_with("MJ-"));

        session.set_recipient("FirebringerAI");
        assert!(session.record().invoice_id.starts_with("FBAI-"));

        session.set_recipient("custom");
        assert!(session.record().invoice_id.starts_with("INV-"));
    }

    #[test]
    fn test_explicit_id_survives_recipient_change() {
        let mut session = FormSession::new(RecipientDirectory::builtin());
        session.set_invoice_id("ACME-0001");
        session.set_recipient("MattyJacks");
        assert_eq!(session.record().invoice_id, "ACME-0001");
    }

    #[test]
    fn test_copy_is_single_write() {
        let session = session_with_sample();
        let mut clipboard = FakeClipboard::default();

        session.copy_summary(&mut clipboard, &test_instant()).unwrap();
        session.copy_subject(&mut clipboard, &test_instant()).unwrap();

        assert_eq!(clipboard.writes.len(), 2);
        assert!(clipboard.writes[0].starts_with("Invoice Preview"));
        assert!(clipboard.writes[1].starts_with("Invoice Id: "));
    }

    #[test]
    fn test_copy_failure_surfaces_error() {
        let session = session_with_sample();
        let mut clipboard = FakeClipboard {
            fail: true,
            ..FakeClipboard::default()
        };
        let err = session
            .copy_summary(&mut clipboard, &test_instant())
            .unwrap_err();
        assert!(matches!(err, Error::Clipboard { .. }));
        assert!(clipboard.writes.is_empty());
    }

    #[tokio::test]
    async fn test_submit_success_resets_form() -> Result<()> {
        let db = setup_test_db().await?;
        let mut session = session_with_sample();

        let stored = session.submit(&db).await?;
        assert_eq!(stored.full_legal_name, "Matt Jackson");

        // Fresh record afterwards
        assert!(session.record().full_legal_name.is_empty());
        assert!(session.record().invoice_id.starts_with("MJ-"));
        assert!(!session.is_submitting());
        Ok(())
    }

    #[tokio::test]
    async fn test_submit_failure_preserves_form() -> Result<()> {
        let db = setup_test_db().await?;
        let mut session = session_with_sample();
        session.record_mut().task_description = String::new();

        let err = session.submit(&db).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        // Form state intact, flag cleared, user can fix and retry
        assert_eq!(session.record().full_legal_name, "Matt Jackson");
        assert!(!session.is_submitting());

        session.record_mut().task_description = "Fixed".to_string();
        session.submit(&db).await?;
        Ok(())
    }
}
