//! JSON export and import of invoice records.
//!
//! Export refuses records whose identity fields are still empty, mirroring
//! the pre-download completeness check of the original form. Import parses
//! into a [`RecordPatch`] so only recognized keys present in the document
//! touch the record; unknown keys are ignored silently.

use crate::core::record::{InvoiceRecord, RecordPatch};
use crate::errors::{Error, Result};
use std::path::Path;

/// Conventional filename for an exported record.
pub const EXPORT_FILE_NAME: &str = "invoice_data.json";

/// Serializes a record as a pretty-printed JSON document.
///
/// Errors with [`Error::IncompleteRecord`] when `fullLegalName` or `email`
/// is empty; no document is produced in that case.
pub fn to_json(record: &InvoiceRecord) -> Result<String> {
    if record.full_legal_name.trim().is_empty() {
        return Err(Error::IncompleteRecord {
            field: "fullLegalName",
        });
    }
    if record.email.trim().is_empty() {
        return Err(Error::IncompleteRecord { field: "email" });
    }
    serde_json::to_string_pretty(record).map_err(Into::into)
}

/// Parses an uploaded document into a patch of recognized fields.
///
/// A malformed document is an error value, never a panic, and the caller's
/// record is untouched because nothing is applied.
pub fn from_json(text: &str) -> Result<RecordPatch> {
    serde_json::from_str(text).map_err(Into::into)
}

/// Exports a record to a file in one write.
pub fn export_to_file<P: AsRef<Path>>(record: &InvoiceRecord, path: P) -> Result<()> {
    let document = to_json(record)?;
    std::fs::write(path.as_ref(), document)?;
    tracing::info!(path = %path.as_ref().display(), "Exported invoice record");
    Ok(())
}

/// Reads a document from a file and applies its recognized fields onto
/// `record`. On any failure the record keeps its prior state.
pub fn import_from_file<P: AsRef<Path>>(record: &mut InvoiceRecord, path: P) -> Result<()> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let patch = from_json(&text)?;
    patch.apply(record);
    tracing::info!(path = %path.as_ref().display(), "Imported invoice record");
    Ok(())
}
