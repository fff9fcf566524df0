//! Core business logic - framework-agnostic record model, validation,
//! derivation, serialization, and submission operations.

/// Derived invoice amount from rate and hours
pub mod amount;
/// Date/time derivation for the preview header and subject line
pub mod dates;
/// JSON export, import, and patch application
pub mod json;
/// Invoice-ID generation and recipient identity resolution
pub mod recipient;
/// The invoice record itself and its typed enums
pub mod record;
/// Interactive form session: reactive derivation and submission guard
pub mod session;
/// Database submission of a finished record
pub mod submit;
/// Clipboard text assembly (summary and subject line)
pub mod summary;
/// Field-level validation rules
pub mod validate;
