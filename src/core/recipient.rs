//! Invoice-ID generation and recipient identity resolution.
//!
//! Both operations are table-driven: the recipient directory supplies the
//! prefix for generation and the identity for resolution, so adding a
//! recipient never adds a code path.

use crate::config::recipients::{DEFAULT_ID_PREFIX, RecipientDirectory};
use rand::Rng;

/// Characters eligible for the random part of an invoice ID. Visually
/// ambiguous glyphs (`0`/`O`, `1`/`I`) are excluded.
pub const ID_ALPHABET: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ123456789";

/// Number of random characters appended after the prefix.
pub const ID_SUFFIX_LEN: usize = 7;

/// Placeholder used when an identity part cannot be resolved.
pub const NOT_AVAILABLE: &str = "N/A";

/// A resolved recipient identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Recipient name, or `"Unknown"`
    pub name: String,
    /// Recipient email, or `"N/A"`
    pub email: String,
}

/// Generates a new invoice ID for a recipient key: the key's prefix from the
/// directory (default prefix for unmapped keys) followed by
/// [`ID_SUFFIX_LEN`] independent uniform draws from [`ID_ALPHABET`].
///
/// Not cryptographically secure and not collision-checked; the expected
/// volume makes collisions negligible.
pub fn generate_invoice_id(directory: &RecipientDirectory, recipient_key: &str) -> String {
    let prefix = directory
        .by_key(recipient_key)
        .map_or(DEFAULT_ID_PREFIX, |r| r.prefix.as_str());

    let alphabet: Vec<char> = ID_ALPHABET.chars().collect();
    let mut rng = rand::thread_rng();

    let mut id = String::with_capacity(prefix.len() + ID_SUFFIX_LEN);
    id.push_str(prefix);
    for _ in 0..ID_SUFFIX_LEN {
        id.push(alphabet[rng.gen_range(0..alphabet.len())]);
    }
    id
}

/// Resolves who the invoice is addressed to.
///
/// A non-empty `custom_name` wins outright, with `custom_email` falling back
/// to `"N/A"`. Otherwise the invoice-ID prefix is looked up in the directory;
/// an unmatched prefix (or an entry without an identity, like the custom
/// placeholder row) resolves to `{"Unknown", "N/A"}`. Pure and deterministic.
pub fn resolve_identity(
    directory: &RecipientDirectory,
    invoice_id: &str,
    custom_name: &str,
    custom_email: &str,
) -> Identity {
    if !custom_name.trim().is_empty() {
        let email = if custom_email.trim().is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            custom_email.to_string()
        };
        return Identity {
            name: custom_name.to_string(),
            email,
        };
    }

    directory
        .by_invoice_id(invoice_id)
        .filter(|r| !r.name.is_empty())
        .map_or_else(
            || Identity {
                name: "Unknown".to_string(),
                email: NOT_AVAILABLE.to_string(),
            },
            |r| Identity {
                name: r.name.clone(),
                email: r.email.clone(),
            },
        )
}
