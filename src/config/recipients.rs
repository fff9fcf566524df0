//! Recipient descriptor table.
//!
//! Every recipient the form can invoice is described by one row: a selection
//! key, the invoice-ID prefix it stamps, and the identity (name and email)
//! that the prefix resolves back to. Built-in rows cover the known parties;
//! a `config.toml` file can add or override rows without touching code.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Key of the "custom recipient" row. Selecting it switches identity
/// resolution to the record's `customName`/`customEmail` overrides.
pub const CUSTOM_RECIPIENT_KEY: &str = "custom";

/// Recipient key used when creating a fresh record.
pub const DEFAULT_RECIPIENT_KEY: &str = "MattyJacks";

/// Invoice-ID prefix used for recipient keys with no table entry.
pub const DEFAULT_ID_PREFIX: &str = "HC-";

/// Descriptor for one recipient the form can invoice.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RecipientConfig {
    /// Selection key shown in the form (e.g., "MattyJacks")
    pub key: String,
    /// Prefix stamped onto generated invoice IDs (e.g., "MJ-")
    pub prefix: String,
    /// Name the prefix resolves to
    pub name: String,
    /// Email the prefix resolves to
    pub email: String,
}

/// Configuration structure for the optional config.toml file
#[derive(Debug, Deserialize)]
struct RecipientsFile {
    #[serde(default)]
    recipients: Vec<RecipientConfig>,
}

/// The full recipient table, lookup by key or by invoice-ID prefix.
#[derive(Debug, Clone)]
pub struct RecipientDirectory {
    entries: Vec<RecipientConfig>,
}

impl Default for RecipientDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RecipientDirectory {
    /// The built-in table: the known parties plus the custom row.
    pub fn builtin() -> Self {
        let entry = |key: &str, prefix: &str, name: &str, email: &str| RecipientConfig {
            key: key.to_string(),
            prefix: prefix.to_string(),
            name: name.to_string(),
            email: email.to_string(),
        };
        Self {
            entries: vec![
                entry("MattyJacks", "MJ-", "MattyJacks", "Matty@firebringerai.com"),
                entry("FirebringerAI", "FBAI-", "FirebringerAI", "Justin@firebringerai.com"),
                entry("Hypnosis Capital", "HC-", "Hypnosis Capital", "hypnosiscapital@gmail.com"),
                entry(CUSTOM_RECIPIENT_KEY, "INV-", "", ""),
            ],
        }
    }

    /// Looks up a recipient by its selection key.
    pub fn by_key(&self, key: &str) -> Option<&RecipientConfig> {
        self.entries.iter().find(|r| r.key == key)
    }

    /// Finds the recipient whose prefix matches the start of `invoice_id`.
    ///
    /// The longest matching prefix wins, so overlapping prefixes resolve to
    /// the most specific entry.
    pub fn by_invoice_id(&self, invoice_id: &str) -> Option<&RecipientConfig> {
        self.entries
            .iter()
            .filter(|r| !r.prefix.is_empty() && invoice_id.starts_with(r.prefix.as_str()))
            .max_by_key(|r| r.prefix.len())
    }

    /// All entries, in table order.
    pub fn entries(&self) -> &[RecipientConfig] {
        &self.entries
    }

    /// Merges rows from a TOML file over the built-in table.
    ///
    /// A file row with a key already present replaces the built-in row;
    /// new keys are appended.
    pub fn with_overrides_from<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
                message: format!("Failed to read config file: {e}"),
            })?;

        let file: RecipientsFile = toml::from_str(&contents).map_err(|e| Error::Config {
            message: format!("Failed to parse config.toml: {e}"),
        })?;

        for row in file.recipients {
            if let Some(existing) = self.entries.iter_mut().find(|r| r.key == row.key) {
                *existing = row;
            } else {
                self.entries.push(row);
            }
        }
        Ok(self)
    }
}

/// Loads the recipient directory: built-in defaults, plus overrides from
/// `config.toml` when that file exists next to the binary.
pub fn load_directory() -> Result<RecipientDirectory> {
    let directory = RecipientDirectory::builtin();
    if Path::new("config.toml").exists() {
        tracing::debug!("Applying recipient overrides from config.toml");
        directory.with_overrides_from("config.toml")
    } else {
        Ok(directory)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_builtin_table_lookups() {
        let dir = RecipientDirectory::builtin();

        let mj = dir.by_key("MattyJacks").unwrap();
        assert_eq!(mj.prefix, "MJ-");
        assert_eq!(mj.email, "Matty@firebringerai.com");

        let hc = dir.by_invoice_id("HC-7XJ2PQ9").unwrap();
        assert_eq!(hc.name, "Hypnosis Capital");

        assert!(dir.by_invoice_id("ZZ-0000000").is_none());
    }

    #[test]
    fn test_longest_prefix_wins() {
        let mut dir = RecipientDirectory::builtin();
        dir.entries.push(RecipientConfig {
            key: "MattyJacksEU".to_string(),
            prefix: "MJ-EU".to_string(),
            name: "MattyJacks EU".to_string(),
            email: "eu@firebringerai.com".to_string(),
        });

        assert_eq!(dir.by_invoice_id("MJ-EUXXXXX").unwrap().key, "MattyJacksEU");
        assert_eq!(dir.by_invoice_id("MJ-XXXXXXX").unwrap().key, "MattyJacks");
    }

    #[test]
    fn test_parse_recipient_overrides() {
        let toml_str = r#"
            [[recipients]]
            key = "MattyJacks"
            prefix = "MJ-"
            name = "MattyJacks LLC"
            email = "billing@firebringerai.com"

            [[recipients]]
            key = "Acme"
            prefix = "AC-"
            name = "Acme Corp"
            email = "ap@acme.example"
        "#;

        let file: RecipientsFile = toml::from_str(toml_str).unwrap();
        assert_eq!(file.recipients.len(), 2);

        let mut dir = RecipientDirectory::builtin();
        for row in file.recipients {
            if let Some(existing) = dir.entries.iter_mut().find(|r| r.key == row.key) {
                *existing = row;
            } else {
                dir.entries.push(row);
            }
        }
        assert_eq!(dir.by_key("MattyJacks").unwrap().name, "MattyJacks LLC");
        assert_eq!(dir.by_key("Acme").unwrap().prefix, "AC-");
    }
}
