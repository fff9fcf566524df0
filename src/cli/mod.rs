//! Command-line surface.
//!
//! Thin drivers over the core operations: each subcommand loads a saved
//! record (or starts a fresh one), runs one operation, and prints the
//! result. All real logic lives in `core`.

use crate::config::database::{create_connection, create_tables};
use crate::config::recipients::{DEFAULT_RECIPIENT_KEY, load_directory};
use crate::core::json::EXPORT_FILE_NAME;
use crate::core::session::FormSession;
use crate::core::validate::validate;
use crate::errors::{Error, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};

/// Collects, previews, and submits invoice records.
#[derive(Parser)]
#[command(name = "invoice-desk")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print a fresh record with a generated invoice ID
    New {
        /// Recipient key used for the ID prefix
        #[arg(long, default_value = DEFAULT_RECIPIENT_KEY)]
        recipient: String,
    },
    /// Check a saved record and report field errors
    Validate {
        /// Path to a saved invoice_data.json document
        file: PathBuf,
    },
    /// Render the email-body summary for a saved record
    Preview {
        /// Path to a saved invoice_data.json document
        file: PathBuf,
    },
    /// Render the email subject line for a saved record
    Subject {
        /// Path to a saved invoice_data.json document
        file: PathBuf,
    },
    /// Re-export a saved record as a pretty-printed document
    Export {
        /// Path to a saved invoice_data.json document
        file: PathBuf,
        /// Output path
        #[arg(long, default_value = EXPORT_FILE_NAME)]
        out: PathBuf,
    },
    /// Submit a saved record to the database
    Submit {
        /// Path to a saved invoice_data.json document
        file: PathBuf,
    },
}

/// Loads a saved document onto a fresh default record.
fn load_session(file: &PathBuf) -> Result<FormSession> {
    let directory = load_directory()?;
    let mut session = FormSession::new(directory);
    session.import(file)?;
    Ok(session)
}

/// Parses arguments and runs the selected command.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::New { recipient } => {
            let directory = load_directory()?;
            let mut session = FormSession::new(directory);
            session.set_recipient(&recipient);
            // A fresh record has empty identity fields, so bypass the
            // export completeness gate and print the raw document.
            let document = serde_json::to_string_pretty(session.record())?;
            println!("{document}");
        }
        Commands::Validate { file } => {
            let session = load_session(&file)?;
            let today = Local::now().date_naive();
            match validate(session.record(), today) {
                Ok(()) => println!("OK: record is submittable."),
                Err(errors) => {
                    for (field, message) in errors.iter() {
                        println!("{field}: {message}");
                    }
                    return Err(Error::Validation(errors));
                }
            }
        }
        Commands::Preview { file } => {
            let session = load_session(&file)?;
            println!("{}", session.summary(&Local::now()));
        }
        Commands::Subject { file } => {
            let session = load_session(&file)?;
            println!("{}", session.subject(&Local::now()));
        }
        Commands::Export { file, out } => {
            let session = load_session(&file)?;
            session.export(&out)?;
            println!("Exported to {}", out.display());
        }
        Commands::Submit { file } => {
            let mut session = load_session(&file)?;
            let db = create_connection().await?;
            create_tables(&db).await?;

            match session.submit(&db).await {
                Ok(stored) => {
                    info!(id = stored.id, "Submission accepted");
                    println!(
                        "Invoice created successfully. Invoice ID: {}",
                        stored.invoice_id
                    );
                }
                Err(e) => {
                    error!("Failed to create invoice: {e}");
                    return Err(e);
                }
            }
        }
    }

    Ok(())
}
