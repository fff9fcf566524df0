//! Database configuration module.
//!
//! Handles the `SQLite` connection and table creation using `SeaORM`. Table
//! creation uses `Schema::create_table_from_entity` so the database schema is
//! generated from the entity definitions without hand-written SQL.

use crate::entities::Invoice;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from the environment or returns the default
/// local `SQLite` path. The default carries `mode=rwc` so the file is
/// created on first use.
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://data/invoice_desk.sqlite?mode=rwc".to_string())
}

/// Establishes a connection to the `SQLite` database using the
/// `DATABASE_URL` environment variable.
///
/// Falls back to a default local `SQLite` file if no environment variable is
/// set; the file's parent directory is created when missing so a clean
/// checkout connects first try.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let url = get_database_url();
    prepare_sqlite_path(&url)?;
    Database::connect(url).await.map_err(Into::into)
}

/// Creates the parent directory of a file-backed `SQLite` URL. In-memory
/// URLs and non-sqlite schemes pass through untouched.
fn prepare_sqlite_path(url: &str) -> Result<()> {
    let Some(path) = url.strip_prefix("sqlite://") else {
        return Ok(());
    };
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() || path == ":memory:" {
        return Ok(());
    }
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Creates the invoice table from the entity definition.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut invoice_table = schema.create_table_from_entity(Invoice);
    invoice_table.if_not_exists();
    db.execute(builder.build(&invoice_table)).await?;

    Ok(())
}
