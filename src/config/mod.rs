/// Database configuration and connection management
pub mod database;

/// Recipient descriptor table loaded from built-in defaults and config.toml
pub mod recipients;
