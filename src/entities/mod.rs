//! Entity module - Contains the SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod invoice;

// Re-export specific types to avoid conflicts
pub use invoice::{Entity as Invoice, Model as InvoiceModel};
