//! # Coffee Inventory
//!
//! Inventory manager for a coffee shop: a table of coffee records kept in a
//! local SQLite file, with a form for creating and editing them.
//!
//! Coffee Inventory provides:
//! - The `CoffeeRecord` model and the `CoffeeRepository` data-access trait
//! - `SqliteStore`, the SQLite-backed repository with explicit schema setup
//! - A terminal presentation layer: record table, edit form, inventory window

pub mod coffee;
pub mod config;
pub mod output;
pub mod storage;
pub mod ui;

// Re-exports for convenient access
pub use coffee::{CoffeeFields, CoffeeRecord, CoffeeType};
pub use storage::{CoffeeRepository, SqliteStore};

/// Result type alias for inventory operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for inventory operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid coffee type: {0} (expected beans or ground)")]
    InvalidCoffeeType(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Stable code for machine-readable output
    pub fn code(&self) -> &'static str {
        match self {
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::InvalidCoffeeType(_) => "INVALID_COFFEE_TYPE",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
