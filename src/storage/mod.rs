//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with a single table:
//! - coffee(id, roasting, flavor, price, size, type)
//!
//! The presentation layer only sees the `CoffeeRepository` trait, so the
//! storage engine can be swapped without touching the UI.

pub mod schema;
pub mod sqlite;

pub use sqlite::SqliteStore;

use crate::Result;
use crate::coffee::{CoffeeFields, CoffeeRecord};

/// Data-access contract for coffee records.
///
/// Every call commits before returning. Nothing is cached, so each read
/// reflects the current committed state.
pub trait CoffeeRepository {
    /// All records in store-defined order
    fn list_all(&self) -> Result<Vec<CoffeeRecord>>;

    /// Insert a new record and return its freshly assigned identifier
    fn create(&self, fields: &CoffeeFields) -> Result<i64>;

    /// Overwrite every mutable field of the record with `id`.
    ///
    /// An unknown `id` is not an error: nothing changes and `false` is
    /// returned.
    fn update(&self, id: i64, fields: &CoffeeFields) -> Result<bool>;

    /// Look up a single record by identifier
    fn get(&self, id: i64) -> Result<Option<CoffeeRecord>> {
        Ok(self.list_all()?.into_iter().find(|record| record.id == id))
    }
}
