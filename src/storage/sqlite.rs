//! SQLite storage implementation

use std::path::{Path, PathBuf};
use rusqlite::{Connection, params, OptionalExtension};
use crate::{Result, Error};
use crate::coffee::{CoffeeFields, CoffeeRecord, CoffeeType};
use super::{schema, CoffeeRepository};

const SELECT_COLUMNS: &str = "SELECT id, roasting, flavor, price, size, type FROM coffee";

/// SQLite-backed storage for coffee records.
///
/// Holds one connection for its whole lifetime. Statements run in autocommit
/// mode, so every write is committed when the call returns.
pub struct SqliteStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn, path: Some(path.to_path_buf()) };
        store.initialize_schema()?;
        tracing::debug!("Opened coffee database at {}", path.display());
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn, path: None };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Backing file, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Helper to convert a row to a CoffeeRecord
    fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<CoffeeRecord> {
        let kind_str: String = row.get(5)?;
        let kind: CoffeeType = kind_str.parse().map_err(|e: Error| {
            rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(e))
        })?;

        Ok(CoffeeRecord {
            id: row.get(0)?,
            roasting: row.get(1)?,
            flavor: row.get(2)?,
            price: row.get(3)?,
            size: row.get(4)?,
            kind,
        })
    }
}

impl CoffeeRepository for SqliteStore {
    fn list_all(&self) -> Result<Vec<CoffeeRecord>> {
        let mut stmt = self.conn.prepare(SELECT_COLUMNS)?;
        let records = stmt
            .query_map([], Self::row_to_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        tracing::debug!("Loaded {} coffee records", records.len());
        Ok(records)
    }

    fn create(&self, fields: &CoffeeFields) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO coffee (roasting, flavor, price, size, type) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                fields.roasting,
                fields.flavor,
                fields.price,
                fields.size,
                fields.kind.as_str(),
            ],
        )?;
        let id = self.conn.last_insert_rowid();

        tracing::info!("Created coffee record {}", id);
        Ok(id)
    }

    fn update(&self, id: i64, fields: &CoffeeFields) -> Result<bool> {
        let changed = self.conn.execute(
            "UPDATE coffee SET roasting = ?1, flavor = ?2, price = ?3, size = ?4, type = ?5 WHERE id = ?6",
            params![
                fields.roasting,
                fields.flavor,
                fields.price,
                fields.size,
                fields.kind.as_str(),
                id,
            ],
        )?;

        if changed == 0 {
            tracing::warn!("Update matched no coffee record with id {}", id);
            return Ok(false);
        }
        tracing::info!("Updated coffee record {}", id);
        Ok(true)
    }

    fn get(&self, id: i64) -> Result<Option<CoffeeRecord>> {
        self.conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                [id],
                Self::row_to_record,
            )
            .optional()
            .map_err(Into::into)
    }
}
