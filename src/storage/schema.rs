//! Database schema definitions

/// SQL to create the coffee table.
/// AUTOINCREMENT keeps identifiers from ever being handed out twice.
pub const CREATE_COFFEE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS coffee (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    roasting TEXT NOT NULL,
    flavor TEXT NOT NULL,
    price REAL NOT NULL,
    size REAL NOT NULL,
    type TEXT NOT NULL
)
"#;

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_COFFEE_TABLE]
}
