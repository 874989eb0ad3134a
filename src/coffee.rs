//! Coffee record types
//!
//! A single flat entity, one row of the `coffee` table:
//! - `CoffeeRecord`: the stored row, identifier included
//! - `CoffeeFields`: the mutable attributes, used by create and update
//! - `CoffeeType`: whole beans or ground

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the coffee is sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoffeeType {
    /// Whole roasted beans
    #[default]
    Beans,
    /// Pre-ground coffee
    Ground,
}

impl CoffeeType {
    /// Get the string representation stored in the `type` column
    pub fn as_str(&self) -> &'static str {
        match self {
            CoffeeType::Beans => "beans",
            CoffeeType::Ground => "ground",
        }
    }

    /// Get all coffee types, in selector order
    pub fn all() -> &'static [CoffeeType] {
        &[CoffeeType::Beans, CoffeeType::Ground]
    }
}

impl FromStr for CoffeeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "beans" | "bean" | "whole" | "зерна" => Ok(CoffeeType::Beans),
            "ground" | "grounded" | "молотый" => Ok(CoffeeType::Ground),
            _ => Err(Error::InvalidCoffeeType(s.to_string())),
        }
    }
}

impl fmt::Display for CoffeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The mutable attributes of a coffee record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CoffeeFields {
    pub roasting: String,
    pub flavor: String,
    pub price: f64,
    /// Package volume
    pub size: f64,
    #[serde(rename = "type")]
    pub kind: CoffeeType,
}

impl CoffeeFields {
    pub fn new(
        roasting: impl Into<String>,
        flavor: impl Into<String>,
        price: f64,
        size: f64,
        kind: CoffeeType,
    ) -> Self {
        Self {
            roasting: roasting.into(),
            flavor: flavor.into(),
            price,
            size,
            kind,
        }
    }
}

/// A stored coffee record.
///
/// The identifier is assigned by the store on creation and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoffeeRecord {
    pub id: i64,
    pub roasting: String,
    pub flavor: String,
    pub price: f64,
    pub size: f64,
    #[serde(rename = "type")]
    pub kind: CoffeeType,
}

impl CoffeeRecord {
    /// Attach an identifier to a set of fields
    pub fn from_fields(id: i64, fields: CoffeeFields) -> Self {
        Self {
            id,
            roasting: fields.roasting,
            flavor: fields.flavor,
            price: fields.price,
            size: fields.size,
            kind: fields.kind,
        }
    }

    /// The mutable part of this record
    pub fn fields(&self) -> CoffeeFields {
        CoffeeFields {
            roasting: self.roasting.clone(),
            flavor: self.flavor.clone(),
            price: self.price,
            size: self.size,
            kind: self.kind,
        }
    }

    /// Overwrite every mutable attribute, keeping the identifier
    pub fn apply(&mut self, fields: CoffeeFields) {
        self.roasting = fields.roasting;
        self.flavor = fields.flavor;
        self.price = fields.price;
        self.size = fields.size;
        self.kind = fields.kind;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coffee_type_roundtrip() {
        for kind in CoffeeType::all() {
            let parsed: CoffeeType = kind.as_str().parse().unwrap();
            assert_eq!(*kind, parsed);
        }
    }

    #[test]
    fn test_coffee_type_aliases() {
        assert_eq!(CoffeeType::from_str("Beans").unwrap(), CoffeeType::Beans);
        assert_eq!(CoffeeType::from_str(" ground ").unwrap(), CoffeeType::Ground);
        assert_eq!(CoffeeType::from_str("зерна").unwrap(), CoffeeType::Beans);
        assert_eq!(CoffeeType::from_str("молотый").unwrap(), CoffeeType::Ground);
    }

    #[test]
    fn test_coffee_type_rejects_unknown() {
        let err = CoffeeType::from_str("instant").unwrap_err();
        assert_eq!(err.code(), "INVALID_COFFEE_TYPE");
    }

    #[test]
    fn test_record_apply_keeps_id() {
        let mut record = CoffeeRecord::from_fields(
            7,
            CoffeeFields::new("medium", "nutty", 12.5, 250.0, CoffeeType::Beans),
        );
        record.apply(CoffeeFields::new("dark", "smoky", 14.0, 500.0, CoffeeType::Ground));

        assert_eq!(record.id, 7);
        assert_eq!(record.roasting, "dark");
        assert_eq!(record.kind, CoffeeType::Ground);
        assert_eq!(record.fields().size, 500.0);
    }

    #[test]
    fn test_record_serializes_type_column_name() {
        let record = CoffeeRecord::from_fields(
            1,
            CoffeeFields::new("light", "fruity", 9.0, 100.0, CoffeeType::Ground),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "ground");
        assert_eq!(json["id"], 1);
    }
}
