use crate::coffee::CoffeeRecord;
use tabled::{settings::Style, Table, Tabled};

/// Column headers of the record grid, in display order.
pub const COLUMN_LABELS: [&str; 6] = ["ID", "roasting", "flavor", "price", "volume", "type"];

#[derive(Tabled)]
pub struct CoffeeRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "roasting")]
    pub roasting: String,
    #[tabled(rename = "flavor")]
    pub flavor: String,
    #[tabled(rename = "price")]
    pub price: String,
    #[tabled(rename = "volume")]
    pub volume: String,
    #[tabled(rename = "type")]
    pub kind: String,
}

impl From<&CoffeeRecord> for CoffeeRow {
    fn from(record: &CoffeeRecord) -> Self {
        Self {
            id: record.id,
            roasting: record.roasting.clone(),
            flavor: record.flavor.clone(),
            price: format!("{:.2}", record.price),
            volume: format_volume(record.size),
            kind: record.kind.to_string(),
        }
    }
}

/// Volumes are whole numbers most of the time; drop the trailing zeros.
pub fn format_volume(size: f64) -> String {
    let formatted = format!("{:.3}", size);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

pub struct TableBuilder {
    rows: Vec<CoffeeRow>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_record(&mut self, record: &CoffeeRecord) {
        self.rows.push(CoffeeRow::from(record));
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn coffee_table(records: &[CoffeeRecord]) -> String {
    let mut builder = TableBuilder::new();
    for record in records {
        builder.add_record(record);
    }
    builder.build()
}
