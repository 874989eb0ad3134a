pub mod form;
pub mod icons;
pub mod output;
pub mod prompt;
pub mod table;
pub mod theme;
pub mod window;

pub use form::CoffeeForm;
pub use icons::Icons;
pub use output::{dim, error, header, info, record_created, record_updated, success, warn};
pub use prompt::{parse_finite, stdin_prompter, LinePrompter, Prompter, TerminalPrompter};
pub use table::{coffee_table, format_volume, TableBuilder, COLUMN_LABELS};
pub use theme::{theme, Theme};
pub use window::{EditOutcome, InventoryWindow, WindowCommand};
