//! Inventory window: the record grid plus its create and edit actions.
//!
//! The window keeps its own copy of the rows. It reads the whole table once
//! when opened (and on an explicit refresh); after a create or an edit only
//! the affected row is appended or rewritten.

use crate::coffee::{CoffeeFields, CoffeeRecord};
use crate::storage::CoffeeRepository;
use crate::ui::prompt::Prompter;
use crate::ui::{coffee_table, CoffeeForm, Icons};
use crate::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Updated,
    /// The store had no record with this id; nothing changed
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCommand {
    Create,
    Edit(i64),
    Refresh,
    Help,
    Quit,
}

impl WindowCommand {
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let command = parts.next()?.to_lowercase();
        let arg = parts.next();
        if parts.next().is_some() {
            return None;
        }

        match (command.as_str(), arg) {
            ("c" | "create", None) => Some(WindowCommand::Create),
            ("e" | "edit", Some(id)) => id.trim_start_matches('#').parse().ok().map(WindowCommand::Edit),
            ("r" | "refresh", None) => Some(WindowCommand::Refresh),
            ("h" | "help" | "?", None) => Some(WindowCommand::Help),
            ("q" | "quit" | "exit", None) => Some(WindowCommand::Quit),
            _ => None,
        }
    }
}

const HELP: &str = "commands: c | create, e <id> | edit <id>, r | refresh, h | help, q | quit";

pub struct InventoryWindow<'a> {
    store: &'a dyn CoffeeRepository,
    rows: Vec<CoffeeRecord>,
}

impl<'a> InventoryWindow<'a> {
    /// Open the window and fill the grid from the store
    pub fn open(store: &'a dyn CoffeeRepository) -> Result<Self> {
        let mut window = Self { store, rows: Vec::new() };
        window.fill_table()?;
        Ok(window)
    }

    pub fn rows(&self) -> &[CoffeeRecord] {
        &self.rows
    }

    pub fn row(&self, id: i64) -> Option<&CoffeeRecord> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Re-read every record from the store
    pub fn fill_table(&mut self) -> Result<()> {
        self.rows = self.store.list_all()?;
        Ok(())
    }

    /// Create a record and append it as the last row
    pub fn create(&mut self, fields: CoffeeFields) -> Result<&CoffeeRecord> {
        let id = self.store.create(&fields)?;
        self.rows.push(CoffeeRecord::from_fields(id, fields));
        Ok(&self.rows[self.rows.len() - 1])
    }

    /// Update a record and refresh its row
    pub fn edit(&mut self, id: i64, fields: CoffeeFields) -> Result<EditOutcome> {
        if !self.store.update(id, &fields)? {
            return Ok(EditOutcome::NotFound);
        }

        match self.rows.iter_mut().find(|r| r.id == id) {
            Some(row) => row.apply(fields),
            None => self.rows.push(CoffeeRecord::from_fields(id, fields)),
        }
        Ok(EditOutcome::Updated)
    }

    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return "No coffee records yet.".to_string();
        }
        coffee_table(&self.rows)
    }

    /// Interactive loop. Returns when the user quits or the input ends.
    ///
    /// Commands and form answers come from `prompter`; the grid and status
    /// lines go to `output`. Storage failures inside an action are reported
    /// and the loop goes on; only I/O errors end it early.
    pub fn run<W: Write>(&mut self, prompter: &mut dyn Prompter, output: &mut W) -> Result<()> {
        writeln!(output, "{}", self.render())?;
        writeln!(output, "{}", HELP)?;

        loop {
            output.flush()?;
            let Some(line) = prompter.line("> ")? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let Some(command) = WindowCommand::parse(&line) else {
                writeln!(output, "{} Unknown command: {}", Icons::WARN, line.trim())?;
                writeln!(output, "{}", HELP)?;
                continue;
            };

            match command {
                WindowCommand::Quit => break,
                WindowCommand::Help => writeln!(output, "{}", HELP)?,
                WindowCommand::Refresh => match self.fill_table() {
                    Ok(()) => writeln!(output, "{}", self.render())?,
                    Err(e) => report_error(output, &e)?,
                },
                WindowCommand::Create => self.handle_create(prompter, output)?,
                WindowCommand::Edit(id) => self.handle_edit(id, prompter, output)?,
            }
        }
        Ok(())
    }

    /// Current values of a record: the cached row, else a fresh read
    fn current_fields(&self, id: i64) -> Result<Option<CoffeeFields>> {
        if let Some(row) = self.row(id) {
            return Ok(Some(row.fields()));
        }
        Ok(self.store.get(id)?.map(|record| record.fields()))
    }

    fn handle_create<W: Write>(&mut self, prompter: &mut dyn Prompter, output: &mut W) -> Result<()> {
        let Some(fields) = CoffeeForm::create().run(prompter)? else {
            writeln!(output, "Cancelled")?;
            return Ok(());
        };

        match self.create(fields) {
            Ok(record) => {
                let id = record.id;
                writeln!(output, "{} Created record #{}", Icons::NEW, id)?;
                writeln!(output, "{}", self.render())?;
            }
            Err(e) => report_error(output, &e)?,
        }
        Ok(())
    }

    fn handle_edit<W: Write>(&mut self, id: i64, prompter: &mut dyn Prompter, output: &mut W) -> Result<()> {
        let current = match self.current_fields(id) {
            Ok(Some(current)) => current,
            Ok(None) => {
                writeln!(output, "{} No record with id {}", Icons::WARN, id)?;
                return Ok(());
            }
            Err(e) => return report_error(output, &e),
        };
        let Some(fields) = CoffeeForm::edit(id, current).run(prompter)? else {
            writeln!(output, "Cancelled")?;
            return Ok(());
        };

        match self.edit(id, fields) {
            Ok(EditOutcome::Updated) => {
                writeln!(output, "{} Updated record #{}", Icons::MOD, id)?;
                writeln!(output, "{}", self.render())?;
            }
            Ok(EditOutcome::NotFound) => {
                writeln!(output, "{} Record #{} no longer exists; nothing changed", Icons::WARN, id)?;
            }
            Err(e) => report_error(output, &e)?,
        }
        Ok(())
    }
}

fn report_error<W: Write>(output: &mut W, error: &crate::Error) -> Result<()> {
    tracing::debug!("Window action failed: {}", error);
    writeln!(output, "{} {}", Icons::CROSS, error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coffee::CoffeeType;
    use crate::storage::SqliteStore;
    use crate::ui::prompt::LinePrompter;
    use crate::Error;
    use std::io::Cursor;

    /// Repository whose writes always fail
    struct ReadOnlyStore {
        records: Vec<CoffeeRecord>,
    }

    impl CoffeeRepository for ReadOnlyStore {
        fn list_all(&self) -> Result<Vec<CoffeeRecord>> {
            Ok(self.records.clone())
        }

        fn create(&self, _fields: &CoffeeFields) -> Result<i64> {
            Err(Error::Storage(rusqlite::Error::InvalidQuery))
        }

        fn update(&self, _id: i64, _fields: &CoffeeFields) -> Result<bool> {
            Err(Error::Storage(rusqlite::Error::InvalidQuery))
        }
    }

    fn medium_nutty() -> CoffeeFields {
        CoffeeFields::new("medium", "nutty", 12.5, 250.0, CoffeeType::Beans)
    }

    fn run_window(window: &mut InventoryWindow<'_>, answers: &str) -> String {
        let mut prompter = LinePrompter::new(Cursor::new(answers.as_bytes().to_vec()), std::io::sink());
        let mut output = Vec::new();
        window.run(&mut prompter, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_open_fills_rows() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.create(&medium_nutty()).unwrap();
        store.create(&medium_nutty()).unwrap();

        let window = InventoryWindow::open(&store).unwrap();
        assert_eq!(window.rows().len(), 2);
    }

    #[test]
    fn test_create_appends_row() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut window = InventoryWindow::open(&store).unwrap();

        let id = window.create(medium_nutty()).unwrap().id;

        assert_eq!(window.rows(), &[CoffeeRecord::from_fields(id, medium_nutty())]);
        assert_eq!(store.list_all().unwrap(), window.rows());
    }

    #[test]
    fn test_edit_refreshes_single_row() {
        let store = SqliteStore::open_in_memory().unwrap();
        let first = store.create(&medium_nutty()).unwrap();
        let second = store.create(&medium_nutty()).unwrap();
        let mut window = InventoryWindow::open(&store).unwrap();

        let darker = CoffeeFields::new("dark", "nutty", 13.0, 250.0, CoffeeType::Beans);
        assert_eq!(window.edit(first, darker.clone()).unwrap(), EditOutcome::Updated);

        assert_eq!(window.row(first).unwrap().fields(), darker);
        assert_eq!(window.row(second).unwrap().fields(), medium_nutty());
        assert_eq!(store.get(first).unwrap().unwrap().fields(), darker);
    }

    #[test]
    fn test_edit_unknown_id_reports_not_found() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut window = InventoryWindow::open(&store).unwrap();

        assert_eq!(window.edit(9, medium_nutty()).unwrap(), EditOutcome::NotFound);
        assert!(window.rows().is_empty());
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(WindowCommand::parse("c"), Some(WindowCommand::Create));
        assert_eq!(WindowCommand::parse("edit 3"), Some(WindowCommand::Edit(3)));
        assert_eq!(WindowCommand::parse("e #12"), Some(WindowCommand::Edit(12)));
        assert_eq!(WindowCommand::parse("Q"), Some(WindowCommand::Quit));
        assert_eq!(WindowCommand::parse("edit"), None);
        assert_eq!(WindowCommand::parse("edit x"), None);
        assert_eq!(WindowCommand::parse("create 1"), None);
        assert_eq!(WindowCommand::parse("delete 1"), None);
    }

    #[test]
    fn test_interactive_create_and_edit() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut window = InventoryWindow::open(&store).unwrap();

        let out = run_window(
            &mut window,
            "c\nmedium\nnutty\n12.50\n250\nbeans\ne 1\ndark\n\n13\n\n\nq\n",
        );

        assert!(out.contains("No coffee records yet."));
        assert!(out.contains("Created record #1"));
        assert!(out.contains("Updated record #1"));
        assert_eq!(
            store.list_all().unwrap(),
            vec![CoffeeRecord::from_fields(
                1,
                CoffeeFields::new("dark", "nutty", 13.0, 250.0, CoffeeType::Beans)
            )]
        );
    }

    #[test]
    fn test_interactive_edit_of_missing_row() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut window = InventoryWindow::open(&store).unwrap();

        let out = run_window(&mut window, "e 5\nbogus\nq\n");

        assert!(out.contains("No record with id 5"));
        assert!(out.contains("Unknown command: bogus"));
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_edit_reads_record_missing_from_rows() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut window = InventoryWindow::open(&store).unwrap();
        let id = store.create(&medium_nutty()).unwrap();
        assert!(window.row(id).is_none());

        let out = run_window(&mut window, "e 1\n\nchocolate\n\n\n\nq\n");

        assert!(!out.contains("No record with id"));
        assert!(out.contains("Updated record #1"));
        let chocolate = CoffeeFields::new("medium", "chocolate", 12.5, 250.0, CoffeeType::Beans);
        assert_eq!(store.get(id).unwrap().unwrap().fields(), chocolate);
        assert_eq!(window.row(id).unwrap().fields(), chocolate);
    }

    #[test]
    fn test_refresh_picks_up_external_writes() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut window = InventoryWindow::open(&store).unwrap();
        store.create(&medium_nutty()).unwrap();
        assert!(window.rows().is_empty());

        run_window(&mut window, "r\nq\n");
        assert_eq!(window.rows().len(), 1);
    }

    #[test]
    fn test_storage_error_keeps_window_running() {
        let store = ReadOnlyStore {
            records: vec![CoffeeRecord::from_fields(1, medium_nutty())],
        };
        let mut window = InventoryWindow::open(&store).unwrap();

        let out = run_window(&mut window, "c\nlight\nfruity\n9\n100\n2\ne 1\n\n\n\n\n\nh\nq\n");

        assert_eq!(out.matches("Storage error").count(), 2);
        assert!(out.contains("commands:"));
        assert_eq!(window.rows(), store.records.as_slice());
        assert!(store.get(1).unwrap().is_some());
        assert!(store.get(2).unwrap().is_none());
    }

    #[test]
    fn test_cancelled_form_changes_nothing() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut window = InventoryWindow::open(&store).unwrap();

        let out = run_window(&mut window, "c\nmedium\n");

        assert!(out.contains("Cancelled"));
        assert!(window.rows().is_empty());
        assert!(store.list_all().unwrap().is_empty());
    }
}
