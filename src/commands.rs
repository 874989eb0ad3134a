use crate::{OutputMode, emit_success};
use clap::Args;
use coffee_inventory::config::{self, CoffeeConfig};
use coffee_inventory::ui::{self, parse_finite, CoffeeForm, InventoryWindow, Icons};
use coffee_inventory::{CoffeeFields, CoffeeRecord, CoffeeRepository, CoffeeType, SqliteStore};
use owo_colors::OwoColorize;
use std::path::Path;

/// Field values given on the command line
#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    /// Roasting degree
    #[arg(long)]
    pub roasting: Option<String>,

    /// Flavor description
    #[arg(long)]
    pub flavor: Option<String>,

    /// Price
    #[arg(long, value_parser = parse_finite)]
    pub price: Option<f64>,

    /// Package volume
    #[arg(long, visible_alias = "volume", value_parser = parse_finite)]
    pub size: Option<f64>,

    /// beans or ground
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<CoffeeType>,
}

impl FieldArgs {
    pub fn is_empty(&self) -> bool {
        self.roasting.is_none()
            && self.flavor.is_none()
            && self.price.is_none()
            && self.size.is_none()
            && self.kind.is_none()
    }

    /// All five values, if every flag was given
    pub fn complete(&self) -> Option<CoffeeFields> {
        Some(CoffeeFields {
            roasting: self.roasting.clone()?,
            flavor: self.flavor.clone()?,
            price: self.price?,
            size: self.size?,
            kind: self.kind?,
        })
    }

    /// Given flags replace the matching values of `base`
    pub fn overlay(&self, base: CoffeeFields) -> CoffeeFields {
        CoffeeFields {
            roasting: self.roasting.clone().unwrap_or(base.roasting),
            flavor: self.flavor.clone().unwrap_or(base.flavor),
            price: self.price.unwrap_or(base.price),
            size: self.size.unwrap_or(base.size),
            kind: self.kind.unwrap_or(base.kind),
        }
    }
}

fn run_form(form: CoffeeForm) -> anyhow::Result<Option<CoffeeFields>> {
    let mut prompter = ui::stdin_prompter();
    Ok(form.run(prompter.as_mut())?)
}

pub fn run_list(store: &dyn CoffeeRepository, output_mode: OutputMode) -> anyhow::Result<()> {
    let records = store.list_all()?;

    if output_mode.is_human() {
        if records.is_empty() {
            println!("{}", ui::dim("No coffee records yet."));
        } else {
            println!("{}", ui::coffee_table(&records));
        }
    } else {
        emit_success(output_mode, "list", &records)?;
    }
    Ok(())
}

pub fn run_create(store: &dyn CoffeeRepository, args: &FieldArgs, output_mode: OutputMode) -> anyhow::Result<()> {
    let fields = match args.complete() {
        Some(fields) => fields,
        None if output_mode.is_human() => {
            let form = if args.is_empty() {
                CoffeeForm::create()
            } else {
                CoffeeForm::prefilled(args.overlay(CoffeeFields::default()))
            };
            match run_form(form)? {
                Some(fields) => fields,
                None => {
                    ui::warn("Cancelled, nothing created");
                    return Ok(());
                }
            }
        }
        None => anyhow::bail!(
            "create needs --roasting, --flavor, --price, --size and --type when --json is set"
        ),
    };

    let id = store.create(&fields)?;
    let record = CoffeeRecord::from_fields(id, fields);

    if output_mode.is_human() {
        ui::record_created(&record);
    } else {
        emit_success(output_mode, "create", &record)?;
    }
    Ok(())
}

pub fn run_edit(store: &dyn CoffeeRepository, id: i64, args: &FieldArgs, output_mode: OutputMode) -> anyhow::Result<()> {
    let Some(current) = store.get(id)? else {
        return report_missing(id, output_mode);
    };

    let fields = if !args.is_empty() {
        args.overlay(current.fields())
    } else if output_mode.is_human() {
        match run_form(CoffeeForm::edit(id, current.fields()))? {
            Some(fields) => fields,
            None => {
                ui::warn("Cancelled, nothing changed");
                return Ok(());
            }
        }
    } else {
        anyhow::bail!("edit needs at least one field flag when --json is set");
    };

    if !store.update(id, &fields)? {
        return report_missing(id, output_mode);
    }
    let record = CoffeeRecord::from_fields(id, fields);

    if output_mode.is_human() {
        ui::record_updated(&record);
    } else {
        emit_success(output_mode, "edit", serde_json::json!({ "updated": true, "record": record }))?;
    }
    Ok(())
}

fn report_missing(id: i64, output_mode: OutputMode) -> anyhow::Result<()> {
    if output_mode.is_human() {
        ui::warn(&format!("No coffee record with id {}; nothing changed", id));
    } else {
        emit_success(output_mode, "edit", serde_json::json!({ "updated": false, "id": id }))?;
    }
    Ok(())
}

pub fn run_window(store: &SqliteStore) -> anyhow::Result<()> {
    if let Some(path) = store.path() {
        ui::header(&format!("Coffee inventory ({})", path.display()));
    }

    let mut window = InventoryWindow::open(store)?;
    let mut prompter = ui::stdin_prompter();
    window.run(prompter.as_mut(), &mut std::io::stdout())?;
    Ok(())
}

pub fn run_init(config_path: &Path, database: &Path, force: bool, output_mode: OutputMode) -> anyhow::Result<()> {
    let config = CoffeeConfig {
        database: Some(database.to_string_lossy().to_string()),
    };
    config::ensure_db_dir(database)?;
    let store = SqliteStore::open(database)?;
    let count = store.list_all()?.len();
    // Only point the config at a database that opened
    config::write_config(config_path, &config, force)?;

    if output_mode.is_human() {
        ui::success(&format!("Wrote {}", config_path.display()));
        ui::info(
            &format!("{} Database", Icons::DATABASE),
            &format!("{} ({} records)", database.display(), count),
        );
    } else {
        let data = serde_json::json!({
            "config": config_path.display().to_string(),
            "database": database.display().to_string(),
            "records": count,
        });
        emit_success(output_mode, "init", data)?;
    }
    Ok(())
}

pub fn run_version(output_mode: OutputMode) -> anyhow::Result<()> {
    if output_mode.is_human() {
        ui::header(&format!(
            "{} {}",
            "coffee-inventory".bold(),
            env!("CARGO_PKG_VERSION")
        ));
    } else {
        let data = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
        });
        emit_success(output_mode, "version", data)?;
    }
    Ok(())
}
