//! Coffee inventory CLI - table view and record form over a local SQLite file

mod commands;

use clap::{Parser, Subcommand};
use coffee_inventory::config;
use coffee_inventory::output::{emit_error, emit_success, OutputMode};
use coffee_inventory::ui;
use coffee_inventory::SqliteStore;
use commands::FieldArgs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "coffee-inventory")]
#[command(version)]
#[command(about = "Coffee shop inventory - list, create and edit coffee records")]
#[command(long_about = r#"
Keeps the coffee shop's product list in a local SQLite file.

Without a subcommand the interactive inventory window opens: the record
table with create and edit actions.

Example usage:
  coffee-inventory
  coffee-inventory list
  coffee-inventory create --roasting medium --flavor nutty --price 12.50 --size 250 --type beans
  coffee-inventory edit 1 --roasting dark --price 13
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Path to the config file
    #[arg(short, long, global = true, default_value = "coffee.toml")]
    config: PathBuf,

    /// Path to the database file (overrides the config)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive inventory window
    Window,

    /// Show every coffee record
    List,

    /// Add a coffee record (opens the form unless every field is given)
    Create {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Change a coffee record (opens the form when no field is given)
    Edit {
        /// Record ID
        id: i64,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Write the config file and create the database
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Print the version
    Version,
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Window => "window",
            Commands::List => "list",
            Commands::Create { .. } => "create",
            Commands::Edit { .. } => "edit",
            Commands::Init { .. } => "init",
            Commands::Version => "version",
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so tables and JSON on stdout stay clean
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let output_mode = OutputMode::from_flag(cli.json);
    let command = cli.command.as_ref().map(Commands::name).unwrap_or("window");

    if let Err(err) = run(&cli, output_mode) {
        let code = err
            .downcast_ref::<coffee_inventory::Error>()
            .map(coffee_inventory::Error::code)
            .unwrap_or("ERROR");

        if output_mode.is_human() {
            ui::error(&format!("{:#}", err));
        } else if let Err(emit_err) = emit_error(output_mode, command, code, format!("{:#}", err)) {
            tracing::error!("Failed to write error output: {}", emit_err);
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli, output_mode: OutputMode) -> anyhow::Result<()> {
    let loaded = config::load_config(Some(cli.config.as_path()))?;
    let database = config::resolve_database_path(cli.database.as_deref(), loaded.as_ref());

    match &cli.command {
        Some(Commands::Version) => commands::run_version(output_mode),

        Some(Commands::Init { force }) => {
            commands::run_init(&cli.config, &database, *force, output_mode)
        }

        Some(Commands::List) => commands::run_list(&open_store(&database)?, output_mode),

        Some(Commands::Create { fields }) => {
            commands::run_create(&open_store(&database)?, fields, output_mode)
        }

        Some(Commands::Edit { id, fields }) => {
            commands::run_edit(&open_store(&database)?, *id, fields, output_mode)
        }

        Some(Commands::Window) | None => {
            if !output_mode.is_human() {
                anyhow::bail!("the inventory window is interactive; use `list --json` instead");
            }
            commands::run_window(&open_store(&database)?)
        }
    }
}

/// Open the one connection used for the rest of the process
fn open_store(database: &Path) -> anyhow::Result<SqliteStore> {
    tracing::debug!("Using database {:?}", database);
    config::ensure_db_dir(database)?;
    Ok(SqliteStore::open(database)?)
}
