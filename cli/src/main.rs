use armory_cli::commands;
use armory_cli::readline;
use armory_core::config::Settings;
use armory_core::loader::load_roster;
use armory_core::view::DashboardView;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let settings = Settings::load();
    let data_path = args.data.unwrap_or_else(|| settings.data_path.clone());

    let records = load_roster(&data_path).map_err(|e| e.to_string())?;
    let mut view = DashboardView::new(records);

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &mut view, &settings) {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "Guild roster dashboard")]
struct Args {
    /// Roster JSON file (overrides the configured path)
    #[arg(short, long)]
    data: Option<PathBuf>,
}

#[derive(Parser)]
#[command(version, about = "cli")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the rank-sorted, realm-filtered character table
    Table,
    /// Show the class distribution for the current selection
    Classes,
    /// Show the realm population chart (whole roster)
    Realms,
    /// Show the realm with the highest average level
    Top,
    /// Select a realm, or "all" to clear the filter
    Select { realm: String },
    /// List selectable realm names
    Options,
    Config,
    Exit,
}

fn respond(line: &str, view: &mut DashboardView, settings: &Settings) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "armory".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Table) => commands::show_table(view)?,
        Some(Commands::Classes) => commands::show_classes(view, settings)?,
        Some(Commands::Realms) => commands::show_realms(view, settings)?,
        Some(Commands::Top) => commands::show_top(view, settings)?,
        Some(Commands::Select { realm }) => commands::select_realm(view, realm)?,
        Some(Commands::Options) => commands::show_options(view)?,
        Some(Commands::Config) => commands::show_settings(settings)?,
        Some(Commands::Exit) => return Ok(true),
        None => {}
    }
    Ok(false)
}
