use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use voyage::cli::{
    handle_export_command, handle_settings_command, handle_trip_command, print_currencies,
};
use voyage::config::VoyagePaths;
use voyage::display::format_summary;
use voyage::storage::{FileStore, TripStore};

#[derive(Parser)]
#[command(
    name = "voyage",
    version,
    about = "Plan trip budgets and track what you actually spent",
    long_about = "Voyage keeps a list of planned and past trips with a forecast \
                  budget across transport, accommodation, food, activities, \
                  shopping and other costs, and compares it with actual spending."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Trip management commands
    #[command(subcommand, alias = "t")]
    Trip(voyage::cli::TripCommands),

    /// Show totals, upcoming trips and recently completed trips
    Summary,

    /// View or change display settings
    #[command(subcommand)]
    Settings(voyage::cli::SettingsCommands),

    /// List supported currencies
    Currencies,

    /// Export trips to JSON or CSV
    #[command(subcommand)]
    Export(voyage::cli::ExportCommands),

    /// Show data file locations
    Config,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let paths = VoyagePaths::new()?;
    debug!(data_dir = %paths.data_dir().display(), "resolved data directory");

    let mut store = TripStore::open(FileStore::new(paths.clone())?);

    match cli.command {
        Some(Commands::Trip(cmd)) => handle_trip_command(&mut store, cmd)?,
        Some(Commands::Summary) => {
            println!("{}", format_summary(&store).trim_end());
        }
        Some(Commands::Settings(cmd)) => handle_settings_command(&mut store, cmd)?,
        Some(Commands::Currencies) => print_currencies(),
        Some(Commands::Export(cmd)) => handle_export_command(&store, cmd)?,
        Some(Commands::Config) => {
            println!("Voyage Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Trips file:     {}", paths.trips_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Currency: {}", store.settings().currency);
            println!("Trips:    {}", store.trips().len());
        }
        None => {
            println!("Voyage - trip budget planner");
            println!();
            println!("Run 'voyage --help' for usage information.");
            println!("Run 'voyage trip add <NAME>' to plan your first trip.");
        }
    }

    Ok(())
}

/// Log to stderr so command output stays pipeable
fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    let filter_layer =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
