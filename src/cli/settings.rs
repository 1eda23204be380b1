//! Settings CLI commands

use clap::Subcommand;

use crate::cli::trip::parse_trip_type;
use crate::config::settings::MAX_DECIMAL_PLACES;
use crate::config::SettingsPatch;
use crate::display::format_settings;
use crate::error::{VoyageError, VoyageResult};
use crate::models::Currency;
use crate::storage::{KeyValueStore, TripStore};

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show current settings
    Show,
    /// Change one or more settings
    Set {
        /// Currency code; also sets the symbol for known currencies
        #[arg(short, long)]
        currency: Option<String>,
        /// Currency symbol
        #[arg(short, long)]
        symbol: Option<String>,
        /// Decimal places to render
        #[arg(short, long)]
        decimals: Option<u32>,
        /// Trip type for new trips (day, road, overnight)
        #[arg(short = 't', long)]
        default_type: Option<String>,
    },
}

/// Handle a settings command
pub fn handle_settings_command<S: KeyValueStore>(
    store: &mut TripStore<S>,
    cmd: SettingsCommands,
) -> VoyageResult<()> {
    match cmd {
        SettingsCommands::Show => {
            println!("{}", format_settings(store.settings()).trim_end());
        }
        SettingsCommands::Set {
            currency,
            symbol,
            decimals,
            default_type,
        } => {
            let mut patch = match currency.as_deref().map(str::trim) {
                Some("") => {
                    return Err(VoyageError::Validation("Currency cannot be empty".into()));
                }
                Some(code) => match Currency::find(code) {
                    Some(known) => SettingsPatch::for_currency(known),
                    None => SettingsPatch {
                        currency: Some(code.to_uppercase()),
                        ..SettingsPatch::default()
                    },
                },
                None => SettingsPatch::default(),
            };
            if let Some(symbol) = symbol {
                patch.currency_symbol = Some(symbol);
            }
            if let Some(places) = decimals {
                if places > MAX_DECIMAL_PLACES {
                    return Err(VoyageError::Validation(format!(
                        "Decimal places must be between 0 and {}, got {}",
                        MAX_DECIMAL_PLACES, places
                    )));
                }
                patch.decimal_places = Some(places);
            }
            if let Some(t) = default_type {
                patch.default_trip_type = Some(parse_trip_type(&t)?);
            }

            if patch.is_empty() {
                println!("Nothing to change.");
                return Ok(());
            }

            store.update_settings(patch)?;
            println!("{}", format_settings(store.settings()).trim_end());
        }
    }

    Ok(())
}

/// Print the known-currency table
pub fn print_currencies() {
    println!("{:<5}  {:<6}  Name", "Code", "Symbol");
    for currency in Currency::all() {
        println!("{:<5}  {:<6}  {}", currency.code, currency.symbol, currency.name);
    }
}
