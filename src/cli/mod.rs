//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the trip store.

pub mod export;
pub mod settings;
pub mod trip;

pub use export::{handle_export_command, ExportCommands};
pub use settings::{handle_settings_command, print_currencies, SettingsCommands};
pub use trip::{handle_trip_command, TripCommands};
