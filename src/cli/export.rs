//! CLI commands for data export
//!
//! Writes exports to a file or, without `--output`, to stdout.

use clap::Subcommand;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{VoyageError, VoyageResult};
use crate::export::{export_json, export_trips_csv};
use crate::storage::{KeyValueStore, TripStore};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// JSON document with trips and settings
    Json,
    /// CSV table of trips
    Csv,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all trips as JSON (with settings)
    Json {
        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export all trips as CSV
    Csv {
        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command<S: KeyValueStore>(
    store: &TripStore<S>,
    cmd: ExportCommands,
) -> VoyageResult<()> {
    match cmd {
        ExportCommands::Json { output } => write_export(store, ExportFormat::Json, output),
        ExportCommands::Csv { output } => write_export(store, ExportFormat::Csv, output),
    }
}

fn write_export<S: KeyValueStore>(
    store: &TripStore<S>,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> VoyageResult<()> {
    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                VoyageError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_format(store, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| VoyageError::Export(e.to_string()))?;

            // Keep stdout clean for piping; the confirmation goes to stderr
            eprintln!(
                "Exported {} trips to: {}",
                store.trips().len(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_format(store, format, &mut writer)?;
            if format == ExportFormat::Json {
                writeln!(writer).map_err(|e| VoyageError::Export(e.to_string()))?;
            }
        }
    }

    Ok(())
}

fn write_format<S: KeyValueStore, W: Write>(
    store: &TripStore<S>,
    format: ExportFormat,
    writer: &mut W,
) -> VoyageResult<()> {
    match format {
        ExportFormat::Json => export_json(store.trips(), store.settings(), writer),
        ExportFormat::Csv => export_trips_csv(store.trips(), writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::import_from_json;
    use crate::models::{Trip, TripType};
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_export_to_files() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = TripStore::open(MemoryStore::new());
        store
            .add_trip(Trip::new(
                "Zoo",
                TripType::Day,
                NaiveDate::from_ymd_opt(2025, 5, 5).unwrap(),
            ))
            .unwrap();

        let json_path = temp_dir.path().join("trips.json");
        let csv_path = temp_dir.path().join("trips.csv");
        handle_export_command(
            &store,
            ExportCommands::Json {
                output: Some(json_path.clone()),
            },
        )
        .unwrap();
        handle_export_command(
            &store,
            ExportCommands::Csv {
                output: Some(csv_path.clone()),
            },
        )
        .unwrap();

        let imported = import_from_json(&std::fs::read_to_string(json_path).unwrap()).unwrap();
        assert_eq!(imported.trips, store.trips());

        let csv = std::fs::read_to_string(csv_path).unwrap();
        assert_eq!(csv, store.export_to_csv().unwrap());
    }
}
