//! Export module for Voyage
//!
//! Provides data export in two formats:
//! - CSV: one row per trip (spreadsheet-compatible)
//! - JSON: trips and settings as a versioned document

pub mod csv;
pub mod json;

pub use csv::{csv_headers, export_trips_csv, CSV_COLUMNS};
pub use json::{export_json, import_from_json, TripExport, EXPORT_VERSION};
