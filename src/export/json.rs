//! JSON Export functionality
//!
//! Exports every trip plus the settings as one versioned JSON document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::config::settings::Settings;
use crate::error::{VoyageError, VoyageResult};
use crate::models::Trip;

/// Current export format version
pub const EXPORT_VERSION: &str = "1.0";

/// Full data export
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripExport {
    /// All trips, in store order
    pub trips: Vec<Trip>,

    /// Settings at export time
    pub settings: Settings,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Format version for compatibility checking
    pub version: String,
}

impl TripExport {
    /// Snapshot trips and settings
    pub fn new(trips: &[Trip], settings: &Settings) -> Self {
        Self {
            trips: trips.to_vec(),
            settings: settings.clone(),
            exported_at: Utc::now(),
            version: EXPORT_VERSION.to_string(),
        }
    }

    /// Check the document can be read by this version
    pub fn validate(&self) -> Result<(), String> {
        if self.version != EXPORT_VERSION {
            return Err(format!(
                "Export version mismatch: expected {}, got {}",
                EXPORT_VERSION, self.version
            ));
        }
        Ok(())
    }
}

/// Write trips and settings as a pretty-printed JSON document
pub fn export_json<W: Write>(
    trips: &[Trip],
    settings: &Settings,
    writer: &mut W,
) -> VoyageResult<()> {
    let export = TripExport::new(trips, settings);
    serde_json::to_writer_pretty(writer, &export).map_err(|e| VoyageError::Export(e.to_string()))
}

/// Parse a JSON export back
pub fn import_from_json(json_str: &str) -> VoyageResult<TripExport> {
    let export: TripExport =
        serde_json::from_str(json_str).map_err(|e| VoyageError::Import(e.to_string()))?;

    export.validate().map_err(VoyageError::Import)?;

    Ok(export)
}
