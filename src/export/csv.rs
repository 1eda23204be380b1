//! CSV Export functionality
//!
//! One row per trip with both cost breakdowns spelled out per category.

use chrono::{DateTime, SecondsFormat, Utc};
use std::io::Write;

use crate::error::{VoyageError, VoyageResult};
use crate::models::{CostCategory, CostVariant, Trip};

/// Number of columns in every row
pub const CSV_COLUMNS: usize = 23;

/// Header row labels, in column order
pub fn csv_headers() -> Vec<String> {
    let mut headers: Vec<String> = ["ID", "Name", "Type", "Date", "Status", "Location"]
        .iter()
        .map(|h| h.to_string())
        .collect();

    for variant in [CostVariant::Forecast, CostVariant::Actual] {
        for category in CostCategory::ALL {
            headers.push(format!("{} {}", variant, category.column_name()));
        }
        headers.push(format!("{} Total", variant));
    }

    headers.extend(["Notes", "Created At", "Updated At"].iter().map(|h| h.to_string()));
    headers
}

/// Export all trips to CSV
///
/// Name and notes are always quoted. Actual cost cells are left empty for
/// trips without recorded spend, while the actual total reads 0.
pub fn export_trips_csv<W: Write>(trips: &[Trip], writer: &mut W) -> VoyageResult<()> {
    writeln!(writer, "{}", csv_headers().join(","))
        .map_err(|e| VoyageError::Export(e.to_string()))?;

    for trip in trips {
        writeln!(writer, "{}", trip_row(trip).join(","))
            .map_err(|e| VoyageError::Export(e.to_string()))?;
    }

    Ok(())
}

fn trip_row(trip: &Trip) -> Vec<String> {
    let mut row = Vec::with_capacity(CSV_COLUMNS);

    row.push(escape_csv(trip.id.as_str()));
    row.push(quote(&trip.name));
    row.push(trip.trip_type.as_str().to_string());
    row.push(trip.date.to_string());
    row.push(trip.status.as_str().to_string());
    row.push(
        trip.location
            .as_ref()
            .map(|l| escape_csv(&l.name))
            .unwrap_or_default(),
    );

    for (_, amount) in trip.costs.forecast.iter() {
        row.push(amount.to_string());
    }
    row.push(trip.total(CostVariant::Forecast).to_string());

    for category in CostCategory::ALL {
        row.push(
            trip.costs
                .actual
                .map(|a| a.get(category).to_string())
                .unwrap_or_default(),
        );
    }
    row.push(trip.total(CostVariant::Actual).to_string());

    row.push(quote(trip.notes.as_deref().unwrap_or("")));
    row.push(timestamp(&trip.created_at));
    row.push(timestamp(&trip.updated_at));

    row
}

fn timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Wrap a field in double quotes, doubling embedded quotes
fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Quote a field only when it needs it
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        quote(s)
    } else {
        s.to_string()
    }
}
