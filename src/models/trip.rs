//! Trip model
//!
//! A planned or completed journey with its forecast budget and, once the user
//! starts recording spend, its actual costs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::costs::{CostBreakdown, CostVariant};
use super::ids::TripId;
use crate::error::{VoyageError, VoyageResult};

/// Kind of trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    #[default]
    Day,
    Road,
    Overnight,
}

impl TripType {
    /// All trip types in display order
    pub const ALL: [TripType; 3] = [Self::Day, Self::Road, Self::Overnight];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Day => "Day Trip",
            Self::Road => "Road Trip",
            Self::Overnight => "Overnight",
        }
    }

    /// Name of the icon shown next to the trip
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Day => "sun",
            Self::Road => "car",
            Self::Overnight => "moon",
        }
    }

    /// Wire name ("day", "road", "overnight")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Road => "road",
            Self::Overnight => "overnight",
        }
    }

    /// Parse trip type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "day" | "day_trip" | "daytrip" => Some(Self::Day),
            "road" | "road_trip" | "roadtrip" => Some(Self::Road),
            "overnight" | "night" => Some(Self::Overnight),
            _ => None,
        }
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a trip is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    /// Still being planned
    #[default]
    Forecast,
    /// Under way
    Active,
    /// Finished
    Completed,
}

impl TripStatus {
    /// Wire name ("forecast", "active", "completed")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forecast => "forecast",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Parse status from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "forecast" | "planned" => Some(Self::Forecast),
            "active" => Some(Self::Active),
            "completed" | "done" => Some(Self::Completed),
            _ => None,
        }
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forecast => write!(f, "Forecast"),
            Self::Active => write!(f, "Active"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// Destination of a trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl Location {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            name: name.into(),
            address: None,
            thumbnail_url: None,
        }
    }
}

/// Forecast costs plus, once recorded, actual costs
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TripCosts {
    pub forecast: CostBreakdown,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<CostBreakdown>,
}

/// A trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// Unique identifier
    pub id: TripId,

    /// Display name
    pub name: String,

    /// Kind of trip
    #[serde(rename = "type")]
    pub trip_type: TripType,

    /// Travel date
    pub date: NaiveDate,

    /// Destination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    /// Forecast and actual costs
    pub costs: TripCosts,

    /// Lifecycle status
    pub status: TripStatus,

    /// Free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// When the trip was created
    pub created_at: DateTime<Utc>,

    /// When the trip was last modified
    pub updated_at: DateTime<Utc>,
}

impl Trip {
    /// Create a new trip with a fresh id and zeroed forecast costs
    pub fn new(name: impl Into<String>, trip_type: TripType, date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: TripId::new(),
            name: name.into(),
            trip_type,
            date,
            location: None,
            costs: TripCosts::default(),
            status: TripStatus::Forecast,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sum of the requested breakdown
    ///
    /// An unrecorded actual breakdown totals 0; it never falls back to the
    /// forecast.
    pub fn total(&self, variant: CostVariant) -> f64 {
        match variant {
            CostVariant::Forecast => self.costs.forecast.total(),
            CostVariant::Actual => self.costs.actual.map(|a| a.total()).unwrap_or(0.0),
        }
    }

    /// Whether real spend has been recorded
    pub fn has_actual(&self) -> bool {
        self.costs.actual.is_some()
    }

    /// Merge a patch into this trip and bump `updated_at`
    ///
    /// `updated_at` never moves before `created_at`, even when the clock lags
    /// behind a timestamp imported from elsewhere.
    pub fn apply(&mut self, patch: TripPatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(trip_type) = patch.trip_type {
            self.trip_type = trip_type;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(forecast) = patch.forecast {
            self.costs.forecast = forecast;
        }
        if let Some(actual) = patch.actual {
            self.costs.actual = actual;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        self.updated_at = now.max(self.created_at);
    }

    /// Validate the trip before it is handed to the store
    pub fn validate(&self) -> VoyageResult<()> {
        validate_name(&self.name)?;

        self.costs.forecast.validate()?;
        if let Some(actual) = &self.costs.actual {
            actual.validate()?;
        }

        Ok(())
    }

    /// Whether every number in the trip can be written as JSON
    pub fn is_finite(&self) -> bool {
        self.costs.forecast.is_finite()
            && self.costs.actual.map_or(true, |a| a.is_finite())
            && self
                .location
                .as_ref()
                .map_or(true, |l| l.lat.is_finite() && l.lng.is_finite())
    }
}

/// Longest allowed trip name, in characters
pub const MAX_NAME_LEN: usize = 100;

fn validate_name(name: &str) -> VoyageResult<()> {
    if name.trim().is_empty() {
        return Err(VoyageError::Validation("Trip name cannot be empty".into()));
    }

    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(VoyageError::Validation(format!(
            "Trip name too long ({} chars, max {})",
            len, MAX_NAME_LEN
        )));
    }

    Ok(())
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.trip_type, self.date)
    }
}

/// Partial update for a trip
///
/// `None` leaves a field alone. For optional trip fields the inner option
/// distinguishes "set" from "clear". The id and creation time cannot be patched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripPatch {
    pub name: Option<String>,
    pub trip_type: Option<TripType>,
    pub date: Option<NaiveDate>,
    pub location: Option<Option<Location>>,
    pub forecast: Option<CostBreakdown>,
    pub actual: Option<Option<CostBreakdown>>,
    pub status: Option<TripStatus>,
    pub notes: Option<Option<String>>,
}

impl TripPatch {
    /// Validate the fields this patch would set
    pub fn validate(&self) -> VoyageResult<()> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(forecast) = &self.forecast {
            forecast.validate()?;
        }
        if let Some(Some(actual)) = &self.actual {
            actual.validate()?;
        }
        Ok(())
    }
}
