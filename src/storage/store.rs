//! The trip store
//!
//! Owns the in-memory trip collection and settings, mirrors both to a
//! [`KeyValueStore`], and derives totals on demand.

use chrono::Utc;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::settings::{Settings, SettingsPatch};
use crate::error::{VoyageError, VoyageResult};
use crate::export;
use crate::models::{CostVariant, Trip, TripId, TripPatch, TripStatus};

use super::backend::KeyValueStore;
use super::{SETTINGS_KEY, TRIPS_KEY};

/// Highest value [`TripStore::budget_progress`] reports
pub const PROGRESS_CAP: f64 = 150.0;

/// The two durable records the store keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Record {
    Trips,
    Settings,
}

impl Record {
    fn key(self) -> &'static str {
        match self {
            Self::Trips => TRIPS_KEY,
            Self::Settings => SETTINGS_KEY,
        }
    }
}

/// Trips and settings, persisted through a key-value backend
pub struct TripStore<S: KeyValueStore> {
    backend: S,
    trips: Vec<Trip>,
    settings: Settings,
    loaded: bool,
}

impl<S: KeyValueStore> TripStore<S> {
    /// Create an empty, unloaded store
    ///
    /// Mutations before [`load`](Self::load) stay in memory and are never
    /// written, so they cannot overwrite records that were not read yet.
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            trips: Vec::new(),
            settings: Settings::default(),
            loaded: false,
        }
    }

    /// Create a store and load it
    pub fn open(backend: S) -> Self {
        let mut store = Self::new(backend);
        store.load();
        store
    }

    /// Read both records from the backend
    ///
    /// Each record is read on its own. A missing, unreadable or malformed
    /// record is replaced by its default; this never fails.
    pub fn load(&mut self) {
        self.trips = load_record(&self.backend, TRIPS_KEY);
        self.settings = load_record(&self.backend, SETTINGS_KEY);
        self.loaded = true;
        debug!(trips = self.trips.len(), "store loaded");
    }

    /// Whether the initial load has completed
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// All trips in display order
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Current settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The storage backend
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Add a trip at the front of the collection
    ///
    /// Ids are not checked for uniqueness.
    pub fn add_trip(&mut self, trip: Trip) -> VoyageResult<()> {
        ensure_storable(&trip)?;
        self.trips.insert(0, trip);
        self.commit(Record::Trips)
    }

    /// Merge `patch` into the trip with `id` and bump its `updated_at`
    ///
    /// Returns `Ok(false)` without touching storage when no trip has that id.
    /// A patch that would leave non-finite numbers in the trip is rejected
    /// and the trip stays as it was.
    pub fn update_trip(&mut self, id: &TripId, patch: TripPatch) -> VoyageResult<bool> {
        let Some(index) = self.trips.iter().position(|t| &t.id == id) else {
            return Ok(false);
        };

        let mut updated = self.trips[index].clone();
        updated.apply(patch, Utc::now());
        ensure_storable(&updated)?;
        self.trips[index] = updated;
        self.commit(Record::Trips)?;
        Ok(true)
    }

    /// Remove the trip with `id`
    ///
    /// Returns `Ok(false)` without touching storage when no trip has that id.
    pub fn delete_trip(&mut self, id: &TripId) -> VoyageResult<bool> {
        let before = self.trips.len();
        self.trips.retain(|t| &t.id != id);
        if self.trips.len() == before {
            return Ok(false);
        }

        self.commit(Record::Trips)?;
        Ok(true)
    }

    /// Get a trip by id
    pub fn get_trip(&self, id: &TripId) -> Option<&Trip> {
        self.trips.iter().find(|t| &t.id == id)
    }

    /// Find a trip by full id or unique id prefix
    ///
    /// A prefix shared by several trips is a validation error naming how many
    /// trips it matched.
    pub fn find_trip(&self, identifier: &str) -> VoyageResult<&Trip> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(VoyageError::trip_not_found(identifier));
        }
        if let Some(trip) = self.trips.iter().find(|t| t.id.as_str() == identifier) {
            return Ok(trip);
        }

        let matches: Vec<&Trip> = self
            .trips
            .iter()
            .filter(|t| t.id.as_str().starts_with(identifier))
            .collect();
        match matches.as_slice() {
            [] => Err(VoyageError::trip_not_found(identifier)),
            [trip] => Ok(*trip),
            _ => Err(VoyageError::Validation(format!(
                "'{}' matches {} trips; use a longer id",
                identifier,
                matches.len()
            ))),
        }
    }

    /// Sum of a trip's forecast or actual breakdown
    ///
    /// Actual totals are 0 for trips without recorded spend.
    pub fn calculate_trip_total(&self, trip: &Trip, variant: CostVariant) -> f64 {
        trip.total(variant)
    }

    /// Sum of [`calculate_trip_total`](Self::calculate_trip_total) over every trip
    pub fn calculate_grand_total(&self, variant: CostVariant) -> f64 {
        self.trips
            .iter()
            .map(|t| self.calculate_trip_total(t, variant))
            .sum()
    }

    /// Combined headline figure
    ///
    /// Each trip contributes its actual total when spend is recorded and its
    /// forecast total otherwise. This is the only total that falls back to
    /// the forecast.
    pub fn headline_total(&self) -> f64 {
        self.trips
            .iter()
            .map(|t| {
                if t.has_actual() {
                    t.total(CostVariant::Actual)
                } else {
                    t.total(CostVariant::Forecast)
                }
            })
            .sum()
    }

    /// Actual spend as a percentage of the forecast, capped at [`PROGRESS_CAP`]
    ///
    /// `None` until actual costs are recorded; 0 when nothing was forecast.
    pub fn budget_progress(&self, trip: &Trip) -> Option<f64> {
        if !trip.has_actual() {
            return None;
        }
        let forecast = trip.total(CostVariant::Forecast);
        if forecast <= 0.0 {
            return Some(0.0);
        }
        let percent = trip.total(CostVariant::Actual) / forecast * 100.0;
        Some(percent.min(PROGRESS_CAP))
    }

    /// Trips not yet completed, in store order
    pub fn upcoming_trips(&self, limit: usize) -> Vec<&Trip> {
        self.trips
            .iter()
            .filter(|t| t.status != TripStatus::Completed)
            .take(limit)
            .collect()
    }

    /// Completed trips, in store order
    pub fn recent_completed(&self, limit: usize) -> Vec<&Trip> {
        self.trips
            .iter()
            .filter(|t| t.status == TripStatus::Completed)
            .take(limit)
            .collect()
    }

    /// All trips by travel date, newest first
    pub fn history(&self) -> Vec<&Trip> {
        let mut trips: Vec<_> = self.trips.iter().collect();
        trips.sort_by(|a, b| b.date.cmp(&a.date));
        trips
    }

    /// Shallow-merge a patch over the settings
    pub fn update_settings(&mut self, patch: SettingsPatch) -> VoyageResult<()> {
        self.settings.apply(patch);
        self.commit(Record::Settings)
    }

    /// Render an amount using the current settings
    pub fn format_currency(&self, amount: f64) -> String {
        self.settings.format_currency(amount)
    }

    /// Pretty-printed JSON document with trips, settings and export metadata
    pub fn export_to_json(&self) -> VoyageResult<String> {
        let mut out = Vec::new();
        export::export_json(&self.trips, &self.settings, &mut out)?;
        String::from_utf8(out).map_err(|e| VoyageError::Export(e.to_string()))
    }

    /// CSV table of all trips
    pub fn export_to_csv(&self) -> VoyageResult<String> {
        let mut out = Vec::new();
        export::export_trips_csv(&self.trips, &mut out)?;
        String::from_utf8(out).map_err(|e| VoyageError::Export(e.to_string()))
    }

    /// Write one record back to the backend, replacing it whole
    ///
    /// All persistence goes through here. Does nothing before the first load.
    /// On error the in-memory state has already changed and stays authoritative.
    fn commit(&mut self, record: Record) -> VoyageResult<()> {
        if !self.loaded {
            return Ok(());
        }

        let json = match record {
            Record::Trips => serde_json::to_string(&self.trips),
            Record::Settings => serde_json::to_string(&self.settings),
        }
        .map_err(|e| VoyageError::Storage(format!("Failed to serialize {}: {}", record.key(), e)))?;

        self.backend.set(record.key(), &json)?;
        debug!(key = record.key(), bytes = json.len(), "record persisted");
        Ok(())
    }
}

/// Trips holding NaN or infinity cannot be written back as JSON
fn ensure_storable(trip: &Trip) -> VoyageResult<()> {
    if trip.is_finite() {
        Ok(())
    } else {
        Err(VoyageError::Storage(format!(
            "Trip '{}' has an amount or coordinate that is not a finite number",
            trip.id
        )))
    }
}

fn load_record<S, T>(backend: &S, key: &str) -> T
where
    S: KeyValueStore,
    T: DeserializeOwned + Default,
{
    match backend.get(key) {
        Ok(None) => T::default(),
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(key, error = %e, "malformed record, using defaults");
            T::default()
        }),
        Err(e) => {
            warn!(key, error = %e, "unreadable record, using defaults");
            T::default()
        }
    }
}
