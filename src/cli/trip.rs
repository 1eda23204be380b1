//! Trip CLI commands
//!
//! Implements CLI commands for trip management. This is the edit boundary:
//! names and amounts are validated here before anything reaches the store.

use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};

use crate::display::{format_trip_details, format_trip_list};
use crate::error::{VoyageError, VoyageResult};
use crate::models::{
    CostBreakdown, CostCategory, CostVariant, Location, Trip, TripPatch, TripStatus, TripType,
};
use crate::storage::{KeyValueStore, TripStore};

/// Per-category amounts; categories left out keep their current value
#[derive(Args, Debug, Clone, Default)]
pub struct CostArgs {
    /// Transport amount
    #[arg(long)]
    pub transport: Option<f64>,
    /// Food & drinks amount
    #[arg(long)]
    pub food: Option<f64>,
    /// Accommodation amount
    #[arg(long)]
    pub accommodation: Option<f64>,
    /// Entertainment amount
    #[arg(long)]
    pub entertainment: Option<f64>,
    /// Shopping amount
    #[arg(long)]
    pub shopping: Option<f64>,
    /// Other costs
    #[arg(long)]
    pub other: Option<f64>,
}

impl CostArgs {
    fn amount(&self, category: CostCategory) -> Option<f64> {
        match category {
            CostCategory::Transport => self.transport,
            CostCategory::Food => self.food,
            CostCategory::Accommodation => self.accommodation,
            CostCategory::Entertainment => self.entertainment,
            CostCategory::Shopping => self.shopping,
            CostCategory::Other => self.other,
        }
    }

    /// Whether any category was given
    pub fn is_empty(&self) -> bool {
        CostCategory::ALL.iter().all(|c| self.amount(*c).is_none())
    }

    /// Overlay the given categories onto `base`
    pub fn apply_to(&self, base: CostBreakdown) -> VoyageResult<CostBreakdown> {
        let mut costs = base;
        for category in CostCategory::ALL {
            if let Some(amount) = self.amount(category) {
                costs.set(category, amount);
            }
        }
        costs.validate()?;
        Ok(costs)
    }
}

/// Destination arguments
#[derive(Args, Debug, Clone, Default)]
pub struct LocationArgs {
    /// Destination name
    #[arg(short, long)]
    pub location: Option<String>,
    /// Destination latitude
    #[arg(long, requires = "location", allow_hyphen_values = true)]
    pub lat: Option<f64>,
    /// Destination longitude
    #[arg(long, requires = "location", allow_hyphen_values = true)]
    pub lng: Option<f64>,
    /// Destination address
    #[arg(long, requires = "location")]
    pub address: Option<String>,
}

impl LocationArgs {
    /// Build the destination, taking coordinates not given from `existing`
    fn to_location(&self, existing: Option<&Location>) -> VoyageResult<Option<Location>> {
        let Some(name) = &self.location else {
            return Ok(None);
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(VoyageError::Validation(
                "Location name cannot be empty".into(),
            ));
        }

        let lat = self.lat.or(existing.map(|l| l.lat)).unwrap_or(0.0);
        let lng = self.lng.or(existing.map(|l| l.lng)).unwrap_or(0.0);
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(VoyageError::Validation(format!(
                "Invalid coordinates: {}, {}",
                lat, lng
            )));
        }

        let mut location = Location::new(name, lat, lng);
        location.address = self.address.clone();
        Ok(Some(location))
    }
}

/// Trip subcommands
#[derive(Subcommand, Debug)]
pub enum TripCommands {
    /// Plan a new trip
    Add {
        /// Trip name
        name: String,
        /// Trip type (day, road, overnight); defaults to the configured type
        #[arg(short = 't', long = "type")]
        trip_type: Option<String>,
        /// Trip date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Status (forecast, active, completed)
        #[arg(short, long, default_value = "forecast")]
        status: String,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
        #[command(flatten)]
        location: LocationArgs,
        #[command(flatten)]
        forecast: CostArgs,
    },
    /// List trips in store order
    List,
    /// List trips by date, newest first
    History,
    /// Show trip details
    Show {
        /// Trip ID (or unique prefix)
        trip: String,
    },
    /// Edit a trip and its forecast costs
    Edit {
        /// Trip ID (or unique prefix)
        trip: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New trip type
        #[arg(short = 't', long = "type")]
        trip_type: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New status
        #[arg(short, long)]
        status: Option<String>,
        /// New notes
        #[arg(short, long, conflicts_with = "clear_notes")]
        notes: Option<String>,
        /// Remove the notes
        #[arg(long)]
        clear_notes: bool,
        /// Remove the location
        #[arg(long, conflicts_with = "location")]
        clear_location: bool,
        #[command(flatten)]
        location: LocationArgs,
        #[command(flatten)]
        forecast: CostArgs,
    },
    /// Record actual spend for a trip
    Actual {
        /// Trip ID (or unique prefix)
        trip: String,
        #[command(flatten)]
        costs: CostArgs,
    },
    /// Forget the recorded actual spend
    ClearActual {
        /// Trip ID (or unique prefix)
        trip: String,
    },
    /// Delete a trip
    Delete {
        /// Trip ID (or unique prefix)
        trip: String,
    },
}

/// Handle a trip command
pub fn handle_trip_command<S: KeyValueStore>(
    store: &mut TripStore<S>,
    cmd: TripCommands,
) -> VoyageResult<()> {
    match cmd {
        TripCommands::Add {
            name,
            trip_type,
            date,
            status,
            notes,
            location,
            forecast,
        } => {
            let trip_type = match trip_type {
                Some(t) => parse_trip_type(&t)?,
                None => store.settings().default_trip_type,
            };
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => Local::now().date_naive(),
            };

            let mut trip = Trip::new(name.trim(), trip_type, date);
            trip.status = parse_status(&status)?;
            trip.notes = notes.filter(|n| !n.trim().is_empty());
            trip.location = location.to_location(None)?;
            trip.costs.forecast = forecast.apply_to(CostBreakdown::zero())?;
            trip.validate()?;

            let summary = format!(
                "Created trip: {} ({}) - forecast {}",
                trip.name,
                trip.id,
                store.format_currency(trip.total(CostVariant::Forecast))
            );
            store.add_trip(trip)?;
            println!("{}", summary);
        }

        TripCommands::List => {
            let trips: Vec<_> = store.trips().iter().collect();
            println!("{}", format_trip_list(&trips, store.settings()).trim_end());
        }

        TripCommands::History => {
            println!("{}", format_trip_list(&store.history(), store.settings()).trim_end());
        }

        TripCommands::Show { trip } => {
            let trip = store.find_trip(&trip)?;
            println!("{}", format_trip_details(trip, store).trim_end());
        }

        TripCommands::Edit {
            trip,
            name,
            trip_type,
            date,
            status,
            notes,
            clear_notes,
            clear_location,
            location,
            forecast,
        } => {
            let existing = store.find_trip(&trip)?.clone();

            let mut patch = TripPatch {
                name: name.map(|n| n.trim().to_string()),
                ..TripPatch::default()
            };
            if let Some(t) = trip_type {
                patch.trip_type = Some(parse_trip_type(&t)?);
            }
            if let Some(d) = date {
                patch.date = Some(parse_date(&d)?);
            }
            if let Some(s) = status {
                patch.status = Some(parse_status(&s)?);
            }
            if clear_notes {
                patch.notes = Some(None);
            } else if let Some(n) = notes {
                patch.notes = Some(Some(n));
            }
            if clear_location {
                patch.location = Some(None);
            } else if let Some(loc) = location.to_location(existing.location.as_ref())? {
                patch.location = Some(Some(loc));
            }
            if !forecast.is_empty() {
                patch.forecast = Some(forecast.apply_to(existing.costs.forecast)?);
            }
            patch.validate()?;

            store.update_trip(&existing.id, patch)?;
            println!("Updated trip: {}", existing.id);
        }

        TripCommands::Actual { trip, costs } => {
            let existing = store.find_trip(&trip)?.clone();
            let base = existing.costs.actual.unwrap_or_else(CostBreakdown::zero);
            let actual = costs.apply_to(base)?;

            store.update_trip(
                &existing.id,
                TripPatch {
                    actual: Some(Some(actual)),
                    ..TripPatch::default()
                },
            )?;
            println!(
                "Recorded actual spend for '{}': {}",
                existing.name,
                store.format_currency(actual.total())
            );
        }

        TripCommands::ClearActual { trip } => {
            let existing = store.find_trip(&trip)?.clone();
            store.update_trip(
                &existing.id,
                TripPatch {
                    actual: Some(None),
                    ..TripPatch::default()
                },
            )?;
            println!("Cleared actual spend for '{}'", existing.name);
        }

        TripCommands::Delete { trip } => {
            let existing = store.find_trip(&trip)?.clone();
            store.delete_trip(&existing.id)?;
            println!("Deleted trip: {}", existing.name);
        }
    }

    Ok(())
}

/// Parse a trip type argument
pub fn parse_trip_type(s: &str) -> VoyageResult<TripType> {
    TripType::parse(s).ok_or_else(|| {
        VoyageError::Validation(format!(
            "Invalid trip type: '{}'. Valid types: day, road, overnight",
            s
        ))
    })
}

fn parse_status(s: &str) -> VoyageResult<TripStatus> {
    TripStatus::parse(s).ok_or_else(|| {
        VoyageError::Validation(format!(
            "Invalid status: '{}'. Valid statuses: forecast, active, completed",
            s
        ))
    })
}

fn parse_date(s: &str) -> VoyageResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        VoyageError::Validation(format!("Invalid date: '{}'. Expected YYYY-MM-DD", s))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn add(store: &mut TripStore<MemoryStore>, name: &str, forecast: CostArgs) -> VoyageResult<()> {
        handle_trip_command(
            store,
            TripCommands::Add {
                name: name.to_string(),
                trip_type: None,
                date: Some("2025-10-01".into()),
                status: "forecast".into(),
                notes: None,
                location: LocationArgs::default(),
                forecast,
            },
        )
    }

    #[test]
    fn test_add_validates_name() {
        let mut store = TripStore::open(MemoryStore::new());
        let err = add(&mut store, "   ", CostArgs::default()).unwrap_err();
        assert!(err.is_validation());
        assert!(store.trips().is_empty());
    }

    #[test]
    fn test_add_rejects_negative_amounts() {
        let mut store = TripStore::open(MemoryStore::new());
        let costs = CostArgs {
            food: Some(-3.0),
            ..CostArgs::default()
        };
        assert!(add(&mut store, "Picnic", costs).is_err());
        assert!(store.trips().is_empty());
    }

    #[test]
    fn test_add_uses_default_trip_type() {
        let mut store = TripStore::open(MemoryStore::new());
        store
            .update_settings(crate::config::SettingsPatch {
                default_trip_type: Some(TripType::Overnight),
                ..Default::default()
            })
            .unwrap();

        let costs = CostArgs {
            transport: Some(100.0),
            food: Some(50.0),
            ..CostArgs::default()
        };
        add(&mut store, "Cabin", costs).unwrap();

        let trip = &store.trips()[0];
        assert_eq!(trip.trip_type, TripType::Overnight);
        assert_eq!(trip.total(CostVariant::Forecast), 150.0);
    }

    #[test]
    fn test_actual_starts_from_existing() {
        let mut store = TripStore::open(MemoryStore::new());
        add(&mut store, "Museum", CostArgs::default()).unwrap();
        let id = store.trips()[0].id.to_string();

        for costs in [
            CostArgs {
                food: Some(10.0),
                ..CostArgs::default()
            },
            CostArgs {
                shopping: Some(5.0),
                ..CostArgs::default()
            },
        ] {
            handle_trip_command(
                &mut store,
                TripCommands::Actual {
                    trip: id.clone(),
                    costs,
                },
            )
            .unwrap();
        }

        assert_eq!(store.trips()[0].total(CostVariant::Actual), 15.0);

        handle_trip_command(&mut store, TripCommands::ClearActual { trip: id }).unwrap();
        assert!(!store.trips()[0].has_actual());
    }

    #[test]
    fn test_unknown_trip_is_not_found() {
        let mut store = TripStore::open(MemoryStore::new());
        let err = handle_trip_command(
            &mut store,
            TripCommands::Delete {
                trip: "nope".into(),
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_edit_location_keeps_coordinates() {
        let mut store = TripStore::open(MemoryStore::new());
        handle_trip_command(
            &mut store,
            TripCommands::Add {
                name: "Harbour".into(),
                trip_type: None,
                date: Some("2025-10-01".into()),
                status: "forecast".into(),
                notes: None,
                location: LocationArgs {
                    location: Some("Sydney".into()),
                    lat: Some(-33.8688),
                    lng: Some(151.2093),
                    address: None,
                },
                forecast: CostArgs::default(),
            },
        )
        .unwrap();
        let id = store.trips()[0].id.to_string();

        handle_trip_command(
            &mut store,
            TripCommands::Edit {
                trip: id,
                name: None,
                trip_type: None,
                date: None,
                status: None,
                notes: None,
                clear_notes: false,
                clear_location: false,
                location: LocationArgs {
                    location: Some("Sydney Harbour".into()),
                    ..LocationArgs::default()
                },
                forecast: CostArgs::default(),
            },
        )
        .unwrap();

        let location = store.trips()[0].location.as_ref().unwrap();
        assert_eq!(location.name, "Sydney Harbour");
        assert_eq!(location.lat, -33.8688);
        assert_eq!(location.lng, 151.2093);
    }

    #[test]
    fn test_rejects_bad_coordinates() {
        let args = LocationArgs {
            location: Some("Somewhere".into()),
            lat: Some(f64::NAN),
            ..LocationArgs::default()
        };
        assert!(args.to_location(None).unwrap_err().is_validation());

        let args = LocationArgs {
            location: Some("Somewhere".into()),
            lng: Some(200.0),
            ..LocationArgs::default()
        };
        assert!(args.to_location(None).is_err());
    }

    #[test]
    fn test_edit_rejects_long_name() {
        let mut store = TripStore::open(MemoryStore::new());
        add(&mut store, "Short", CostArgs::default()).unwrap();
        let id = store.trips()[0].id.to_string();

        let err = handle_trip_command(
            &mut store,
            TripCommands::Edit {
                trip: id,
                name: Some("x".repeat(101)),
                trip_type: None,
                date: None,
                status: None,
                notes: None,
                clear_notes: false,
                clear_location: false,
                location: LocationArgs::default(),
                forecast: CostArgs::default(),
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.trips()[0].name, "Short");
    }

    #[test]
    fn test_ambiguous_prefix_is_reported() {
        let mut store = TripStore::open(MemoryStore::new());
        for (name, id) in [("One", "same-1"), ("Two", "same-2")] {
            let mut trip = Trip::new(name, TripType::Day, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
            trip.id = id.into();
            store.add_trip(trip).unwrap();
        }

        let err = handle_trip_command(
            &mut store,
            TripCommands::Show {
                trip: "same".into(),
            },
        )
        .unwrap_err();
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("matches 2 trips"));
    }

    #[test]
    fn test_apply_to_keeps_untouched_categories() {
        let base = CostBreakdown {
            transport: 7.0,
            ..CostBreakdown::zero()
        };
        let args = CostArgs {
            other: Some(3.0),
            ..CostArgs::default()
        };
        let costs = args.apply_to(base).unwrap();
        assert_eq!(costs.transport, 7.0);
        assert_eq!(costs.other, 3.0);
        assert!(!args.is_empty());
        assert!(CostArgs::default().is_empty());
    }

    #[test]
    fn test_parsers() {
        assert!(parse_date("2025-02-30").is_err());
        assert_eq!(
            parse_date("2025-02-28").unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
        assert!(parse_trip_type("boat").unwrap_err().is_validation());
        assert_eq!(parse_status("active").unwrap(), TripStatus::Active);
    }
}
