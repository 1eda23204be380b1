//! Core data models for Voyage
//!
//! Trips, their cost breakdowns, and the fixed lookup tables (labels, icons,
//! currencies). No persistence lives here.

pub mod costs;
pub mod currency;
pub mod ids;
pub mod trip;

pub use costs::{CostBreakdown, CostCategory, CostVariant};
pub use currency::{Currency, CURRENCIES};
pub use ids::TripId;
pub use trip::{Location, Trip, TripCosts, TripPatch, TripStatus, TripType};
