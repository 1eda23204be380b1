//! Display formatting for terminal output
//!
//! Provides utilities for formatting trips, totals and settings for the
//! terminal.

pub mod trip;

pub use trip::{format_settings, format_summary, format_trip_details, format_trip_list};
