//! Storage layer for Voyage
//!
//! Durable key-value backends and the trip store that sits on top of them.
//! Each record is a whole JSON document, replaced atomically on every write.

pub mod backend;
pub mod file_io;
pub mod store;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use file_io::{read_text, write_atomic};
pub use store::TripStore;

/// Key of the trip collection record
pub const TRIPS_KEY: &str = "voyage_trips";

/// Key of the settings record
pub const SETTINGS_KEY: &str = "voyage_settings";
