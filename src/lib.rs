//! Voyage - a terminal trip cost planner
//!
//! Plan day trips, road trips and overnight stays with a forecast budget
//! across six cost categories, then record what was actually spent.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths and user display settings
//! - `error`: Custom error types
//! - `models`: Trips, cost breakdowns and the currency table
//! - `storage`: Key-value persistence and the in-memory trip store
//! - `export`: JSON and CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use voyage::config::VoyagePaths;
//! use voyage::storage::{FileStore, TripStore};
//!
//! let paths = VoyagePaths::new()?;
//! let store = TripStore::open(FileStore::new(paths)?);
//! println!("{}", store.format_currency(store.headline_total()));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod storage;

pub use error::{VoyageError, VoyageResult};
