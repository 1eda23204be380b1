//! Configuration module for Voyage
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - The user settings record and its partial updates

pub mod paths;
pub mod settings;

pub use paths::VoyagePaths;
pub use settings::{Settings, SettingsPatch};
