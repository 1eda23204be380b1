//! Path management for Voyage
//!
//! Resolves where the durable trip and settings records live.
//!
//! ## Path Resolution Order
//!
//! 1. `VOYAGE_DATA_DIR` environment variable (if set)
//! 2. The platform data directory (`~/.local/share/voyage` on Linux,
//!    `~/Library/Application Support/voyage` on macOS, `%APPDATA%\voyage\data` on Windows)
//! 3. `$HOME/.local/share/voyage` when no platform directory can be determined

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::VoyageError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "VOYAGE_DATA_DIR";

/// Manages all paths used by Voyage
#[derive(Debug, Clone)]
pub struct VoyagePaths {
    /// Base directory for all Voyage data
    base_dir: PathBuf,
}

impl VoyagePaths {
    /// Create a new VoyagePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if neither a platform data directory nor `HOME` can be
    /// determined.
    pub fn new() -> Result<Self, VoyageError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create VoyagePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding the durable records
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Path of the file backing a storage key
    pub fn record_file(&self, key: &str) -> PathBuf {
        self.data_dir().join(format!("{}.json", key))
    }

    /// Get the path to the trip collection record
    pub fn trips_file(&self) -> PathBuf {
        self.record_file(crate::storage::TRIPS_KEY)
    }

    /// Get the path to the settings record
    pub fn settings_file(&self) -> PathBuf {
        self.record_file(crate::storage::SETTINGS_KEY)
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), VoyageError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| VoyageError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| VoyageError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, VoyageError> {
    if let Some(dirs) = ProjectDirs::from("", "", "voyage") {
        return Ok(dirs.data_dir().to_path_buf());
    }

    let home = std::env::var("HOME")
        .map_err(|_| VoyageError::Config("Could not determine a data directory".into()))?;
    Ok(PathBuf::from(home).join(".local").join("share").join("voyage"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = VoyagePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = VoyagePaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = VoyagePaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_record_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = VoyagePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(
            paths.trips_file(),
            temp_dir.path().join("data").join("voyage_trips.json")
        );
        assert_eq!(
            paths.settings_file(),
            temp_dir.path().join("data").join("voyage_settings.json")
        );
    }
}
