//! Path management for tutor-invoice
//!
//! ## Path Resolution Order
//!
//! 1. `TUTOR_INVOICE_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory for `tutor-invoice`
//!    (`~/.config/tutor-invoice` on Linux, `%APPDATA%\tutor-invoice\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TutorError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV_VAR: &str = "TUTOR_INVOICE_DATA_DIR";

/// Manages all paths used by tutor-invoice
#[derive(Debug, Clone)]
pub struct TutorPaths {
    /// Base directory for all tutor-invoice data
    base_dir: PathBuf,
}

impl TutorPaths {
    /// Create a new TutorPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined for the
    /// current user and no override is set.
    pub fn new() -> Result<Self, TutorError> {
        let base_dir = match std::env::var(DATA_DIR_ENV_VAR) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create TutorPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config directory (same as base for simplicity)
    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the directory mail drafts are written to (`<base>/drafts/`)
    pub fn drafts_dir(&self) -> PathBuf {
        self.base_dir.join("drafts")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to templates.json
    pub fn templates_file(&self) -> PathBuf {
        self.data_dir().join("templates.json")
    }

    /// Ensure the base, data and drafts directories exist
    pub fn ensure_directories(&self) -> Result<(), TutorError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TutorError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TutorError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.drafts_dir())
            .map_err(|e| TutorError::Io(format!("Failed to create drafts directory: {}", e)))?;

        Ok(())
    }

    /// Check if tutor-invoice has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, TutorError> {
    ProjectDirs::from("", "", "tutor-invoice")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TutorError::Config("Could not determine a home directory".into()))
}
