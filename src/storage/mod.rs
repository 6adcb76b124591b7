//! Storage layer for tutor-invoice
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod file_io;
pub mod templates;

pub use file_io::{read_json, read_json_required, write_json_atomic};
pub use templates::{TemplateData, TemplateRepository};

use crate::config::paths::TutorPaths;
use crate::error::TutorError;

/// Main storage coordinator
pub struct Storage {
    paths: TutorPaths,
    pub templates: TemplateRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TutorPaths) -> Result<Self, TutorError> {
        paths.ensure_directories()?;

        Ok(Self {
            templates: TemplateRepository::new(paths.templates_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TutorPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), TutorError> {
        self.templates.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), TutorError> {
        self.templates.save()
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}
