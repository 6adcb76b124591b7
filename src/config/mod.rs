//! Configuration module for tutor-invoice
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TutorPaths;
pub use settings::{EmailMode, MailCredentials, Settings, Theme};
