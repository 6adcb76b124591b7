//! User settings for tutor-invoice
//!
//! Manages user preferences: theme, how invoices are dispatched, the default
//! template, mail credentials and the optional custom email body template.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::paths::TutorPaths;
use crate::error::TutorError;
use crate::models::TemplateId;
use crate::storage::{read_json, write_json_atomic};

/// Colour theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Where generated invoices go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EmailMode {
    /// Print the invoice so it can be piped to the clipboard
    #[default]
    Clipboard,
    /// Write a mail draft file to the drafts directory
    #[serde(alias = "gmail-draft", alias = "auto-draft")]
    Draft,
}

impl fmt::Display for EmailMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clipboard => write!(f, "clipboard"),
            Self::Draft => write!(f, "draft"),
        }
    }
}

/// OAuth client credentials for a mail account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
}

impl MailCredentials {
    /// Both halves of the credentials are present
    pub fn is_configured(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.client_id) && present(&self.client_secret)
    }
}

/// User settings for tutor-invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub email_mode: EmailMode,

    /// Template selected automatically when nothing else is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_template_id: Option<TemplateId>,

    #[serde(default)]
    pub mail: MailCredentials,

    /// Placeholder template used instead of the default email layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_body_template: Option<String>,

    #[serde(default = "default_true")]
    pub auto_save: bool,

    #[serde(default = "default_true")]
    pub show_notifications: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            theme: Theme::default(),
            email_mode: EmailMode::default(),
            default_template_id: None,
            mail: MailCredentials::default(),
            custom_body_template: None,
            auto_save: true,
            show_notifications: true,
        }
    }
}

impl Settings {
    /// The custom body template, if one is set and not blank
    pub fn custom_body(&self) -> Option<&str> {
        self.custom_body_template
            .as_deref()
            .filter(|body| !body.trim().is_empty())
    }

    /// Replace the custom body template; a blank template clears it
    pub fn set_custom_body_template(&mut self, template: Option<String>) {
        self.custom_body_template = template
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TutorPaths) -> Result<Self, TutorError> {
        // Don't save yet - let caller decide when to persist
        read_json(paths.settings_file()).map_err(|e| match e {
            TutorError::Storage(msg) => TutorError::Config(msg),
            other => other,
        })
    }

    /// Save settings to disk, replacing the file atomically
    pub fn save(&self, paths: &TutorPaths) -> Result<(), TutorError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)?;

        tracing::debug!(path = %paths.settings_file().display(), "settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.email_mode, EmailMode::Clipboard);
        assert!(settings.auto_save);
        assert!(settings.show_notifications);
        assert!(settings.custom_body().is_none());
        assert!(!settings.mail.is_configured());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TutorPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.theme = Theme::Light;
        settings.email_mode = EmailMode::Draft;
        settings.set_custom_body_template(Some("{{recipient}} owes £{{totalCost}}".into()));

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.theme, Theme::Light);
        assert_eq!(loaded.email_mode, EmailMode::Draft);
        assert_eq!(loaded.custom_body(), Some("{{recipient}} owes £{{totalCost}}"));
    }

    #[test]
    fn test_save_replaces_file_without_leftovers() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TutorPaths::with_base_dir(temp_dir.path().to_path_buf());

        Settings::default().save(&paths).unwrap();
        let mut settings = Settings::default();
        settings.email_mode = EmailMode::Draft;
        settings.save(&paths).unwrap();

        let leftovers: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "left behind: {:?}", leftovers);
        assert_eq!(
            Settings::load_or_create(&paths).unwrap().email_mode,
            EmailMode::Draft
        );
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TutorPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, TutorError::Config(_)));
    }

    #[test]
    fn test_blank_custom_body_is_absent() {
        let mut settings = Settings::default();
        settings.set_custom_body_template(Some("   \n ".into()));
        assert!(settings.custom_body_template.is_none());

        // Hand-edited files may still contain whitespace
        settings.custom_body_template = Some("  ".into());
        assert!(settings.custom_body().is_none());
    }

    #[test]
    fn test_legacy_email_mode_names() {
        let settings: Settings =
            serde_json::from_str(r#"{"theme": "light", "email_mode": "gmail-draft"}"#).unwrap();
        assert_eq!(settings.email_mode, EmailMode::Draft);
        assert!(settings.auto_save);
    }

    #[test]
    fn test_credentials_configured() {
        let creds = MailCredentials {
            client_id: Some("id".into()),
            client_secret: Some(" ".into()),
        };
        assert!(!creds.is_configured());

        let creds = MailCredentials {
            client_id: Some("id".into()),
            client_secret: Some("secret".into()),
        };
        assert!(creds.is_configured());
    }
}
