//! Settings CLI commands
//!
//! Reads and changes `config.json`: theme, email mode, default template,
//! mail credentials and the custom email body template.

use std::fs;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::{EmailMode, Settings, Theme, TutorPaths};
use crate::error::{TutorError, TutorResult};
use crate::invoice::{Placeholder, DEFAULT_BODY_TEMPLATE};
use crate::services::TemplateService;
use crate::storage::Storage;

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show all settings
    Show,
    /// Set the colour theme
    Theme {
        #[arg(value_enum)]
        theme: Theme,
    },
    /// Set how `invoice send` delivers invoices
    EmailMode {
        #[arg(value_enum)]
        mode: EmailMode,
    },
    /// Set the template selected automatically at startup
    DefaultTemplate {
        /// Template ID or recipient
        #[arg(required_unless_present = "clear")]
        template: Option<String>,
        /// Remove the default template
        #[arg(long, conflicts_with = "template")]
        clear: bool,
    },
    /// Store mail account OAuth client credentials
    Credentials {
        #[arg(long)]
        client_id: Option<String>,
        #[arg(long)]
        client_secret: Option<String>,
        /// Remove stored credentials
        #[arg(long, conflicts_with_all = ["client_id", "client_secret"])]
        clear: bool,
    },
    /// Manage the custom email body template
    #[command(subcommand)]
    Body(BodyCommands),
}

/// Custom body subcommands
#[derive(Subcommand)]
pub enum BodyCommands {
    /// Print the active body template
    Show,
    /// Set a custom body template
    Set {
        /// Template text
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        text: Option<String>,
        /// Read the template from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Go back to the default layout
    Clear,
    /// Print the default layout and the available placeholders
    Default,
}

/// Handle a settings command
pub fn handle_settings_command(
    paths: &TutorPaths,
    settings: &mut Settings,
    storage: &Storage,
    cmd: SettingsCommands,
) -> TutorResult<()> {
    match cmd {
        SettingsCommands::Show => {
            let default_template = match settings.default_template_id {
                Some(id) => match storage.templates.get(id)? {
                    Some(template) => format!("{} ({})", template, id),
                    None => format!("{} (missing)", id),
                },
                None => "(none)".to_string(),
            };

            println!("Settings ({})", paths.settings_file().display());
            println!("  Theme:              {}", settings.theme);
            println!("  Email mode:         {}", settings.email_mode);
            println!("  Default template:   {}", default_template);
            println!(
                "  Mail credentials:   {}",
                if settings.mail.is_configured() {
                    "configured"
                } else {
                    "not configured"
                }
            );
            println!(
                "  Custom body:        {}",
                if settings.custom_body().is_some() {
                    "set"
                } else {
                    "(default layout)"
                }
            );
            println!("  Auto save:          {}", settings.auto_save);
            println!("  Notifications:      {}", settings.show_notifications);
            return Ok(());
        }

        SettingsCommands::Theme { theme } => {
            settings.theme = theme;
            println!("Theme set to {}", theme);
        }

        SettingsCommands::EmailMode { mode } => {
            settings.email_mode = mode;
            println!("Email mode set to {}", mode);
        }

        SettingsCommands::DefaultTemplate { template, clear } => {
            if clear {
                settings.default_template_id = None;
                println!("Default template cleared");
            } else if let Some(identifier) = template {
                let found = TemplateService::new(storage).require(&identifier)?;
                settings.default_template_id = Some(found.id);
                println!("Default template set to {} ({})", found, found.id);
            }
        }

        SettingsCommands::Credentials {
            client_id,
            client_secret,
            clear,
        } => {
            if clear {
                settings.mail = Default::default();
                println!("Mail credentials cleared");
            } else {
                if client_id.is_none() && client_secret.is_none() {
                    return Err(TutorError::Validation(
                        "Pass --client-id and/or --client-secret".into(),
                    ));
                }
                if client_id.is_some() {
                    settings.mail.client_id = client_id;
                }
                if client_secret.is_some() {
                    settings.mail.client_secret = client_secret;
                }
                println!(
                    "Mail credentials updated ({})",
                    if settings.mail.is_configured() {
                        "complete"
                    } else {
                        "incomplete"
                    }
                );
            }
        }

        SettingsCommands::Body(cmd) => {
            if !handle_body_command(settings, cmd)? {
                return Ok(());
            }
        }
    }

    settings.save(paths)?;
    Ok(())
}

/// Returns true if the settings changed
fn handle_body_command(settings: &mut Settings, cmd: BodyCommands) -> TutorResult<bool> {
    match cmd {
        BodyCommands::Show => {
            match settings.custom_body() {
                Some(body) => println!("{}", body),
                None => {
                    eprintln!("No custom body set; using the default layout:");
                    println!("{}", DEFAULT_BODY_TEMPLATE);
                }
            }
            Ok(false)
        }

        BodyCommands::Set { text, file } => {
            let body = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => fs::read_to_string(&path).map_err(|e| {
                    TutorError::Io(format!("Failed to read {}: {}", path.display(), e))
                })?,
                (None, None) => String::new(),
            };

            settings.set_custom_body_template(Some(body));
            match settings.custom_body() {
                Some(_) => println!("Custom body template saved"),
                None => println!("Template was blank; using the default layout"),
            }
            Ok(true)
        }

        BodyCommands::Clear => {
            settings.set_custom_body_template(None);
            println!("Custom body template cleared; using the default layout");
            Ok(true)
        }

        BodyCommands::Default => {
            println!("{}", DEFAULT_BODY_TEMPLATE);
            println!();
            println!("Available placeholders:");
            for placeholder in Placeholder::ALL {
                println!("  {:<22} {}", placeholder.token(), placeholder.description());
            }
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, TutorPaths, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TutorPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();
        (temp_dir, paths, storage)
    }

    #[test]
    fn test_body_set_and_clear_persist() {
        let (_temp_dir, paths, storage) = setup();
        let mut settings = Settings::default();

        let cmd = SettingsCommands::Body(BodyCommands::Set {
            text: Some("Hello {{recipient}}".into()),
            file: None,
        });
        handle_settings_command(&paths, &mut settings, &storage, cmd).unwrap();
        let reloaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(reloaded.custom_body(), Some("Hello {{recipient}}"));

        let cmd = SettingsCommands::Body(BodyCommands::Clear);
        handle_settings_command(&paths, &mut settings, &storage, cmd).unwrap();
        let reloaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(reloaded.custom_body(), None);
    }

    #[test]
    fn test_default_template_must_exist() {
        let (_temp_dir, paths, storage) = setup();
        let mut settings = Settings::default();

        let cmd = SettingsCommands::DefaultTemplate {
            template: Some("Nobody".into()),
            clear: false,
        };
        let err = handle_settings_command(&paths, &mut settings, &storage, cmd).unwrap_err();
        assert!(err.is_not_found());
        assert!(settings.default_template_id.is_none());
    }

    #[test]
    fn test_credentials_require_a_value() {
        let (_temp_dir, paths, storage) = setup();
        let mut settings = Settings::default();

        let cmd = SettingsCommands::Credentials {
            client_id: None,
            client_secret: None,
            clear: false,
        };
        let err = handle_settings_command(&paths, &mut settings, &storage, cmd).unwrap_err();
        assert!(err.is_validation());
    }
}
