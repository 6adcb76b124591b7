//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod invoice;
pub mod settings;
pub mod template;
pub mod term;

pub use export::ExportFormat;
pub use invoice::{handle_invoice_command, InvoiceCommands, InvoiceTarget};
pub use settings::{handle_settings_command, BodyCommands, SettingsCommands};
pub use template::{handle_template_command, TemplateCommands};
pub use term::{handle_term_command, TermCommands};
