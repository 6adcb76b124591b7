//! Template CLI commands
//!
//! Implements CLI commands for billing template management.

use std::path::PathBuf;

use clap::Subcommand;

use super::export::{handle_template_export, handle_template_import, ExportFormat};
use crate::display::{format_template_details, format_template_list};
use crate::error::{TutorError, TutorResult};
use crate::invoice::format;
use crate::models::LessonDay;
use crate::services::{TemplateInput, TemplateService, TemplateUpdate};
use crate::storage::Storage;

/// Template subcommands
#[derive(Subcommand)]
pub enum TemplateCommands {
    /// Add a new billing template
    Add {
        /// Who the invoice is addressed to
        recipient: String,
        /// Cost of one lesson in pounds
        #[arg(short, long)]
        cost: f64,
        /// Instrument taught
        #[arg(short, long)]
        instrument: String,
        /// Weekday of the lesson (e.g. monday, tue)
        #[arg(short, long)]
        day: LessonDay,
        /// Student name(s)
        #[arg(short, long)]
        students: String,
        /// Select the new template straight away
        #[arg(long)]
        select: bool,
    },
    /// List all templates
    List,
    /// Show template details (the selected template by default)
    Show {
        /// Template ID or recipient
        template: Option<String>,
    },
    /// Edit a template
    Edit {
        /// Template ID or recipient
        template: String,
        /// New recipient
        #[arg(short, long)]
        recipient: Option<String>,
        /// New cost per lesson
        #[arg(short, long)]
        cost: Option<f64>,
        /// New instrument
        #[arg(short, long)]
        instrument: Option<String>,
        /// New lesson day
        #[arg(short, long)]
        day: Option<LessonDay>,
        /// New student name(s)
        #[arg(short, long)]
        students: Option<String>,
    },
    /// Delete a template
    Delete {
        /// Template ID or recipient
        template: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Select the template invoices are generated for
    Select {
        /// Template ID or recipient
        #[arg(required_unless_present = "clear")]
        template: Option<String>,
        /// Clear the selection instead
        #[arg(long, conflicts_with = "template")]
        clear: bool,
    },
    /// Export all templates to a file
    Export {
        /// Output file path
        output: PathBuf,
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Import templates from a JSON or YAML export
    Import {
        /// Export file to read
        file: PathBuf,
        /// Input format (guessed from the file extension by default)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
    },
}

/// Handle a template command
pub fn handle_template_command(storage: &Storage, cmd: TemplateCommands) -> TutorResult<()> {
    let service = TemplateService::new(storage);

    match cmd {
        TemplateCommands::Add {
            recipient,
            cost,
            instrument,
            day,
            students,
            select,
        } => {
            let template = service.create(TemplateInput {
                recipient,
                cost,
                instrument,
                day,
                students,
            })?;
            println!("Created template: {} ({})", template, template.id);

            if select {
                service.select(template.id)?;
                println!("Selected: {}", template);
            }
        }

        TemplateCommands::List => {
            let templates = service.list()?;
            let selected = storage.templates.selected()?;
            println!("{}", format_template_list(&templates, selected).trim_end());
        }

        TemplateCommands::Show { template } => {
            let found = match template {
                Some(identifier) => service.require(&identifier)?,
                None => service.selected()?.ok_or(TutorError::NoSelection)?,
            };
            let is_selected = storage.templates.selected()? == Some(found.id);
            print!("{}", format_template_details(&found, is_selected));
        }

        TemplateCommands::Edit {
            template,
            recipient,
            cost,
            instrument,
            day,
            students,
        } => {
            let existing = service.require(&template)?;
            let update = TemplateUpdate {
                recipient,
                cost,
                instrument,
                day,
                students,
            };

            if update.is_empty() {
                println!("Nothing to change for '{}'", existing);
                return Ok(());
            }

            let updated = service.update(existing.id, update)?;
            println!("Updated template: {}", updated);
            println!(
                "  {} lessons, £{} each, for {}",
                updated.day,
                format::amount(updated.cost),
                updated.students
            );
        }

        TemplateCommands::Delete { template, force } => {
            let existing = service.require(&template)?;

            if !force {
                println!("About to delete template: {} ({})", existing, existing.id);
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(existing.id)?;
            println!("Deleted template: {}", deleted);
        }

        TemplateCommands::Select { template, clear } => {
            if clear {
                service.clear_selection()?;
                println!("Selection cleared");
                return Ok(());
            }

            if let Some(identifier) = template {
                let found = service.require(&identifier)?;
                let selected = service.select(found.id)?;
                println!("Selected: {} ({})", selected, selected.id);
            }
        }

        TemplateCommands::Export {
            output,
            format,
            pretty,
        } => handle_template_export(storage, output, format, pretty)?,

        TemplateCommands::Import { file, format } => {
            handle_template_import(storage, file, format)?
        }
    }

    Ok(())
}
