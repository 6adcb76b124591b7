//! Invoice CLI commands
//!
//! Previews invoices and hands them to a dispatcher. In clipboard mode the
//! invoice text is the only thing written to stdout so it can be piped
//! straight into a clipboard tool; status lines go to stderr.

use chrono::NaiveDate;
use clap::{Args, Subcommand};

use crate::config::{EmailMode, Settings, TutorPaths};
use crate::dispatch::{dispatch_all, DraftDirectory, StdoutDispatcher};
use crate::display::{format_dispatch_summary, format_invoice_preview};
use crate::error::{TutorError, TutorResult};
use crate::invoice::calendar;
use crate::services::{InvoiceService, PreparedInvoice, TemplateService};
use crate::storage::Storage;

/// Which templates to invoice
#[derive(Args, Debug, Clone)]
pub struct InvoiceTarget {
    /// Template ID or recipient (defaults to the selected template)
    #[arg(conflicts_with = "all")]
    pub template: Option<String>,

    /// Invoice every template
    #[arg(short, long)]
    pub all: bool,

    /// Compute for the half-term containing this date instead of today (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

/// Invoice subcommands
#[derive(Subcommand)]
pub enum InvoiceCommands {
    /// Show the invoice without sending it anywhere
    Preview {
        #[command(flatten)]
        target: InvoiceTarget,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Send invoices using the configured email mode
    Send {
        #[command(flatten)]
        target: InvoiceTarget,

        /// Override the email mode from settings
        #[arg(short, long, value_enum)]
        mode: Option<EmailMode>,
    },
}

/// Handle an invoice command
pub fn handle_invoice_command(
    storage: &Storage,
    settings: &Settings,
    paths: &TutorPaths,
    cmd: InvoiceCommands,
) -> TutorResult<()> {
    match cmd {
        InvoiceCommands::Preview { target, json } => {
            let invoices = prepare(storage, settings, &target)?;

            if json {
                let rendered = serde_json::to_string_pretty(&invoices)
                    .map_err(|e| TutorError::Json(e.to_string()))?;
                println!("{}", rendered);
                return Ok(());
            }

            for (i, prepared) in invoices.iter().enumerate() {
                if i > 0 {
                    println!("\n{:=<60}\n", "");
                }
                print!("{}", format_invoice_preview(prepared));
            }
        }

        InvoiceCommands::Send { target, mode } => {
            let invoices = prepare(storage, settings, &target)?;
            let mode = mode.unwrap_or(settings.email_mode);

            let summary = match mode {
                EmailMode::Clipboard => {
                    let mut dispatcher = StdoutDispatcher::stdout();
                    dispatch_all(&mut dispatcher, &invoices)
                }
                EmailMode::Draft => {
                    let mut dispatcher = DraftDirectory::new(paths.drafts_dir());
                    let summary = dispatch_all(&mut dispatcher, &invoices);
                    for draft_id in &summary.receipts {
                        println!("Draft saved: {}", dispatcher.path_for(draft_id).display());
                    }
                    summary
                }
            };

            eprint!("{}", format_dispatch_summary(&summary));
            if !summary.all_succeeded() {
                return Err(TutorError::Dispatch(format!(
                    "{} of {} invoices failed",
                    summary.failed,
                    invoices.len()
                )));
            }
        }
    }

    Ok(())
}

/// Prepare the invoices a target names, for the term containing its date
fn prepare(
    storage: &Storage,
    settings: &Settings,
    target: &InvoiceTarget,
) -> TutorResult<Vec<PreparedInvoice>> {
    let date = target.date.unwrap_or_else(calendar::today);
    let service = InvoiceService::new(storage, settings);

    if target.all {
        return service.prepare_all(date);
    }

    let prepared = match &target.template {
        Some(identifier) => {
            let template = TemplateService::new(storage).require(identifier)?;
            service.prepare(template.id, date)?
        }
        None => service.prepare_selected(date)?,
    };
    Ok(vec![prepared])
}
