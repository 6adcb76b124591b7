use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tutor_invoice::cli::{
    handle_invoice_command, handle_settings_command, handle_template_command,
    handle_term_command,
};
use tutor_invoice::config::{paths::DATA_DIR_ENV_VAR, Settings, TutorPaths};
use tutor_invoice::services::TemplateService;
use tutor_invoice::storage::Storage;

#[derive(Parser)]
#[command(
    name = "tutor-invoice",
    version,
    about = "Half-term invoice generator for private music tutors",
    long_about = "tutor-invoice keeps billing templates for your recurring students, \
                  works out the current school half-term and writes the invoice \
                  email for it, ready to paste or to open as a mail draft."
)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding settings, templates and drafts
    #[arg(long, global = true, env = DATA_DIR_ENV_VAR)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Billing template management commands
    #[command(subcommand, alias = "tpl")]
    Template(tutor_invoice::cli::TemplateCommands),

    /// Half-term calendar commands
    #[command(subcommand)]
    Term(tutor_invoice::cli::TermCommands),

    /// Invoice preview and sending
    #[command(subcommand)]
    Invoice(tutor_invoice::cli::InvoiceCommands),

    /// Settings commands
    #[command(subcommand)]
    Settings(tutor_invoice::cli::SettingsCommands),

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tutor_invoice::logging::init(cli.verbose);

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => TutorPaths::with_base_dir(dir),
        None => TutorPaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;
    TemplateService::new(&storage).apply_default_selection(&settings)?;

    match cli.command {
        Some(Commands::Template(cmd)) => {
            handle_template_command(&storage, cmd)?;
        }
        Some(Commands::Term(cmd)) => {
            handle_term_command(cmd)?;
        }
        Some(Commands::Invoice(cmd)) => {
            handle_invoice_command(&storage, &settings, &paths, cmd)?;
        }
        Some(Commands::Settings(cmd)) => {
            handle_settings_command(&paths, &mut settings, &storage, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing tutor-invoice at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  tutor-invoice template add \"Parent Name\" --cost 25 --instrument piano --day monday --students \"Student\" --select");
            println!("  tutor-invoice invoice preview");
        }
        Some(Commands::Config) => {
            println!("tutor-invoice Configuration");
            println!("===========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Templates file:   {}", paths.templates_file().display());
            println!("Drafts directory: {}", paths.drafts_dir().display());
            println!("Initialized:      {}", storage.is_initialized());
            println!();
            println!("Settings:");
            println!("  Email mode:       {}", settings.email_mode);
            println!("  Theme:            {}", settings.theme);
            println!("  Templates:        {}", storage.templates.count()?);
        }
        None => {
            println!("tutor-invoice - half-term invoices for music tutors");
            println!();
            println!("Run 'tutor-invoice --help' for usage information.");
            println!("Run 'tutor-invoice init' to get started.");
        }
    }

    Ok(())
}
