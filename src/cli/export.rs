//! CLI commands for template export and import
//!
//! Provides the file handling behind `template export` and `template import`.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::error::{TutorError, TutorResult};
use crate::export::{csv, json, yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (importable)
    Json,
    /// YAML format (importable, human-readable)
    Yaml,
    /// CSV format (export only)
    Csv,
}

impl ExportFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Write every template to `output`
pub fn handle_template_export(
    storage: &Storage,
    output: PathBuf,
    format: ExportFormat,
    pretty: bool,
) -> TutorResult<()> {
    let file = File::create(&output).map_err(|e| {
        TutorError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Json => json::export_templates_json(storage, &mut writer, pretty)?,
        ExportFormat::Yaml => yaml::export_templates_yaml(storage, &mut writer)?,
        ExportFormat::Csv => csv::export_templates_csv(storage, &mut writer)?,
    }

    let count = storage.templates.count()?;
    println!("Exported {} templates to: {}", count, output.display());
    if format == ExportFormat::Csv {
        println!("Note: CSV exports cannot be imported. Use JSON or YAML for backups.");
    }

    Ok(())
}

/// Merge the templates in `file` into the store
pub fn handle_template_import(
    storage: &Storage,
    file: PathBuf,
    format: Option<ExportFormat>,
) -> TutorResult<()> {
    let format = format
        .or_else(|| ExportFormat::from_path(&file))
        .unwrap_or(ExportFormat::Json);

    let export = match format {
        ExportFormat::Json => json::import_json_file(&file)?,
        ExportFormat::Yaml => {
            let contents = fs::read_to_string(&file).map_err(|e| {
                TutorError::Import(format!("Failed to read {}: {}", file.display(), e))
            })?;
            yaml::import_from_yaml(&contents)?
        }
        ExportFormat::Csv => {
            return Err(TutorError::Import(
                "CSV exports cannot be imported; use a JSON or YAML export".into(),
            ))
        }
    };

    let count = export.apply(storage)?;
    println!("Imported {} templates from: {}", count, file.display());

    Ok(())
}
