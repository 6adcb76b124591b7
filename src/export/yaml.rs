//! YAML template export
//!
//! Same document as the JSON export, for people who prefer editing templates
//! by hand.

use std::io::Write;

use crate::error::{TutorError, TutorResult};
use crate::export::json::TemplateExport;
use crate::storage::Storage;

/// Export all templates to YAML
pub fn export_templates_yaml<W: Write>(storage: &Storage, writer: &mut W) -> TutorResult<()> {
    let export = TemplateExport::from_storage(storage)?;
    let export_err = |e: std::io::Error| TutorError::Export(e.to_string());

    writeln!(writer, "# tutor-invoice template export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TutorError::Export(e.to_string()))
}

/// Parse and validate a YAML export
pub fn import_from_yaml(yaml_str: &str) -> TutorResult<TemplateExport> {
    let export: TemplateExport =
        serde_yaml::from_str(yaml_str).map_err(|e| TutorError::Import(e.to_string()))?;
    export.validate().map_err(TutorError::Import)?;
    Ok(export)
}
