//! Export module for tutor-invoice
//!
//! Template export in several formats:
//! - JSON: machine-readable, also the import format
//! - YAML: human-readable, importable
//! - CSV: spreadsheet-friendly, export only

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_templates_csv;
pub use json::{
    export_templates_json, import_from_json, import_json_file, TemplateExport,
    EXPORT_SCHEMA_VERSION,
};
pub use yaml::{export_templates_yaml, import_from_yaml};
