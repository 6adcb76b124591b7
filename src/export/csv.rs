//! CSV template export
//!
//! One row per template, for spreadsheets. Export only: CSV drops the
//! timestamps needed for a faithful import.

use serde::Serialize;
use std::io::Write;

use crate::error::{TutorError, TutorResult};
use crate::storage::Storage;

#[derive(Debug, Serialize)]
struct TemplateRow<'a> {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Recipient")]
    recipient: &'a str,
    #[serde(rename = "Students")]
    students: &'a str,
    #[serde(rename = "Instrument")]
    instrument: &'a str,
    #[serde(rename = "Day")]
    day: &'static str,
    #[serde(rename = "Cost")]
    cost: String,
    #[serde(rename = "Selected")]
    selected: bool,
}

/// Export all templates to CSV
pub fn export_templates_csv<W: Write>(storage: &Storage, writer: W) -> TutorResult<()> {
    let templates = storage.templates.get_all()?;
    let selected = storage.templates.selected()?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    for template in &templates {
        csv_writer
            .serialize(TemplateRow {
                id: template.id.as_uuid().to_string(),
                recipient: &template.recipient,
                students: &template.students,
                instrument: &template.instrument,
                day: template.day.name(),
                cost: format!("{:.2}", template.cost),
                selected: selected == Some(template.id),
            })
            .map_err(|e| TutorError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TutorError::Export(e.to_string()))
}
