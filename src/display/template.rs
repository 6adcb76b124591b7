//! Template display formatting
//!
//! Formats billing templates for terminal output in table and detail views.

use super::truncate;
use crate::invoice::format;
use crate::models::{BillingTemplate, TemplateId};

/// Format a list of templates as a table, marking the selected one
pub fn format_template_list(templates: &[BillingTemplate], selected: Option<TemplateId>) -> String {
    if templates.is_empty() {
        return "No templates found.".to_string();
    }

    let recipient_width = templates
        .iter()
        .map(|t| t.recipient.chars().count())
        .max()
        .unwrap_or(9)
        .clamp(9, 28);

    let instrument_width = templates
        .iter()
        .map(|t| t.instrument.chars().count())
        .max()
        .unwrap_or(10)
        .clamp(10, 20);

    let mut output = String::new();
    output.push_str(&format!(
        "  {:<12}  {:<recipient_width$}  {:<instrument_width$}  {:<9}  {:>8}  {}\n",
        "ID",
        "Recipient",
        "Instrument",
        "Day",
        "Cost",
        "Students",
        recipient_width = recipient_width,
        instrument_width = instrument_width,
    ));
    output.push_str(&format!(
        "  {:-<12}  {:-<recipient_width$}  {:-<instrument_width$}  {:-<9}  {:->8}  {:-<8}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        recipient_width = recipient_width,
        instrument_width = instrument_width,
    ));

    for template in templates {
        let marker = if selected == Some(template.id) { "*" } else { " " };
        output.push_str(&format!(
            "{} {:<12}  {:<recipient_width$}  {:<instrument_width$}  {:<9}  {:>8}  {}\n",
            marker,
            template.id.to_string(),
            truncate(&template.recipient, recipient_width),
            truncate(&template.instrument, instrument_width),
            template.day.name(),
            format!("£{}", format::amount(template.cost)),
            template.students,
            recipient_width = recipient_width,
            instrument_width = instrument_width,
        ));
    }

    output.push_str(&format!("\nTotal: {} templates", templates.len()));
    if selected.is_some() {
        output.push_str("\n* = selected");
    }
    output.push('\n');

    output
}

/// Format a single template's details
pub fn format_template_details(template: &BillingTemplate, is_selected: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("Template: {}\n", template));
    output.push_str(&format!("  ID:          {}\n", template.id));
    output.push_str(&format!("  Full ID:     {}\n", template.id.as_uuid()));
    output.push_str(&format!("  Recipient:   {}\n", template.recipient));
    output.push_str(&format!("  Students:    {}\n", template.students));
    output.push_str(&format!("  Instrument:  {}\n", template.instrument));
    output.push_str(&format!("  Lesson Day:  {}\n", template.day));
    output.push_str(&format!(
        "  Cost:        £{} per lesson\n",
        format::amount(template.cost)
    ));
    output.push_str(&format!(
        "  Selected:    {}\n",
        if is_selected { "Yes" } else { "No" }
    ));
    output.push('\n');
    output.push_str(&format!(
        "  Created:     {}\n",
        template.created_at.format("%Y-%m-%d %H:%M")
    ));
    output.push_str(&format!(
        "  Updated:     {}\n",
        template.updated_at.format("%Y-%m-%d %H:%M")
    ));

    output
}
