//! Invoice display formatting

use crate::dispatch::DispatchSummary;
use crate::invoice::format;
use crate::services::PreparedInvoice;

/// Format an invoice preview: a short summary followed by the email itself
pub fn format_invoice_preview(prepared: &PreparedInvoice) -> String {
    let invoice = &prepared.invoice;
    let mut output = String::new();

    output.push_str(&format!("To:       {}\n", prepared.template.recipient));
    output.push_str(&format!("Term:     {}\n", invoice.term_info));
    output.push_str(&format!("Lessons:  {}\n", invoice.date_range));
    output.push_str(&format!(
        "Total:    {} x £{} = £{}\n",
        invoice.lesson_count,
        format::amount(prepared.template.cost),
        format::amount(invoice.total_cost)
    ));
    output.push_str(&format!("{:-<60}\n", ""));
    output.push_str(&format!("Subject: {}\n\n", invoice.subject));
    output.push_str(&invoice.body);
    output.push('\n');

    output
}

/// Format the outcome of sending several invoices
pub fn format_dispatch_summary(summary: &DispatchSummary) -> String {
    let mut output = format!(
        "Sent {} of {} invoices",
        summary.success,
        summary.success + summary.failed
    );

    if summary.all_succeeded() {
        output.push('\n');
        return output;
    }

    output.push_str(&format!(" ({} failed)\n", summary.failed));
    for error in &summary.errors {
        output.push_str(&format!("  - {}\n", error));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::test_support::prepared;

    #[test]
    fn test_preview() {
        let output = format_invoice_preview(&prepared("John Doe"));

        assert!(output.starts_with("To:       John Doe\n"));
        assert!(output.contains("Term:     1st half autumn term 2025\n"));
        assert!(output.contains("Total:    8 x £25.00 = £200.00\n"));
        assert!(output.contains(
            "Subject: Invoice for Piano Lessons 1st half autumn term 2025\n\nHi John Doe,"
        ));
    }

    #[test]
    fn test_summary_all_ok() {
        let summary = DispatchSummary {
            success: 2,
            failed: 0,
            errors: vec![],
            receipts: vec!["a".into(), "b".into()],
        };
        assert_eq!(format_dispatch_summary(&summary), "Sent 2 of 2 invoices\n");
    }

    #[test]
    fn test_summary_with_failures() {
        let summary = DispatchSummary {
            success: 1,
            failed: 1,
            errors: vec!["Jane Roe: Dispatch error: disk full".into()],
            receipts: vec!["a".into()],
        };
        assert_eq!(
            format_dispatch_summary(&summary),
            "Sent 1 of 2 invoices (1 failed)\n  - Jane Roe: Dispatch error: disk full\n"
        );
    }
}
