//! Display formatting for terminal output
//!
//! Provides utilities for formatting templates, term schedules and invoices
//! for terminal display.

pub mod invoice;
pub mod template;
pub mod term;

pub use invoice::{format_dispatch_summary, format_invoice_preview};
pub use template::{format_template_details, format_template_list};
pub use term::{format_current_term, format_year_schedule};

/// Truncate a string to at most `max_len` characters
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
