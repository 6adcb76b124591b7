//! Invoice composition
//!
//! Turns a billing template and a resolved half-term into the subject line,
//! body and totals of an invoice email. Pure: no I/O, no clock, no settings
//! lookups. The custom body template is passed in by the caller.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::format;
use super::placeholders::{self, Placeholder, PlaceholderValues};
use crate::models::{BillingTemplate, LessonDay, ResolvedTerm};

/// The layout used when no custom body template is configured
pub const DEFAULT_BODY_TEMPLATE: &str = "Hi {{recipient}},

Here is my invoice for {{students}}'s {{instrument}} lessons {{termInfo}}.

--------
There {{isAre}} {{weeksCount}} {{lessonCountText}}. Lessons run this {{termInfo}} from {{dateRange}}.

{{weeksCount}} x £{{cost}} = £{{totalCost}}

Thank you
--------

Kind regards";

/// A rendered invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceResult {
    pub subject: String,
    pub body: String,
    /// Week count times lesson cost, unrounded
    pub total_cost: f64,
    /// One lesson per week of the half-term
    pub lesson_count: u32,
    /// e.g. "1st half autumn term 2025"
    pub term_info: String,
    /// e.g. "Monday 1st September to and including Monday 20th October"
    pub date_range: String,
}

/// First date on or after `term_start` that falls on `lesson_day`
pub fn first_lesson_date(term_start: NaiveDate, lesson_day: LessonDay) -> NaiveDate {
    let start = term_start.weekday().num_days_from_monday();
    let target = lesson_day.weekday().num_days_from_monday();
    let days_until = (7 + target - start) % 7;
    term_start + Duration::days(days_until as i64)
}

/// Last weekly lesson of the term, `week_count - 1` weeks after the first
pub fn last_lesson_date(first_lesson: NaiveDate, week_count: u32) -> NaiveDate {
    first_lesson + Duration::weeks(week_count.saturating_sub(1) as i64)
}

/// Compose the invoice for one template
///
/// When `custom_body` is `Some`, it is rendered instead of
/// [`DEFAULT_BODY_TEMPLATE`].
pub fn compose(
    template: &BillingTemplate,
    term: &ResolvedTerm,
    custom_body: Option<&str>,
) -> InvoiceResult {
    let weeks = term.week_count;
    let first = first_lesson_date(term.period.start, template.day);
    let last = last_lesson_date(first, weeks);

    let term_info = term.period.label();
    let date_range = format::date_range(first, last);
    let total_cost = weeks as f64 * template.cost;

    let subject = format!(
        "Invoice for {} Lessons {}",
        format::capitalize_first(&template.instrument),
        term_info
    );

    let singular = weeks == 1;
    let mut values = PlaceholderValues::new();
    values.insert(Placeholder::Recipient, template.recipient.clone());
    values.insert(Placeholder::Students, template.students.clone());
    values.insert(Placeholder::Instrument, template.instrument.clone());
    values.insert(Placeholder::TermInfo, term_info.clone());
    values.insert(Placeholder::WeeksCount, weeks.to_string());
    values.insert(
        Placeholder::LessonCountText,
        if singular { "session" } else { "sessions" }.to_string(),
    );
    values.insert(Placeholder::DateRange, date_range.clone());
    values.insert(Placeholder::Cost, format::amount(template.cost));
    values.insert(Placeholder::TotalCost, format::amount(total_cost));
    values.insert(Placeholder::IsAre, if singular { "is" } else { "are" }.to_string());

    let body = placeholders::render(custom_body.unwrap_or(DEFAULT_BODY_TEMPLATE), &values);

    InvoiceResult {
        subject,
        body,
        total_cost,
        lesson_count: weeks,
        term_info,
        date_range,
    }
}

/// Compose invoices for every template, in input order
pub fn compose_all<'a, I>(
    templates: I,
    term: &ResolvedTerm,
    custom_body: Option<&str>,
) -> Vec<InvoiceResult>
where
    I: IntoIterator<Item = &'a BillingTemplate>,
{
    templates
        .into_iter()
        .map(|template| compose(template, term, custom_body))
        .collect()
}
