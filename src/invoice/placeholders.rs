//! Placeholder substitution for custom email bodies
//!
//! Only the fixed set of `{{name}}` placeholders below is recognised.
//! Substitution is a single left-to-right pass: text produced by a value is
//! never scanned again, and anything that is not a known placeholder is
//! copied through untouched.

use std::collections::HashMap;

/// A recognised `{{...}}` placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Recipient,
    Students,
    Instrument,
    TermInfo,
    WeeksCount,
    LessonCountText,
    DateRange,
    Cost,
    TotalCost,
    IsAre,
}

impl Placeholder {
    pub const ALL: [Placeholder; 10] = [
        Self::Recipient,
        Self::Students,
        Self::Instrument,
        Self::TermInfo,
        Self::WeeksCount,
        Self::LessonCountText,
        Self::DateRange,
        Self::Cost,
        Self::TotalCost,
        Self::IsAre,
    ];

    /// The literal text that gets replaced
    pub fn token(self) -> &'static str {
        match self {
            Self::Recipient => "{{recipient}}",
            Self::Students => "{{students}}",
            Self::Instrument => "{{instrument}}",
            Self::TermInfo => "{{termInfo}}",
            Self::WeeksCount => "{{weeksCount}}",
            Self::LessonCountText => "{{lessonCountText}}",
            Self::DateRange => "{{dateRange}}",
            Self::Cost => "{{cost}}",
            Self::TotalCost => "{{totalCost}}",
            Self::IsAre => "{{isAre}}",
        }
    }

    /// One-line help shown next to the token
    pub fn description(self) -> &'static str {
        match self {
            Self::Recipient => "Parent/guardian name",
            Self::Students => "Student name(s)",
            Self::Instrument => "Instrument being taught",
            Self::TermInfo => "Term information (e.g. \"1st half autumn term 2024\")",
            Self::WeeksCount => "Number of weeks",
            Self::LessonCountText => "\"session\" or \"sessions\" based on count",
            Self::DateRange => "Full date range of lessons",
            Self::Cost => "Cost per lesson (2 decimal places)",
            Self::TotalCost => "Total cost (2 decimal places)",
            Self::IsAre => "\"is\" or \"are\" based on lesson count",
        }
    }

    /// The placeholder whose token starts `text`, if any
    fn at_start_of(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| text.starts_with(p.token()))
    }
}

/// Computed values keyed by placeholder
pub type PlaceholderValues = HashMap<Placeholder, String>;

const OPEN: &str = "{{";

/// Substitute every known placeholder in `template` with its value
///
/// Placeholders without a value in `values` are left as written.
pub fn render(template: &str, values: &PlaceholderValues) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find(OPEN) {
        out.push_str(&rest[..open]);
        let candidate = &rest[open..];

        match Placeholder::at_start_of(candidate).and_then(|p| values.get(&p).map(|v| (p, v))) {
            Some((placeholder, value)) => {
                out.push_str(value);
                rest = &candidate[placeholder.token().len()..];
            }
            None => {
                // Step over a single brace so "{{{recipient}}}" still matches
                out.push('{');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
