//! Text formatting used by invoice rendering

use chrono::{Datelike, NaiveDate};

/// English ordinal suffix for a day of the month
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (4..=20).contains(&day) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// e.g. "Monday 1st September"
pub fn lesson_date(date: NaiveDate) -> String {
    format!(
        "{} {}{} {}",
        date.format("%A"),
        date.day(),
        ordinal_suffix(date.day()),
        date.format("%B")
    )
}

/// e.g. "Monday 1st September to and including Monday 20th October"
pub fn date_range(first: NaiveDate, last: NaiveDate) -> String {
    format!("{} to and including {}", lesson_date(first), lesson_date(last))
}

/// Two decimal places, no currency symbol
///
/// Half pennies round away from zero (12.125 → "12.13"), not to even.
pub fn amount(value: f64) -> String {
    format!("{:.2}", (value * 100.0).round() / 100.0)
}

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
