//! Term display formatting

use chrono::NaiveDate;

use crate::models::{ResolvedTerm, TermPeriod};

/// Format the half-term a date falls in
pub fn format_current_term(date: NaiveDate, term: &ResolvedTerm) -> String {
    let mut output = String::new();

    output.push_str(&format!("Date:   {}\n", date));
    output.push_str(&format!("Term:   {}\n", term.period));
    output.push_str(&format!(
        "Runs:   {} to {}\n",
        term.period.start, term.period.end
    ));
    output.push_str(&format!("Weeks:  {}\n", term.week_count));

    output
}

/// Format the six half-terms of an academic year, marking the one containing
/// `today` when given
pub fn format_year_schedule(
    start_year: i32,
    periods: &[TermPeriod],
    today: Option<NaiveDate>,
) -> String {
    let mut output = String::new();

    let end_year = match start_year.checked_add(1) {
        Some(year) => format!("{:02}", year.rem_euclid(100)),
        None => "?".to_string(),
    };
    output.push_str(&format!("Academic year {}/{}\n\n", start_year, end_year));
    output.push_str(&format!(
        "  {:<26}  {:<10}  {:<10}  {:>5}\n",
        "Term", "Start", "End", "Weeks"
    ));
    output.push_str(&format!(
        "  {:-<26}  {:-<10}  {:-<10}  {:->5}\n",
        "", "", "", ""
    ));

    for period in periods {
        let marker = match today {
            Some(date) if period.contains(date) => "*",
            _ => " ",
        };
        output.push_str(&format!(
            "{} {:<26}  {:<10}  {:<10}  {:>5}\n",
            marker,
            period.label(),
            period.start.to_string(),
            period.end.to_string(),
            period.week_count(),
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::calendar;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_current_term() {
        let term = calendar::resolve(date(2025, 9, 15)).unwrap();
        let output = format_current_term(date(2025, 9, 15), &term);

        assert_eq!(
            output,
            "Date:   2025-09-15\n\
             Term:   1st half autumn term 2025\n\
             Runs:   2025-09-01 to 2025-10-25\n\
             Weeks:  8\n"
        );
    }

    #[test]
    fn test_year_schedule() {
        let periods = calendar::periods_for_academic_year(2025);
        let output = format_year_schedule(2025, &periods, Some(date(2026, 1, 20)));
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines[0], "Academic year 2025/26");
        assert_eq!(lines.len(), 10);
        assert!(lines[4].starts_with("  1st half autumn term 2025"));
        assert!(lines[6].starts_with("* 1st half spring term 2026"));
        assert!(lines[6].ends_with("    6"));
        assert!(lines[9].starts_with("  2nd half summer term 2026"));
    }

    #[test]
    fn test_year_schedule_at_last_year() {
        let periods = calendar::periods_for_academic_year(i32::MAX);
        let output = format_year_schedule(i32::MAX, &periods, None);
        assert!(output.starts_with("Academic year 2147483647/?\n"));
    }

    #[test]
    fn test_year_schedule_in_holiday_marks_nothing() {
        let periods = calendar::periods_for_academic_year(2025);
        let output = format_year_schedule(2025, &periods, Some(date(2025, 12, 25)));
        assert!(!output.contains('*'));
    }
}
