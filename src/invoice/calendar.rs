//! Half-term calendar
//!
//! Maps a date to the UK school half-term it falls in. The boundaries are a
//! fixed table of month/day pairs; they are not calculated or fetched from
//! any external calendar.

use std::ops::RangeInclusive;

use chrono::{Datelike, Local, NaiveDate};

use crate::models::{ResolvedTerm, Season, TermHalf, TermPeriod};

/// A boundary row: (half, season, years after the autumn start year, start (m, d), end (m, d))
type Boundary = (TermHalf, Season, i32, (u32, u32), (u32, u32));

/// Half-terms in chronological order for an academic year starting in September
const BOUNDARIES: [Boundary; 6] = [
    (TermHalf::First, Season::Autumn, 0, (9, 1), (10, 25)),
    (TermHalf::Second, Season::Autumn, 0, (11, 3), (12, 20)),
    (TermHalf::First, Season::Spring, 1, (1, 5), (2, 14)),
    (TermHalf::Second, Season::Spring, 1, (2, 23), (3, 28)),
    (TermHalf::First, Season::Summer, 1, (4, 13), (5, 23)),
    (TermHalf::Second, Season::Summer, 1, (6, 1), (7, 18)),
];

/// Month the academic year starts in
const ACADEMIC_YEAR_START_MONTH: u32 = 9;

/// Academic start years whose six half-terms all fit in four-digit years
pub const SUPPORTED_START_YEARS: RangeInclusive<i32> = 1..=9998;

/// The six half-terms of the academic year starting in September of `start_year`
///
/// Six chronologically ordered periods for any `start_year` in
/// [`SUPPORTED_START_YEARS`]. Outside that range the rows chrono cannot
/// represent are left out, so fewer than six (possibly none) come back.
pub fn periods_for_academic_year(start_year: i32) -> Vec<TermPeriod> {
    BOUNDARIES
        .iter()
        .filter_map(|&(half, season, offset, (sm, sd), (em, ed))| {
            let year = start_year.checked_add(offset)?;
            Some(TermPeriod {
                start: NaiveDate::from_ymd_opt(year, sm, sd)?,
                end: NaiveDate::from_ymd_opt(year, em, ed)?,
                half,
                season,
            })
        })
        .collect()
}

/// The September year of the academic year a date belongs to
///
/// January to August belong to the academic year that started the previous
/// September.
pub fn academic_year_of(date: NaiveDate) -> i32 {
    if date.month() >= ACADEMIC_YEAR_START_MONTH {
        date.year()
    } else {
        date.year() - 1
    }
}

/// The half-term containing `date`, or `None` during holidays
pub fn resolve(date: NaiveDate) -> Option<ResolvedTerm> {
    let resolved = periods_for_academic_year(academic_year_of(date))
        .into_iter()
        .find(|period| period.contains(date))
        .map(ResolvedTerm::new);

    match &resolved {
        Some(term) => tracing::debug!(%date, term = %term.period, weeks = term.week_count, "resolved term"),
        None => tracing::debug!(%date, "date is outside term time"),
    }
    resolved
}

/// The half-term containing today's local date
pub fn current_term() -> Option<ResolvedTerm> {
    resolve(today())
}

/// Today's local wall-clock date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
