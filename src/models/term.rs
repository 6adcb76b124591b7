//! Half-term periods of the UK school year

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which half of a term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TermHalf {
    #[serde(rename = "1st")]
    First,
    #[serde(rename = "2nd")]
    Second,
}

impl fmt::Display for TermHalf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "1st"),
            Self::Second => write!(f, "2nd"),
        }
    }
}

/// One of the three terms of the academic year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Autumn,
    Spring,
    Summer,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Autumn => write!(f, "autumn"),
            Self::Spring => write!(f, "spring"),
            Self::Summer => write!(f, "summer"),
        }
    }
}

/// A half-term window, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TermPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub half: TermHalf,
    pub season: Season,
}

impl TermPeriod {
    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Whole days between start and end
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Number of lesson weeks: the day span divided by seven, rounded up
    pub fn week_count(&self) -> u32 {
        let days = self.span_days().max(0);
        // Periods are at most a few months long
        ((days + 6) / 7) as u32
    }

    /// e.g. "1st half autumn term 2024"
    pub fn label(&self) -> String {
        format!(
            "{} half {} term {}",
            self.half,
            self.season,
            self.start.year()
        )
    }
}

impl fmt::Display for TermPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A term period paired with its computed week count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedTerm {
    pub period: TermPeriod,
    pub week_count: u32,
}

impl ResolvedTerm {
    pub fn new(period: TermPeriod) -> Self {
        Self {
            week_count: period.week_count(),
            period,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn autumn_first(year: i32) -> TermPeriod {
        TermPeriod {
            start: date(year, 9, 1),
            end: date(year, 10, 25),
            half: TermHalf::First,
            season: Season::Autumn,
        }
    }

    #[test]
    fn test_contains_is_inclusive() {
        let period = autumn_first(2025);
        assert!(period.contains(date(2025, 9, 1)));
        assert!(period.contains(date(2025, 10, 25)));
        assert!(!period.contains(date(2025, 8, 31)));
        assert!(!period.contains(date(2025, 10, 26)));
    }

    #[test]
    fn test_week_count_rounds_up() {
        let period = autumn_first(2025);
        assert_eq!(period.span_days(), 54);
        assert_eq!(period.week_count(), 8);

        let exact = TermPeriod {
            end: date(2025, 9, 15),
            ..period
        };
        assert_eq!(exact.week_count(), 2);
    }

    #[test]
    fn test_label() {
        assert_eq!(autumn_first(2024).label(), "1st half autumn term 2024");
    }

    #[test]
    fn test_half_serialization() {
        assert_eq!(serde_json::to_string(&TermHalf::Second).unwrap(), "\"2nd\"");
        assert_eq!(serde_json::to_string(&Season::Spring).unwrap(), "\"spring\"");
    }
}
