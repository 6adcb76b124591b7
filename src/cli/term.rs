//! Term CLI commands
//!
//! Shows which half-term a date falls in and the schedule for a year.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::{format_current_term, format_year_schedule};
use crate::error::TutorResult;
use crate::invoice::calendar;

/// Term subcommands
#[derive(Subcommand)]
pub enum TermCommands {
    /// Show the half-term containing today (or --date)
    Current {
        /// Date to look up (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// Show all six half-terms of an academic year
    Year {
        /// Calendar year the academic year starts in (defaults to the current one)
        #[arg(value_parser = clap::value_parser!(i32).range(1..=9998))]
        start_year: Option<i32>,
    },
}

/// Handle a term command
pub fn handle_term_command(cmd: TermCommands) -> TutorResult<()> {
    match cmd {
        TermCommands::Current { date } => {
            let date = date.unwrap_or_else(calendar::today);
            match calendar::resolve(date) {
                Some(term) => print!("{}", format_current_term(date, &term)),
                None => {
                    println!("{} is outside term time (school holiday).", date);
                    println!(
                        "Run 'tutor-invoice term year {}' to see the term dates.",
                        calendar::academic_year_of(date)
                    );
                }
            }
        }

        TermCommands::Year { start_year } => {
            let today = calendar::today();
            let start_year = start_year.unwrap_or_else(|| calendar::academic_year_of(today));
            let periods = calendar::periods_for_academic_year(start_year);
            print!("{}", format_year_schedule(start_year, &periods, Some(today)));
        }
    }

    Ok(())
}
