//! Term calendar and invoice composition
//!
//! Everything in here is a pure function of its arguments, so callers can
//! recompute invoices whenever the selected template or date changes.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use tutor_invoice::invoice::{calendar, composer};
//! use tutor_invoice::models::{BillingTemplate, LessonDay};
//!
//! let date = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
//! let term = calendar::resolve(date).expect("mid-September is in term");
//! let template = BillingTemplate::new("John Doe", 25.0, "piano", LessonDay::Monday, "Emma Doe");
//!
//! let invoice = composer::compose(&template, &term, None);
//! assert_eq!(invoice.total_cost, 200.0);
//! ```

pub mod calendar;
pub mod composer;
pub mod format;
pub mod placeholders;

pub use calendar::{current_term, periods_for_academic_year, resolve};
pub use composer::{compose, compose_all, first_lesson_date, InvoiceResult, DEFAULT_BODY_TEMPLATE};
pub use placeholders::Placeholder;
