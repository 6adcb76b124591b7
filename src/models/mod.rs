//! Core data models for tutor-invoice
//!
//! Billing templates and the half-term periods invoices are computed for.

pub mod ids;
pub mod lesson_day;
pub mod template;
pub mod term;

pub use ids::TemplateId;
pub use lesson_day::{LessonDay, LessonDayParseError};
pub use template::{BillingTemplate, TemplateValidationError};
pub use term::{ResolvedTerm, Season, TermHalf, TermPeriod};
