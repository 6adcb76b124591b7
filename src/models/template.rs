//! Billing template model
//!
//! A saved recurring-student billing profile: who gets the invoice, what one
//! lesson costs and which day the lesson is on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TemplateId;
use super::lesson_day::LessonDay;

/// A recurring-student billing profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingTemplate {
    /// Unique identifier
    pub id: TemplateId,

    /// Parent or guardian the invoice is addressed to
    pub recipient: String,

    /// Cost of a single lesson in pounds
    pub cost: f64,

    /// Instrument label, free text ("piano", "bass guitar")
    pub instrument: String,

    /// Weekday the lesson happens on
    pub day: LessonDay,

    /// Student name(s), free text
    pub students: String,

    /// When the template was created
    pub created_at: DateTime<Utc>,

    /// When the template was last modified
    pub updated_at: DateTime<Utc>,
}

impl BillingTemplate {
    /// Create a new template with a fresh id and timestamps
    pub fn new(
        recipient: impl Into<String>,
        cost: f64,
        instrument: impl Into<String>,
        day: LessonDay,
        students: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TemplateId::new(),
            recipient: recipient.into(),
            cost,
            instrument: instrument.into(),
            day,
            students: students.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Validate the template
    pub fn validate(&self) -> Result<(), TemplateValidationError> {
        if self.recipient.trim().is_empty() {
            return Err(TemplateValidationError::EmptyField("recipient"));
        }
        if self.instrument.trim().is_empty() {
            return Err(TemplateValidationError::EmptyField("instrument"));
        }
        if self.students.trim().is_empty() {
            return Err(TemplateValidationError::EmptyField("students"));
        }
        if !self.cost.is_finite() || self.cost < 0.0 {
            return Err(TemplateValidationError::InvalidCost(self.cost));
        }
        Ok(())
    }
}

impl fmt::Display for BillingTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.recipient, self.instrument)
    }
}

/// Validation errors for billing templates
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateValidationError {
    EmptyField(&'static str),
    InvalidCost(f64),
}

impl fmt::Display for TemplateValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "Template {} cannot be empty", field),
            Self::InvalidCost(cost) => {
                write!(f, "Lesson cost must be a non-negative amount, got {}", cost)
            }
        }
    }
}

impl std::error::Error for TemplateValidationError {}
