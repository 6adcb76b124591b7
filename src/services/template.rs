//! Template service
//!
//! Business logic for billing template management: validation, lookup by id
//! or recipient, and the current selection.

use crate::config::Settings;
use crate::error::{TutorError, TutorResult};
use crate::models::{BillingTemplate, LessonDay, TemplateId};
use crate::storage::Storage;

/// Fields for a new template
#[derive(Debug, Clone)]
pub struct TemplateInput {
    pub recipient: String,
    pub cost: f64,
    pub instrument: String,
    pub day: LessonDay,
    pub students: String,
}

/// Partial edit of an existing template; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct TemplateUpdate {
    pub recipient: Option<String>,
    pub cost: Option<f64>,
    pub instrument: Option<String>,
    pub day: Option<LessonDay>,
    pub students: Option<String>,
}

impl TemplateUpdate {
    /// True if no field would change
    pub fn is_empty(&self) -> bool {
        self.recipient.is_none()
            && self.cost.is_none()
            && self.instrument.is_none()
            && self.day.is_none()
            && self.students.is_none()
    }
}

/// Service for template management
pub struct TemplateService<'a> {
    storage: &'a Storage,
}

impl<'a> TemplateService<'a> {
    /// Create a new template service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create and persist a new template
    pub fn create(&self, input: TemplateInput) -> TutorResult<BillingTemplate> {
        let template = BillingTemplate::new(
            input.recipient.trim(),
            input.cost,
            input.instrument.trim(),
            input.day,
            input.students.trim(),
        );

        template
            .validate()
            .map_err(|e| TutorError::Validation(e.to_string()))?;

        self.storage.templates.upsert(template.clone())?;
        self.storage.templates.save()?;

        tracing::info!(id = %template.id, recipient = %template.recipient, "created template");
        Ok(template)
    }

    /// Apply a partial edit, refreshing the update timestamp
    pub fn update(&self, id: TemplateId, update: TemplateUpdate) -> TutorResult<BillingTemplate> {
        let mut template = self
            .storage
            .templates
            .get(id)?
            .ok_or_else(|| TutorError::template_not_found(id.to_string()))?;

        if update.is_empty() {
            return Ok(template);
        }

        if let Some(recipient) = update.recipient {
            template.recipient = recipient.trim().to_string();
        }
        if let Some(cost) = update.cost {
            template.cost = cost;
        }
        if let Some(instrument) = update.instrument {
            template.instrument = instrument.trim().to_string();
        }
        if let Some(day) = update.day {
            template.day = day;
        }
        if let Some(students) = update.students {
            template.students = students.trim().to_string();
        }

        template
            .validate()
            .map_err(|e| TutorError::Validation(e.to_string()))?;
        template.touch();

        self.storage.templates.upsert(template.clone())?;
        self.storage.templates.save()?;

        tracing::info!(id = %template.id, "updated template");
        Ok(template)
    }

    /// Delete a template
    pub fn delete(&self, id: TemplateId) -> TutorResult<BillingTemplate> {
        let removed = self
            .storage
            .templates
            .delete(id)?
            .ok_or_else(|| TutorError::template_not_found(id.to_string()))?;
        self.storage.templates.save()?;

        tracing::info!(id = %removed.id, recipient = %removed.recipient, "deleted template");
        Ok(removed)
    }

    /// Get a template by ID
    pub fn get(&self, id: TemplateId) -> TutorResult<Option<BillingTemplate>> {
        self.storage.templates.get(id)
    }

    /// Find a template by full ID, short ID (`tpl-1a2b3c4d`) or recipient name
    ///
    /// A recipient shared by several templates is ambiguous and reported as a
    /// validation error.
    pub fn find(&self, identifier: &str) -> TutorResult<Option<BillingTemplate>> {
        if let Ok(id) = identifier.parse::<TemplateId>() {
            if let Some(template) = self.storage.templates.get(id)? {
                return Ok(Some(template));
            }
        }

        let all = self.storage.templates.get_all()?;
        if let Some(template) = all.iter().find(|t| t.id.matches_short(identifier)) {
            return Ok(Some(template.clone()));
        }

        let mut by_recipient = self.storage.templates.get_by_recipient(identifier)?;
        match by_recipient.len() {
            0 => Ok(None),
            1 => Ok(by_recipient.pop()),
            n => Err(TutorError::Validation(format!(
                "'{}' matches {} templates; use the template ID instead",
                identifier, n
            ))),
        }
    }

    /// Find a template or fail with "not found"
    pub fn require(&self, identifier: &str) -> TutorResult<BillingTemplate> {
        self.find(identifier)?
            .ok_or_else(|| TutorError::template_not_found(identifier))
    }

    /// List all templates in insertion order
    pub fn list(&self) -> TutorResult<Vec<BillingTemplate>> {
        self.storage.templates.get_all()
    }

    /// Make `id` the selected template
    pub fn select(&self, id: TemplateId) -> TutorResult<BillingTemplate> {
        let template = self
            .storage
            .templates
            .get(id)?
            .ok_or_else(|| TutorError::template_not_found(id.to_string()))?;

        self.storage.templates.set_selected(Some(id))?;
        self.storage.templates.save()?;

        tracing::debug!(id = %id, "selected template");
        Ok(template)
    }

    /// Clear the selection
    pub fn clear_selection(&self) -> TutorResult<()> {
        self.storage.templates.set_selected(None)?;
        self.storage.templates.save()
    }

    /// The selected template, if any
    pub fn selected(&self) -> TutorResult<Option<BillingTemplate>> {
        match self.storage.templates.selected()? {
            Some(id) => self.storage.templates.get(id),
            None => Ok(None),
        }
    }

    /// Select the settings' default template when nothing is selected yet
    ///
    /// Returns the template that ends up selected, if any. A default that no
    /// longer exists is ignored. The default selection is never saved, so
    /// clearing the default in settings takes effect on the next run.
    pub fn apply_default_selection(
        &self,
        settings: &Settings,
    ) -> TutorResult<Option<BillingTemplate>> {
        if let Some(current) = self.selected()? {
            return Ok(Some(current));
        }

        let Some(default_id) = settings.default_template_id else {
            return Ok(None);
        };

        match self.storage.templates.get(default_id)? {
            Some(template) => {
                self.storage.templates.select_default(default_id)?;
                Ok(Some(template))
            }
            None => {
                tracing::warn!(id = %default_id, "default template no longer exists");
                Ok(None)
            }
        }
    }
}
