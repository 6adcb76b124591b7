//! Invoice service
//!
//! Glues the template store and settings to the pure calendar/composer core.
//! This is where "outside term time" becomes an error: the composer itself
//! only ever sees a resolved term.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::Settings;
use crate::error::{TutorError, TutorResult};
use crate::invoice::{calendar, composer, InvoiceResult};
use crate::models::{BillingTemplate, ResolvedTerm, TemplateId};
use crate::storage::Storage;

/// An invoice together with what it was computed from
#[derive(Debug, Clone, Serialize)]
pub struct PreparedInvoice {
    pub template: BillingTemplate,
    pub term: ResolvedTerm,
    pub invoice: InvoiceResult,
}

/// Service for invoice generation
pub struct InvoiceService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> InvoiceService<'a> {
    /// Create a new invoice service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// The half-term containing `date`
    pub fn term_for(&self, date: NaiveDate) -> TutorResult<ResolvedTerm> {
        calendar::resolve(date).ok_or(TutorError::OutsideTerm(date))
    }

    fn compose(&self, template: BillingTemplate, term: ResolvedTerm) -> PreparedInvoice {
        let invoice = composer::compose(&template, &term, self.settings.custom_body());
        PreparedInvoice {
            template,
            term,
            invoice,
        }
    }

    /// Invoice for one template for the term containing `date`
    pub fn prepare(&self, id: TemplateId, date: NaiveDate) -> TutorResult<PreparedInvoice> {
        let template = self
            .storage
            .templates
            .get(id)?
            .ok_or_else(|| TutorError::template_not_found(id.to_string()))?;
        let term = self.term_for(date)?;
        Ok(self.compose(template, term))
    }

    /// Invoice for the selected template
    pub fn prepare_selected(&self, date: NaiveDate) -> TutorResult<PreparedInvoice> {
        let id = self
            .storage
            .templates
            .selected()?
            .ok_or(TutorError::NoSelection)?;
        self.prepare(id, date)
    }

    /// Invoices for every template, in store order
    pub fn prepare_all(&self, date: NaiveDate) -> TutorResult<Vec<PreparedInvoice>> {
        let templates = self.storage.templates.get_all()?;
        if templates.is_empty() {
            return Err(TutorError::NoTemplates);
        }

        let term = self.term_for(date)?;
        let invoices = composer::compose_all(&templates, &term, self.settings.custom_body());

        tracing::debug!(count = invoices.len(), term = %term.period, "prepared invoices");
        Ok(templates
            .into_iter()
            .zip(invoices)
            .map(|(template, invoice)| PreparedInvoice {
                template,
                term,
                invoice,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TutorPaths;
    use crate::models::LessonDay;
    use crate::services::template::{TemplateInput, TemplateService};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TutorPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn add(storage: &Storage, recipient: &str, cost: f64) -> BillingTemplate {
        TemplateService::new(storage)
            .create(TemplateInput {
                recipient: recipient.into(),
                cost,
                instrument: "piano".into(),
                day: LessonDay::Monday,
                students: "Emma Doe".into(),
            })
            .unwrap()
    }

    fn in_term() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 15).unwrap()
    }

    #[test]
    fn test_prepare_uses_term_of_date() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let template = add(&storage, "John Doe", 25.0);

        let prepared = InvoiceService::new(&storage, &settings)
            .prepare(template.id, in_term())
            .unwrap();

        assert_eq!(prepared.invoice.total_cost, 200.0);
        assert_eq!(prepared.term.week_count, 8);
        assert_eq!(prepared.template.id, template.id);
    }

    #[test]
    fn test_outside_term_is_error() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let template = add(&storage, "John Doe", 25.0);
        let service = InvoiceService::new(&storage, &settings);

        let holiday = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert!(matches!(
            service.prepare(template.id, holiday),
            Err(TutorError::OutsideTerm(d)) if d == holiday
        ));
    }

    #[test]
    fn test_custom_body_from_settings() {
        let (_temp_dir, storage) = create_test_storage();
        let mut settings = Settings::default();
        settings.set_custom_body_template(Some("{{recipient}} owes £{{totalCost}}".into()));
        let template = add(&storage, "John Doe", 25.0);

        let prepared = InvoiceService::new(&storage, &settings)
            .prepare(template.id, in_term())
            .unwrap();
        assert_eq!(prepared.invoice.body, "John Doe owes £200.00");
    }

    #[test]
    fn test_prepare_selected() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = InvoiceService::new(&storage, &settings);
        add(&storage, "John Doe", 25.0);
        let jane = add(&storage, "Jane Roe", 30.0);

        assert!(matches!(
            service.prepare_selected(in_term()),
            Err(TutorError::NoSelection)
        ));

        TemplateService::new(&storage).select(jane.id).unwrap();
        let prepared = service.prepare_selected(in_term()).unwrap();
        assert_eq!(prepared.template.recipient, "Jane Roe");
        assert_eq!(prepared.invoice.total_cost, 240.0);
    }

    #[test]
    fn test_prepare_all_in_store_order() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = InvoiceService::new(&storage, &settings);

        assert!(matches!(
            service.prepare_all(in_term()),
            Err(TutorError::NoTemplates)
        ));

        add(&storage, "John Doe", 25.0);
        add(&storage, "Jane Roe", 30.0);

        let all = service.prepare_all(in_term()).unwrap();
        let recipients: Vec<_> = all.iter().map(|p| p.template.recipient.as_str()).collect();
        assert_eq!(recipients, ["John Doe", "Jane Roe"]);
        assert!(all[1].invoice.body.starts_with("Hi Jane Roe,"));
    }
}
