//! Template repository for JSON storage
//!
//! Manages loading and saving billing templates, and the current selection,
//! to templates.json. Templates keep the order they were added in.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::error::TutorError;
use crate::models::{BillingTemplate, TemplateId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable template data structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateData {
    #[serde(default)]
    pub templates: Vec<BillingTemplate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<TemplateId>,

    /// `selected` came from the settings' default and is never written out
    #[serde(skip)]
    pub selection_is_default: bool,
}

/// What `save` writes: the data minus a default-only selection
#[derive(Serialize)]
struct TemplateFile<'a> {
    templates: &'a [BillingTemplate],

    #[serde(skip_serializing_if = "Option::is_none")]
    selected: Option<TemplateId>,
}

/// Repository for template persistence
pub struct TemplateRepository {
    path: PathBuf,
    data: RwLock<TemplateData>,
}

impl TemplateRepository {
    /// Create a new template repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(TemplateData::default()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, TemplateData>, TutorError> {
        self.data
            .read()
            .map_err(|e| TutorError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, TemplateData>, TutorError> {
        self.data
            .write()
            .map_err(|e| TutorError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load templates from disk
    ///
    /// A selection pointing at a template that no longer exists is dropped.
    pub fn load(&self) -> Result<(), TutorError> {
        let mut file_data: TemplateData = read_json(&self.path)?;

        if let Some(selected) = file_data.selected {
            if !file_data.templates.iter().any(|t| t.id == selected) {
                tracing::warn!(%selected, "dropping selection of missing template");
                file_data.selected = None;
            }
        }

        tracing::debug!(count = file_data.templates.len(), "loaded templates");
        *self.write()? = file_data;
        Ok(())
    }

    /// Save templates to disk
    ///
    /// A selection made by [`Self::select_default`] stays in memory only.
    pub fn save(&self) -> Result<(), TutorError> {
        let data = self.read()?;
        let file = TemplateFile {
            templates: &data.templates,
            selected: data.selected.filter(|_| !data.selection_is_default),
        };
        write_json_atomic(&self.path, &file)
    }

    /// Get a template by ID
    pub fn get(&self, id: TemplateId) -> Result<Option<BillingTemplate>, TutorError> {
        Ok(self.read()?.templates.iter().find(|t| t.id == id).cloned())
    }

    /// Get all templates in insertion order
    pub fn get_all(&self) -> Result<Vec<BillingTemplate>, TutorError> {
        Ok(self.read()?.templates.clone())
    }

    /// Number of stored templates
    pub fn count(&self) -> Result<usize, TutorError> {
        Ok(self.read()?.templates.len())
    }

    /// Get templates whose recipient matches `name` (case-insensitive)
    pub fn get_by_recipient(&self, name: &str) -> Result<Vec<BillingTemplate>, TutorError> {
        let needle = name.trim().to_lowercase();
        Ok(self
            .read()?
            .templates
            .iter()
            .filter(|t| t.recipient.trim().to_lowercase() == needle)
            .cloned()
            .collect())
    }

    /// Insert a new template at the end, or replace one with the same ID in place
    pub fn upsert(&self, template: BillingTemplate) -> Result<(), TutorError> {
        let mut data = self.write()?;
        match data.templates.iter_mut().find(|t| t.id == template.id) {
            Some(existing) => *existing = template,
            None => data.templates.push(template),
        }
        Ok(())
    }

    /// Delete a template, clearing the selection if it pointed at it
    pub fn delete(&self, id: TemplateId) -> Result<Option<BillingTemplate>, TutorError> {
        let mut data = self.write()?;
        let Some(index) = data.templates.iter().position(|t| t.id == id) else {
            return Ok(None);
        };

        let removed = data.templates.remove(index);
        if data.selected == Some(id) {
            data.selected = None;
            data.selection_is_default = false;
        }
        Ok(Some(removed))
    }

    /// The currently selected template ID
    pub fn selected(&self) -> Result<Option<TemplateId>, TutorError> {
        Ok(self.read()?.selected)
    }

    /// Select a template (or clear the selection with `None`)
    pub fn set_selected(&self, id: Option<TemplateId>) -> Result<(), TutorError> {
        let mut data = self.write()?;
        if let Some(id) = id {
            if !data.templates.iter().any(|t| t.id == id) {
                return Err(TutorError::template_not_found(id.to_string()));
            }
        }
        data.selected = id;
        data.selection_is_default = false;
        Ok(())
    }

    /// Select the settings' default template for this run only
    pub fn select_default(&self, id: TemplateId) -> Result<(), TutorError> {
        self.set_selected(Some(id))?;
        self.write()?.selection_is_default = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LessonDay;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TemplateRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("templates.json");
        let repo = TemplateRepository::new(path);
        (temp_dir, repo)
    }

    fn template(recipient: &str) -> BillingTemplate {
        BillingTemplate::new(recipient, 25.0, "piano", LessonDay::Monday, "Emma")
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.selected().unwrap().is_none());
    }

    #[test]
    fn test_upsert_keeps_insertion_order() {
        let (_temp_dir, repo) = create_test_repo();
        let a = template("Zed");
        let b = template("Amy");
        repo.upsert(a.clone()).unwrap();
        repo.upsert(b.clone()).unwrap();

        let mut edited = a.clone();
        edited.cost = 30.0;
        repo.upsert(edited).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].recipient, "Zed");
        assert_eq!(all[0].cost, 30.0);
        assert_eq!(all[1].id, b.id);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (temp_dir, repo) = create_test_repo();
        let a = template("John Doe");
        let b = template("Jane Roe");
        repo.upsert(a.clone()).unwrap();
        repo.upsert(b.clone()).unwrap();
        repo.set_selected(Some(b.id)).unwrap();
        repo.save().unwrap();

        let repo2 = TemplateRepository::new(temp_dir.path().join("templates.json"));
        repo2.load().unwrap();
        let all = repo2.get_all().unwrap();
        assert_eq!(all, vec![a, b.clone()]);
        assert_eq!(repo2.selected().unwrap(), Some(b.id));
    }

    #[test]
    fn test_delete_clears_selection() {
        let (_temp_dir, repo) = create_test_repo();
        let a = template("John Doe");
        repo.upsert(a.clone()).unwrap();
        repo.set_selected(Some(a.id)).unwrap();

        let removed = repo.delete(a.id).unwrap();
        assert_eq!(removed.map(|t| t.id), Some(a.id));
        assert!(repo.selected().unwrap().is_none());
        assert!(repo.delete(a.id).unwrap().is_none());
    }

    #[test]
    fn test_select_unknown_fails() {
        let (_temp_dir, repo) = create_test_repo();
        let err = repo.set_selected(Some(TemplateId::new())).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_get_by_recipient_case_insensitive() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(template("John Doe")).unwrap();
        repo.upsert(template("Jane Roe")).unwrap();

        let found = repo.get_by_recipient("  john doe ").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].recipient, "John Doe");
    }

    #[test]
    fn test_load_drops_dangling_selection() {
        let (temp_dir, repo) = create_test_repo();
        let data = TemplateData {
            templates: vec![template("John Doe")],
            selected: Some(TemplateId::new()),
            ..Default::default()
        };
        write_json_atomic(temp_dir.path().join("templates.json"), &data).unwrap();

        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 1);
        assert!(repo.selected().unwrap().is_none());
    }

    #[test]
    fn test_default_selection_is_not_saved() {
        let (temp_dir, repo) = create_test_repo();
        let a = template("John Doe");
        repo.upsert(a.clone()).unwrap();
        repo.select_default(a.id).unwrap();
        assert_eq!(repo.selected().unwrap(), Some(a.id));

        repo.upsert(template("Jane Roe")).unwrap();
        repo.save().unwrap();

        let reloaded = TemplateRepository::new(temp_dir.path().join("templates.json"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.count().unwrap(), 2);
        assert!(reloaded.selected().unwrap().is_none());
    }

    #[test]
    fn test_explicit_selection_replaces_default() {
        let (temp_dir, repo) = create_test_repo();
        let a = template("John Doe");
        repo.upsert(a.clone()).unwrap();
        repo.select_default(a.id).unwrap();
        repo.set_selected(Some(a.id)).unwrap();
        repo.save().unwrap();

        let reloaded = TemplateRepository::new(temp_dir.path().join("templates.json"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.selected().unwrap(), Some(a.id));
    }
}
