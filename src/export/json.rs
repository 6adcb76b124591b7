//! JSON template export
//!
//! The export document is also the import format, and YAML exports share it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use crate::error::{TutorError, TutorResult};
use crate::models::{BillingTemplate, TemplateId};
use crate::storage::{read_json_required, Storage};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// All templates plus the selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub templates: Vec<BillingTemplate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<TemplateId>,
}

impl TemplateExport {
    /// Snapshot the template store
    pub fn from_storage(storage: &Storage) -> TutorResult<Self> {
        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            templates: storage.templates.get_all()?,
            selected: storage.templates.selected()?,
        })
    }

    /// Validate the export structure
    ///
    /// Only the major schema version has to match.
    pub fn validate(&self) -> Result<(), String> {
        let major = |v: &str| v.split('.').next().unwrap_or_default().to_string();
        if major(&self.schema_version) != major(EXPORT_SCHEMA_VERSION) {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let mut seen = HashSet::new();
        for template in &self.templates {
            if !seen.insert(template.id) {
                return Err(format!("Duplicate template id {}", template.id));
            }
            template
                .validate()
                .map_err(|e| format!("Template {} ({}): {}", template.id, template.recipient, e))?;
        }

        if let Some(selected) = self.selected {
            if !seen.contains(&selected) {
                return Err(format!("Selected template {} is not in the export", selected));
            }
        }

        Ok(())
    }

    /// Merge into the store: templates with a known id are replaced in place,
    /// new ones are appended. Returns how many templates were written.
    pub fn apply(&self, storage: &Storage) -> TutorResult<usize> {
        for template in &self.templates {
            storage.templates.upsert(template.clone())?;
        }
        if storage.templates.selected()?.is_none() {
            storage.templates.set_selected(self.selected)?;
        }
        storage.templates.save()?;

        tracing::info!(count = self.templates.len(), "imported templates");
        Ok(self.templates.len())
    }
}

/// Export all templates to JSON
pub fn export_templates_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> TutorResult<()> {
    let export = TemplateExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| TutorError::Export(e.to_string()))
}

/// Parse and validate a JSON export
pub fn import_from_json(json_str: &str) -> TutorResult<TemplateExport> {
    let export: TemplateExport =
        serde_json::from_str(json_str).map_err(|e| TutorError::Import(e.to_string()))?;
    export.validate().map_err(TutorError::Import)?;
    Ok(export)
}

/// Read, parse and validate a JSON export file
pub fn import_json_file<P: AsRef<Path>>(path: P) -> TutorResult<TemplateExport> {
    let export: TemplateExport =
        read_json_required(path).map_err(|e| TutorError::Import(e.to_string()))?;
    export.validate().map_err(TutorError::Import)?;
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TutorPaths;
    use crate::models::LessonDay;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TutorPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn seeded() -> (TempDir, Storage, BillingTemplate) {
        let (temp_dir, storage) = create_test_storage();
        let template =
            BillingTemplate::new("John Doe", 25.0, "piano", LessonDay::Monday, "Emma Doe");
        storage.templates.upsert(template.clone()).unwrap();
        storage.templates.set_selected(Some(template.id)).unwrap();
        (temp_dir, storage, template)
    }

    #[test]
    fn test_export_and_import_json() {
        let (_temp_dir, storage, template) = seeded();

        let mut buffer = Vec::new();
        export_templates_json(&storage, &mut buffer, true).unwrap();
        let json = String::from_utf8(buffer).unwrap();
        assert!(json.contains("\"schema_version\": \"1.0.0\""));

        let imported = import_from_json(&json).unwrap();
        assert_eq!(imported.templates, vec![template.clone()]);
        assert_eq!(imported.selected, Some(template.id));
    }

    #[test]
    fn test_apply_into_empty_store() {
        let (_temp_dir, storage, template) = seeded();
        let export = TemplateExport::from_storage(&storage).unwrap();

        let (_other_dir, target) = create_test_storage();
        assert_eq!(export.apply(&target).unwrap(), 1);
        assert_eq!(target.templates.get_all().unwrap(), vec![template.clone()]);
        assert_eq!(target.templates.selected().unwrap(), Some(template.id));
    }

    #[test]
    fn test_apply_replaces_existing_id() {
        let (_temp_dir, storage, template) = seeded();
        let mut export = TemplateExport::from_storage(&storage).unwrap();
        export.templates[0].cost = 40.0;

        export.apply(&storage).unwrap();
        let all = storage.templates.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, template.id);
        assert_eq!(all[0].cost, 40.0);
    }

    #[test]
    fn test_validate_rejects_bad_exports() {
        let (_temp_dir, storage, _template) = seeded();
        let good = TemplateExport::from_storage(&storage).unwrap();
        assert!(good.validate().is_ok());

        let mut wrong_version = good.clone();
        wrong_version.schema_version = "2.0.0".into();
        assert!(wrong_version.validate().is_err());

        let mut minor_bump = good.clone();
        minor_bump.schema_version = "1.3.0".into();
        assert!(minor_bump.validate().is_ok());

        let mut duplicate = good.clone();
        duplicate.templates.push(duplicate.templates[0].clone());
        assert!(duplicate.validate().unwrap_err().contains("Duplicate"));

        let mut invalid = good.clone();
        invalid.templates[0].cost = -3.0;
        assert!(invalid.validate().is_err());

        let mut dangling = good;
        dangling.selected = Some(TemplateId::new());
        assert!(dangling.validate().is_err());
    }

    #[test]
    fn test_import_garbage() {
        assert!(matches!(
            import_from_json("{ not json"),
            Err(TutorError::Import(_))
        ));
    }

    #[test]
    fn test_import_json_file() {
        let (temp_dir, storage, template) = seeded();
        let path = temp_dir.path().join("export.json");
        let mut file = std::fs::File::create(&path).unwrap();
        export_templates_json(&storage, &mut file, false).unwrap();

        let imported = import_json_file(&path).unwrap();
        assert_eq!(imported.templates[0].id, template.id);
        assert!(import_json_file(temp_dir.path().join("missing.json")).is_err());
    }
}
