//! JSON files on disk
//!
//! Settings, the template store and export files are all small JSON
//! documents. Reads distinguish "missing" from "broken"; writes go through a
//! sibling temp file so a crash mid-write never leaves half a document.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::TutorError;

/// Parse `path`, or `None` when it does not exist
fn read_optional<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, TutorError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(TutorError::Io(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    serde_json::from_reader(BufReader::new(file))
        .map(Some)
        .map_err(|e| TutorError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Read JSON from a file, falling back to `T::default()` when it is missing
pub fn read_json<T, P>(path: P) -> Result<T, TutorError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    Ok(read_optional(path.as_ref())?.unwrap_or_default())
}

/// Read JSON from a file that has to exist
pub fn read_json_required<T, P>(path: P) -> Result<T, TutorError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    read_optional(path)?
        .ok_or_else(|| TutorError::Storage(format!("File not found: {}", path.display())))
}

/// Sibling temp path, unique per process so two runs never share one
fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "data.json".to_string());
    path.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}

fn write_temp<T: Serialize>(temp_path: &Path, data: &T) -> Result<(), TutorError> {
    let io_err = |e: std::io::Error| {
        TutorError::Io(format!("Failed to write {}: {}", temp_path.display(), e))
    };

    let mut writer = BufWriter::new(File::create(temp_path).map_err(io_err)?);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| TutorError::Json(format!("Failed to serialize data: {}", e)))?;
    writer.write_all(b"\n").map_err(io_err)?;
    writer.flush().map_err(io_err)?;
    writer.get_ref().sync_all().map_err(io_err)
}

/// Write pretty JSON to `path` atomically, creating parent directories
///
/// The target is either the complete new document or left as it was; the
/// temp file is removed on every failure path.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), TutorError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            TutorError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path);
    let result = write_temp(&temp_path, data).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| {
            TutorError::Io(format!("Failed to replace {}: {}", path.display(), e))
        })
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result?;

    tracing::trace!(path = %path.display(), "wrote json");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Record {
        recipient: String,
        cost: f64,
    }

    fn record() -> Record {
        Record {
            recipient: "John Doe".to_string(),
            cost: 25.0,
        }
    }

    #[test]
    fn test_read_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let data: Record = read_json(temp_dir.path().join("missing.json")).unwrap();
        assert_eq!(data, Record::default());
    }

    #[test]
    fn test_write_and_read_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("record.json");

        write_json_atomic(&path, &record()).unwrap();
        let loaded: Record = read_json(&path).unwrap();
        assert_eq!(loaded, record());
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
        assert!(fs::read_to_string(&path).unwrap().ends_with("}\n"));
    }

    #[test]
    fn test_write_replaces_existing_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("record.json");

        write_json_atomic(&path, &record()).unwrap();
        let mut changed = record();
        changed.cost = 30.0;
        write_json_atomic(&path, &changed).unwrap();

        assert_eq!(read_json_required::<Record, _>(&path).unwrap(), changed);
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("record.json");

        write_json_atomic(&path, &record()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_failed_write_keeps_old_document_and_cleans_up() {
        let temp_dir = TempDir::new().unwrap();
        // A directory at the target path makes the final rename fail
        let path = temp_dir.path().join("record.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let err = write_json_atomic(&path, &record()).unwrap_err();
        assert!(matches!(err, TutorError::Io(_)));
        assert!(path.join("keep").exists());
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("record.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_json::<Record, _>(&path).unwrap_err();
        assert!(matches!(err, TutorError::Storage(_)));
    }

    #[test]
    fn test_read_json_required() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("record.json");

        let err = read_json_required::<Record, _>(&path).unwrap_err();
        assert!(err.to_string().contains("File not found"));

        write_json_atomic(&path, &record()).unwrap();
        let loaded: Record = read_json_required(&path).unwrap();
        assert_eq!(loaded, record());
    }

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let temp = temp_path_for(Path::new("/base/data/templates.json"));
        assert_eq!(temp.parent(), Some(Path::new("/base/data")));
        let name = temp.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(".templates.json."));
        assert!(name.ends_with(".tmp"));
    }
}
