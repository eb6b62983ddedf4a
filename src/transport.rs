use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::data::NormalizedProject;
use crate::errors::ConvertError;
use crate::record::SourceRecord;

/// Read a legacy export: a UTF-8 JSON document whose top-level value is an
/// array of flat record objects.
///
/// The whole document is read and parsed in one shot; there is no streaming.
/// Any failure (unreadable file, invalid JSON, wrong top-level shape, a
/// non-object element) aborts the batch before any transformation begins.
pub fn read_source_records(path: &Path) -> Result<Vec<SourceRecord>, ConvertError> {
    let bytes = fs::read(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Value =
        serde_json::from_slice(&bytes).map_err(|source| ConvertError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    let Value::Array(items) = document else {
        return Err(ConvertError::NotAnArray {
            path: path.to_path_buf(),
        });
    };
    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(map) => records.push(SourceRecord::from_map(map)),
            _ => {
                return Err(ConvertError::NotAnObject {
                    path: path.to_path_buf(),
                    index,
                })
            }
        }
    }
    debug!(records = records.len(), path = %path.display(), "read source records");
    Ok(records)
}

/// Write normalized projects as pretty-printed JSON (2-space indent), in the
/// order given.
///
/// Serialization happens fully in memory before the file is touched, so a
/// write failure never leaves a partially transformed document behind.
pub fn write_projects(path: &Path, projects: &[NormalizedProject]) -> Result<(), ConvertError> {
    let body = serde_json::to_string_pretty(projects)?;
    fs::write(path, body).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(projects = projects.len(), path = %path.display(), "wrote normalized projects");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn reads_an_array_of_record_objects() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("input.json");
        fs::write(&path, r#"[{"Name":"P1"},{"Name":"P2"}]"#).unwrap();
        let records = read_source_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].scalar("Name"), Some(json!("P1")));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let temp = tempdir().unwrap();
        let err = read_source_records(&temp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConvertError::Read { .. }));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, "[{").unwrap();
        let err = read_source_records(&path).unwrap_err();
        assert!(matches!(err, ConvertError::Parse { .. }));
    }

    #[test]
    fn non_array_top_level_is_rejected() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("object.json");
        fs::write(&path, r#"{"Name":"P1"}"#).unwrap();
        let err = read_source_records(&path).unwrap_err();
        assert!(matches!(err, ConvertError::NotAnArray { .. }));
    }

    #[test]
    fn non_object_element_is_rejected_with_its_index() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("mixed.json");
        fs::write(&path, r#"[{"Name":"P1"}, 42]"#).unwrap();
        let err = read_source_records(&path).unwrap_err();
        assert!(matches!(err, ConvertError::NotAnObject { index: 1, .. }));
    }

    #[test]
    fn writes_pretty_printed_json() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("output.json");
        let projects = vec![NormalizedProject::default()];
        write_projects(&path, &projects).unwrap();
        let body = fs::read_to_string(&path).unwrap();
        // 2-space indent convention.
        assert!(body.starts_with("[\n  {\n    "));
        let parsed: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 1);
    }

    #[test]
    fn unwritable_destination_is_a_write_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("no-such-dir").join("output.json");
        let err = write_projects(&path, &[]).unwrap_err();
        assert!(matches!(err, ConvertError::Write { .. }));
    }
}
