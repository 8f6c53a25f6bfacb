//! Import/export of history snapshots.
//!
//! A snapshot is a JSON array of [`ExamRecord`] objects. Import applies a
//! deliberately shallow shape check: the payload must be an array, and its
//! first element must carry a non-empty `examName`. Later elements are not
//! inspected beyond what is needed to decode them into records.

use serde_json::Value;

use crate::error::{ExportError, ImportError};
use crate::model::ExamRecord;

/// File name offered for exported snapshots.
pub const EXPORT_FILE_NAME: &str = "zoro_exam_history.json";

/// MIME type of exported snapshots.
pub const EXPORT_MIME_TYPE: &str = "application/json";

/// An exported snapshot, ready to be written wherever the caller likes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Parse and check an import payload.
///
/// Returns the decoded records without touching any store; see
/// [`RecordStore::import`](crate::store::RecordStore::import) for the
/// transactional wrapper.
pub fn parse_import(text: &str) -> Result<Vec<ExamRecord>, ImportError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|_| ImportError::FormatInvalid("not an array".into()))?;

    let Value::Array(items) = value else {
        return Err(ImportError::FormatInvalid("not an array".into()));
    };

    if let Some(first) = items.first() {
        let has_name = first
            .get("examName")
            .and_then(Value::as_str)
            .is_some_and(|name| !name.is_empty());
        if !has_name {
            return Err(ImportError::FormatInvalid("missing examName".into()));
        }
    }

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<ExamRecord>(item)
                .map_err(|e| ImportError::FormatInvalid(format!("record {index}: {e}")))
        })
        .collect()
}

/// Serialize records as a pretty-printed snapshot.
pub fn export_records(records: &[ExamRecord]) -> Result<ExportArtifact, ExportError> {
    if records.is_empty() {
        return Err(ExportError::EmptyCollection);
    }
    let bytes = serde_json::to_vec_pretty(records)?;
    Ok(ExportArtifact {
        file_name: EXPORT_FILE_NAME,
        mime_type: EXPORT_MIME_TYPE,
        bytes,
    })
}

/// A non-fatal issue found in a record.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationWarning {
    /// Position of the record in the collection.
    pub index: usize,
    /// Warning message.
    pub message: String,
}

/// Check records for values the dashboard would render oddly.
///
/// This never runs during import; it backs the `validate` command.
pub fn validate_records(records: &[ExamRecord]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for (index, record) in records.iter().enumerate() {
        if record.exam_name.trim().is_empty() {
            warnings.push(ValidationWarning {
                index,
                message: "examName is empty".into(),
            });
        }

        if !record.percentage.is_finite() {
            warnings.push(ValidationWarning {
                index,
                message: "percentage is not a finite number".into(),
            });
        } else if !(0.0..=100.0).contains(&record.percentage) {
            warnings.push(ValidationWarning {
                index,
                message: format!("percentage {} is outside 0-100", record.percentage),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const VALID_SNAPSHOT: &str = r#"[
  {
    "date": "2024-01-10T00:00:00.000Z",
    "examName": "Math",
    "correct": 8,
    "incorrect": 2,
    "notAttempted": 0,
    "percentage": 80
  },
  {
    "date": "2024-02-10T00:00:00.000Z",
    "examName": "Science",
    "correct": 9,
    "incorrect": 0,
    "notAttempted": 1,
    "percentage": 90
  }
]"#;

    fn reason(err: ImportError) -> String {
        match err {
            ImportError::FormatInvalid(reason) => reason,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_valid_snapshot() {
        let records = parse_import(VALID_SNAPSHOT).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].exam_name, "Science");
        assert_eq!(records[1].not_attempted, 1);
    }

    #[test]
    fn parse_empty_array_is_accepted() {
        assert!(parse_import("[]").unwrap().is_empty());
    }

    #[test]
    fn reject_malformed_json() {
        assert_eq!(reason(parse_import("[{").unwrap_err()), "not an array");
    }

    #[test]
    fn reject_non_array() {
        let err = parse_import(r#"{"examName": "Math"}"#).unwrap_err();
        assert_eq!(reason(err), "not an array");
    }

    #[test]
    fn reject_first_element_without_name() {
        let err = parse_import(r#"[{"date": "2024-01-10", "percentage": 50}]"#).unwrap_err();
        assert_eq!(reason(err), "missing examName");

        let err = parse_import(r#"[{"date": "2024-01-10", "examName": ""}]"#).unwrap_err();
        assert_eq!(reason(err), "missing examName");
    }

    #[test]
    fn later_elements_are_not_name_checked() {
        let payload = r#"[
            {"date": "2024-01-10", "examName": "Math"},
            {"date": "2024-01-11"}
        ]"#;
        let records = parse_import(payload).unwrap();
        assert_eq!(records[1].exam_name, "");
    }

    #[test]
    fn nulls_and_epoch_dates_are_accepted() {
        let payload = r#"[
            {"date": 1704844800000, "examName": "Math", "correct": 8, "percentage": 80},
            {"date": "2024-01-11", "examName": "Science", "correct": null, "percentage": null}
        ]"#;
        let records = parse_import(payload).unwrap();
        assert_eq!(records[0].date, Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap());
        assert_eq!(records[1].correct, 0);
        assert_eq!(records[1].percentage, 0.0);
    }

    #[test]
    fn undecodable_later_element_names_its_index() {
        let payload = r#"[
            {"date": "2024-01-10", "examName": "Math"},
            {"date": "not a date", "examName": "Broken"}
        ]"#;
        let msg = reason(parse_import(payload).unwrap_err());
        assert!(msg.starts_with("record 1:"), "got {msg}");
    }

    #[test]
    fn export_empty_collection_fails() {
        assert!(matches!(
            export_records(&[]),
            Err(ExportError::EmptyCollection)
        ));
    }

    #[test]
    fn export_is_pretty_and_reimportable() {
        let records = parse_import(VALID_SNAPSHOT).unwrap();
        let artifact = export_records(&records).unwrap();
        assert_eq!(artifact.file_name, "zoro_exam_history.json");
        assert_eq!(artifact.mime_type, "application/json");

        let text = String::from_utf8(artifact.bytes).unwrap();
        assert!(text.starts_with("[\n  {\n    \"date\""));
        assert!(text.contains("\"examName\": \"Math\""));
        assert_eq!(parse_import(&text).unwrap(), records);
    }

    #[test]
    fn validate_flags_bad_values() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let records = vec![
            ExamRecord {
                date,
                exam_name: "ok".into(),
                correct: 1,
                incorrect: 0,
                not_attempted: 0,
                percentage: 100.0,
            },
            ExamRecord {
                date,
                exam_name: "  ".into(),
                correct: 0,
                incorrect: 0,
                not_attempted: 0,
                percentage: 120.0,
            },
            ExamRecord {
                date,
                exam_name: "nan".into(),
                correct: 0,
                incorrect: 0,
                not_attempted: 0,
                percentage: f64::NAN,
            },
        ];
        let warnings = validate_records(&records);
        assert_eq!(warnings.len(), 3);
        assert!(warnings.iter().all(|w| w.index != 0));
        assert!(warnings.iter().any(|w| w.message.contains("outside 0-100")));
        assert!(warnings.iter().any(|w| w.message.contains("finite")));
    }
}
