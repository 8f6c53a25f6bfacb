//! Store-level integration tests.
//!
//! Exercises the file-backed store end-to-end: import, persistence across
//! reopen, export, and the derived views over what was persisted.

use chrono::{Duration, TimeZone, Utc};

use zoro_core::model::ExamRecord;
use zoro_core::statistics::{composition_totals, last_exam, summarize, trend_series};
use zoro_core::store::{CorruptStatePolicy, RecordStore};
use zoro_core::view::{SortColumn, SortDirection};
use zoro_storage::{open_store, FileStore, ZoroConfig};

fn make_record(day_offset: i64, name: &str, counts: (u32, u32, u32), percentage: f64) -> ExamRecord {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 9, 15, 30).unwrap();
    ExamRecord {
        date: base + Duration::days(day_offset),
        exam_name: name.into(),
        correct: counts.0,
        incorrect: counts.1,
        not_attempted: counts.2,
        percentage,
    }
}

fn history() -> Vec<ExamRecord> {
    vec![
        make_record(30, "Physics Mock", (40, 8, 2), 80.0),
        make_record(2, "Math Mock", (35, 10, 5), 70.0),
        make_record(45, "Chemistry", (44, 5, 1), 88.5),
        make_record(2, "math revision", (20, 20, 10), 40.0),
        make_record(45, "Biology", (30, 10, 10), 60.0),
    ]
}

fn config_in(dir: &std::path::Path) -> ZoroConfig {
    ZoroConfig {
        data_dir: dir.to_path_buf(),
        on_corrupt: CorruptStatePolicy::Fail,
        ..ZoroConfig::default()
    }
}

#[test]
fn export_import_roundtrip_through_files() {
    let source_dir = tempfile::tempdir().unwrap();
    let mut source = open_store(&config_in(source_dir.path())).unwrap();
    source.replace_all(history()).unwrap();
    let artifact = source.export().unwrap();

    let target_dir = tempfile::tempdir().unwrap();
    let mut target = open_store(&config_in(target_dir.path())).unwrap();
    target
        .import(std::str::from_utf8(&artifact.bytes).unwrap())
        .unwrap();
    assert_eq!(target.all(), history().as_slice());

    let reopened = open_store(&config_in(target_dir.path())).unwrap();
    assert_eq!(reopened.all(), history().as_slice());
}

#[test]
fn failed_import_does_not_touch_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(&config_in(dir.path())).unwrap();
    store.replace_all(history()).unwrap();
    let before = std::fs::read_to_string(dir.path().join("zoroExamHistory.json")).unwrap();

    assert!(store.import("\"just a string\"").is_err());
    assert!(store.import(r#"[{"correct": 3}]"#).is_err());

    let after = std::fs::read_to_string(dir.path().join("zoroExamHistory.json")).unwrap();
    assert_eq!(before, after);
    assert_eq!(store.len(), 5);
}

#[test]
fn stats_ignore_active_views() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(&config_in(dir.path())).unwrap();
    store.replace_all(history()).unwrap();

    let _ = store.search("math");
    let _ = store.sort_by(SortColumn::Percentage).unwrap();

    let summary = summarize(store.all()).unwrap();
    assert_eq!(summary.total_exams, 5);
    assert!((summary.average_percentage - 67.7).abs() < 1e-9);
    assert_eq!(summary.best_percentage, 88.5);
    // Chemistry and Biology share the latest date; Chemistry comes first.
    assert_eq!(summary.last_exam.exam_name, "Chemistry");
    assert_eq!(last_exam(store.all()).unwrap().exam_name, "Chemistry");

    let totals = composition_totals(store.all());
    assert_eq!(
        (totals.correct, totals.incorrect, totals.not_attempted),
        (169, 53, 28)
    );

    let trend: Vec<f64> = trend_series(store.all())
        .iter()
        .map(|p| p.percentage)
        .collect();
    assert_eq!(trend, vec![70.0, 40.0, 80.0, 88.5, 60.0]);
}

#[test]
fn sort_views_are_stable_and_toggle() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(&config_in(dir.path())).unwrap();
    store.replace_all(history()).unwrap();

    let asc = store.sort_by(SortColumn::Date).unwrap();
    let names: Vec<_> = asc.iter().map(|r| r.exam_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Math Mock", "math revision", "Physics Mock", "Chemistry", "Biology"]
    );

    let desc = store.sort_by(SortColumn::Date).unwrap();
    let names: Vec<_> = desc.iter().map(|r| r.exam_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Chemistry", "Biology", "Physics Mock", "Math Mock", "math revision"]
    );
    assert_eq!(store.sort_state().direction, SortDirection::Desc);

    let hits = store.search("MATH");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].exam_name, "Math Mock");
}

#[test]
fn backend_can_be_swapped_for_a_raw_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = RecordStore::load(FileStore::new(dir.path())).unwrap();
    store.append(make_record(0, "Solo", (1, 0, 0), 100.0)).unwrap();

    let raw = std::fs::read_to_string(dir.path().join("zoroExamHistory.json")).unwrap();
    let decoded: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(decoded[0]["examName"], "Solo");
    assert_eq!(decoded[0]["date"], "2024-01-01T09:15:30Z");
}
