//! zoro-storage: configuration and persistence backends.
//!
//! Implements the `KeyValueStore` trait on top of the local file system and
//! loads the user's configuration.

pub mod config;
pub mod file;

use anyhow::{Context, Result};

use zoro_core::store::RecordStore;

pub use config::{load_config, load_config_from, ZoroConfig};
pub use file::FileStore;

/// Open the record store described by `config`.
pub fn open_store(config: &ZoroConfig) -> Result<RecordStore<FileStore>> {
    let backend = FileStore::new(&config.data_dir);
    RecordStore::load_with_policy(backend, config.on_corrupt).with_context(|| {
        format!(
            "failed to load exam history from {}",
            config.data_dir.display()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use zoro_core::store::{CorruptStatePolicy, HISTORY_KEY};
    use zoro_core::traits::KeyValueStore;

    fn config_in(dir: &std::path::Path, on_corrupt: CorruptStatePolicy) -> ZoroConfig {
        ZoroConfig {
            data_dir: dir.to_path_buf(),
            on_corrupt,
            ..ZoroConfig::default()
        }
    }

    #[test]
    fn open_fresh_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&config_in(dir.path(), CorruptStatePolicy::Fail)).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn corrupt_history_honours_policy() {
        let dir = tempfile::tempdir().unwrap();
        FileStore::new(dir.path())
            .set(HISTORY_KEY, "definitely not json")
            .unwrap();

        let err = open_store(&config_in(dir.path(), CorruptStatePolicy::Fail))
            .err()
            .unwrap();
        assert!(format!("{err:#}").contains("corrupt"));

        let store = open_store(&config_in(dir.path(), CorruptStatePolicy::Reset)).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn mutations_survive_reopen() {
        use chrono::{TimeZone, Utc};
        use zoro_core::model::ExamRecord;

        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), CorruptStatePolicy::Fail);

        let mut store = open_store(&config).unwrap();
        store
            .append(ExamRecord {
                date: Utc.with_ymd_and_hms(2024, 4, 2, 10, 30, 0).unwrap(),
                exam_name: "Chemistry".into(),
                correct: 12,
                incorrect: 3,
                not_attempted: 5,
                percentage: 60.0,
            })
            .unwrap();

        let reopened = open_store(&config).unwrap();
        assert_eq!(reopened.all(), store.all());
    }
}
