//! Subcommand implementations.

use std::path::PathBuf;

use anyhow::Result;

use zoro_core::store::RecordStore;
use zoro_storage::config::load_config_from;
use zoro_storage::{open_store, FileStore, ZoroConfig};

pub mod add;
pub mod clear;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod stats;
pub mod validate;

/// Flags shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalOpts {
    pub config: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
}

impl GlobalOpts {
    /// Resolve the effective configuration; `--data-dir` wins over everything.
    pub fn load_config(&self) -> Result<ZoroConfig> {
        let mut config = load_config_from(self.config.as_deref())?;
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        Ok(config)
    }

    /// Load the configuration and open the record store it points at.
    pub fn open(&self) -> Result<(ZoroConfig, RecordStore<FileStore>)> {
        let config = self.load_config()?;
        let store = open_store(&config)?;
        tracing::debug!(
            data_dir = %config.data_dir.display(),
            records = store.len(),
            "opened record store"
        );
        Ok((config, store))
    }
}
