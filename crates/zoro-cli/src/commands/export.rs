//! The `zoro export` command.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use zoro_core::error::ExportError;

use super::GlobalOpts;

pub fn execute(opts: &GlobalOpts, output: PathBuf) -> Result<()> {
    let (_, store) = opts.open()?;

    let artifact = match store.export() {
        Ok(artifact) => artifact,
        Err(ExportError::EmptyCollection) => {
            println!("No data to export.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if output.as_os_str() == "-" {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&artifact.bytes)?;
        stdout.write_all(b"\n")?;
        return Ok(());
    }

    let path = if output.is_dir() {
        output.join(artifact.file_name)
    } else {
        output
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&path, &artifact.bytes)
        .with_context(|| format!("failed to write export to {}", path.display()))?;

    println!(
        "Exported {} exam(s) to {} ({})",
        store.len(),
        path.display(),
        artifact.mime_type
    );
    Ok(())
}
