//! The `zoro import` command.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::GlobalOpts;

/// Read a snapshot from a file, or from stdin when the path is `-`.
pub fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read snapshot from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("failed to read snapshot: {}", input.display()))
    }
}

pub fn execute(opts: &GlobalOpts, input: PathBuf) -> Result<()> {
    let text = read_input(&input)?;
    let (_, mut store) = opts.open()?;

    let count = store
        .import(&text)
        .context("import failed, please check the data format (it should be a JSON array)")?;

    println!("Data imported successfully! {count} exam(s) in history.");
    Ok(())
}
