//! The `zoro validate` command.

use std::path::PathBuf;

use anyhow::Result;

use zoro_core::transfer::{parse_import, validate_records};

use super::import::read_input;

pub fn execute(input: PathBuf) -> Result<()> {
    let text = read_input(&input)?;
    let records = parse_import(&text)?;

    println!("Snapshot: {} ({} exams)", input.display(), records.len());

    let warnings = validate_records(&records);
    for w in &warnings {
        println!("  [#{}] WARNING: {}", w.index, w.message);
    }

    if warnings.is_empty() {
        println!("Snapshot is valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
