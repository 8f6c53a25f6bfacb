//! The `zoro clear` command.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use zoro_core::store::ClearOutcome;

use super::GlobalOpts;

pub fn execute(opts: &GlobalOpts, yes: bool) -> Result<()> {
    let (_, mut store) = opts.open()?;

    let confirmed = yes || confirm(store.len())?;
    let outcome = store.clear_if(|_| confirmed)?;

    match outcome {
        ClearOutcome::Cleared { removed } => println!("Deleted {removed} exam(s)."),
        ClearOutcome::Declined => println!("Nothing deleted."),
    }
    Ok(())
}

/// Ask on stderr, read the answer from stdin. Anything but y/yes declines,
/// including end of input.
fn confirm(count: usize) -> Result<bool> {
    eprint!(
        "Are you sure you want to delete all {count} exam(s) of history? \
         This action cannot be undone. [y/N] "
    );
    std::io::stderr()
        .flush()
        .context("failed to write confirmation prompt")?;

    let mut answer = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("failed to read confirmation answer")?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
