//! The `zoro list` command.

use anyhow::Result;

use zoro_core::view::{SortColumn, SortDirection};

use crate::display::history_table;

use super::GlobalOpts;

pub fn execute(
    opts: &GlobalOpts,
    search: Option<String>,
    sort: Option<String>,
    direction: Option<String>,
) -> Result<()> {
    let (config, mut store) = opts.open()?;

    // Search and sort are separate views of the full collection; clap keeps
    // them from being combined.
    let rows = match (search, sort) {
        (Some(term), _) => store.search(&term),
        (None, Some(column)) => {
            let column: SortColumn = column.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            let rows = match direction {
                Some(d) => {
                    let d: SortDirection = d.parse().map_err(|e: String| anyhow::anyhow!(e))?;
                    store.sort_with(column, d)?
                }
                None => store.sort_by(column)?,
            };
            let state = store.sort_state();
            eprintln!("Sorted by {} ({})", state.column, state.direction);
            rows
        }
        (None, None) => store.all().to_vec(),
    };

    if rows.is_empty() {
        println!("No exam history found.");
        return Ok(());
    }

    println!("{}", history_table(&rows, &config.date_format));
    Ok(())
}
