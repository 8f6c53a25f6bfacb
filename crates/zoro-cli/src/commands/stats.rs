//! The `zoro stats` command.

use anyhow::Result;

use crate::display::{composition_table, format_percent, summary_table, trend_table};

use super::GlobalOpts;

pub fn execute(opts: &GlobalOpts, format: String) -> Result<()> {
    let (config, store) = opts.open()?;
    let stats = store.stats();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let Some(summary) = &stats.summary else {
        println!("No exam history yet. Import a snapshot or add an exam to get started.");
        return Ok(());
    };

    println!("{}", summary_table(summary));
    println!(
        "Last exam: {} ({})",
        summary.last_exam.exam_name,
        format_percent(summary.last_exam.percentage)
    );

    println!("\nScore composition:");
    println!("{}", composition_table(&stats.composition));

    println!("\nScore trend:");
    println!("{}", trend_table(&stats.trend, &config.date_format));

    Ok(())
}
