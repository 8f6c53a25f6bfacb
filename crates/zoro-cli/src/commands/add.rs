//! The `zoro add` command.

use anyhow::Result;
use chrono::Utc;

use zoro_core::model::{parse_instant, ExamRecord};

use super::GlobalOpts;

pub fn execute(
    opts: &GlobalOpts,
    name: String,
    correct: u32,
    incorrect: u32,
    not_attempted: u32,
    percentage: f64,
    date: Option<String>,
) -> Result<()> {
    anyhow::ensure!(!name.trim().is_empty(), "exam name must not be empty");
    anyhow::ensure!(
        (0.0..=100.0).contains(&percentage),
        "percentage must be between 0 and 100"
    );

    let date = match date {
        Some(raw) => parse_instant(&raw).map_err(|e| anyhow::anyhow!(e))?,
        None => Utc::now(),
    };

    let (_, mut store) = opts.open()?;
    store.append(ExamRecord {
        date,
        exam_name: name.clone(),
        correct,
        incorrect,
        not_attempted,
        percentage,
    })?;

    println!("Recorded {name} ({percentage:.2}%). {} exam(s) in history.", store.len());
    Ok(())
}
