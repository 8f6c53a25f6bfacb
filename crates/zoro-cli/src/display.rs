//! Terminal rendering of records and statistics.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use comfy_table::{Cell, Color, Table};

use zoro_core::model::ExamRecord;
use zoro_core::statistics::{CompositionTotals, Summary, TrendPoint};

/// Format `date` with a strftime pattern, falling back to RFC 3339 when the
/// pattern is invalid.
pub fn format_date(date: &DateTime<Utc>, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.to_rfc3339();
    }
    out
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// History table in the column order of the dashboard.
pub fn history_table(records: &[ExamRecord], date_format: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Date",
        "Exam",
        "Correct",
        "Incorrect",
        "Not Attempted",
        "Score",
    ]);

    for r in records {
        table.add_row(vec![
            Cell::new(format_date(&r.date, date_format)),
            Cell::new(&r.exam_name),
            Cell::new(r.correct).fg(Color::Green),
            Cell::new(r.incorrect).fg(Color::Red),
            Cell::new(r.not_attempted).fg(Color::Yellow),
            Cell::new(format_percent(r.percentage)),
        ]);
    }

    table
}

/// The four stat cards.
pub fn summary_table(summary: &Summary) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Total Exams", "Average Score", "Best Score", "Last Score"]);
    table.add_row(vec![
        Cell::new(summary.total_exams),
        Cell::new(format_percent(summary.average_percentage)),
        Cell::new(format_percent(summary.best_percentage)),
        Cell::new(format_percent(summary.last_exam.percentage)),
    ]);
    table
}

/// Correct / incorrect / not-attempted totals with their share of all questions.
pub fn composition_table(totals: &CompositionTotals) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Outcome", "Questions", "Share"]);
    let all = totals.total();
    for (label, value) in totals.slices() {
        let share = if all == 0 {
            0.0
        } else {
            value as f64 / all as f64 * 100.0
        };
        table.add_row(vec![
            Cell::new(label),
            Cell::new(value),
            Cell::new(format_percent(share)),
        ]);
    }
    table
}

/// Score trend, oldest first.
pub fn trend_table(points: &[TrendPoint], date_format: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Date", "Score"]);
    for p in points {
        table.add_row(vec![
            Cell::new(format_date(&p.date, date_format)),
            Cell::new(format_percent(p.percentage)),
        ]);
    }
    table
}
