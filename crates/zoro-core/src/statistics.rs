//! Aggregate statistics over the full collection.
//!
//! Everything here is a pure function of a record slice. Callers always pass
//! the whole collection; a filtered or sorted table view never feeds these.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ExamRecord;

/// Headline numbers for the stat cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of records.
    pub total_exams: usize,
    /// Mean of all percentages.
    pub average_percentage: f64,
    /// Highest percentage.
    pub best_percentage: f64,
    /// The most recent attempt.
    pub last_exam: ExamRecord,
}

/// Summed question outcomes across every record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionTotals {
    pub correct: u64,
    pub incorrect: u64,
    pub not_attempted: u64,
}

impl CompositionTotals {
    /// Sum of all three outcomes.
    pub fn total(&self) -> u64 {
        self.correct + self.incorrect + self.not_attempted
    }

    /// Chart slices as `(label, value)` pairs, in legend order.
    pub fn slices(&self) -> [(&'static str, u64); 3] {
        [
            ("Correct", self.correct),
            ("Incorrect", self.incorrect),
            ("Not Attempted", self.not_attempted),
        ]
    }
}

/// One point of the score trend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: DateTime<Utc>,
    pub percentage: f64,
}

/// Everything the dashboard shows, computed in one pass over the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// `None` when the collection is empty.
    pub summary: Option<Summary>,
    pub composition: CompositionTotals,
    pub trend: Vec<TrendPoint>,
}

impl DashboardStats {
    pub fn compute(records: &[ExamRecord]) -> Self {
        Self {
            summary: summarize(records),
            composition: composition_totals(records),
            trend: trend_series(records),
        }
    }
}

/// Mean percentage, or `None` for an empty collection.
pub fn average_percentage(records: &[ExamRecord]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let sum: f64 = records.iter().map(|r| r.percentage).sum();
    Some(sum / records.len() as f64)
}

/// Highest percentage, or `None` for an empty collection.
pub fn best_percentage(records: &[ExamRecord]) -> Option<f64> {
    records
        .iter()
        .map(|r| r.percentage)
        .reduce(|best, p| if p > best { p } else { best })
}

/// The record with the latest date.
///
/// When several records share the latest date, the first of them in
/// collection order wins.
pub fn last_exam(records: &[ExamRecord]) -> Option<&ExamRecord> {
    records
        .iter()
        .reduce(|latest, r| if r.date > latest.date { r } else { latest })
}

/// Stat-card summary, or `None` for an empty collection.
pub fn summarize(records: &[ExamRecord]) -> Option<Summary> {
    let average = average_percentage(records)?;
    let best = best_percentage(records)?;
    let last = last_exam(records)?;
    Some(Summary {
        total_exams: records.len(),
        average_percentage: average,
        best_percentage: best,
        last_exam: last.clone(),
    })
}

/// Sum the correct/incorrect/not-attempted counts.
pub fn composition_totals(records: &[ExamRecord]) -> CompositionTotals {
    records
        .iter()
        .fold(CompositionTotals::default(), |mut acc, r| {
            acc.correct += u64::from(r.correct);
            acc.incorrect += u64::from(r.incorrect);
            acc.not_attempted += u64::from(r.not_attempted);
            acc
        })
}

/// `(date, percentage)` points in ascending date order.
///
/// Records with the same date keep their collection order.
pub fn trend_series(records: &[ExamRecord]) -> Vec<TrendPoint> {
    let mut points: Vec<TrendPoint> = records
        .iter()
        .map(|r| TrendPoint {
            date: r.date,
            percentage: r.percentage,
        })
        .collect();
    points.sort_by(|a, b| a.date.cmp(&b.date));
    points
}
