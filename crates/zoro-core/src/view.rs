//! Derived views: sorting and name search over a collection.
//!
//! Both operations take a borrowed slice and return a new `Vec`; the input
//! is never reordered in place.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::ExamRecord;

/// A sortable column of the history table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    Date,
    ExamName,
    Correct,
    Incorrect,
    NotAttempted,
    Percentage,
}

impl SortColumn {
    /// All columns, in table order.
    pub const ALL: [SortColumn; 6] = [
        SortColumn::Date,
        SortColumn::ExamName,
        SortColumn::Correct,
        SortColumn::Incorrect,
        SortColumn::NotAttempted,
        SortColumn::Percentage,
    ];

    /// Compare two records on this column, ascending.
    pub fn compare(self, a: &ExamRecord, b: &ExamRecord) -> Ordering {
        match self {
            SortColumn::Date => a.date.cmp(&b.date),
            SortColumn::ExamName => a.exam_name.cmp(&b.exam_name),
            SortColumn::Correct => a.correct.cmp(&b.correct),
            SortColumn::Incorrect => a.incorrect.cmp(&b.incorrect),
            SortColumn::NotAttempted => a.not_attempted.cmp(&b.not_attempted),
            SortColumn::Percentage => a.percentage.total_cmp(&b.percentage),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortColumn::Date => write!(f, "date"),
            SortColumn::ExamName => write!(f, "examName"),
            SortColumn::Correct => write!(f, "correct"),
            SortColumn::Incorrect => write!(f, "incorrect"),
            SortColumn::NotAttempted => write!(f, "notAttempted"),
            SortColumn::Percentage => write!(f, "percentage"),
        }
    }
}

impl FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "date" => Ok(SortColumn::Date),
            "examname" | "name" | "exam" => Ok(SortColumn::ExamName),
            "correct" => Ok(SortColumn::Correct),
            "incorrect" => Ok(SortColumn::Incorrect),
            "notattempted" => Ok(SortColumn::NotAttempted),
            "percentage" | "score" => Ok(SortColumn::Percentage),
            _ => Err(format!("unknown sort column: {s}")),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort direction: {other}")),
        }
    }
}

/// The column and direction of the most recent sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortState {
    /// Newest first.
    fn default() -> Self {
        Self {
            column: SortColumn::Date,
            direction: SortDirection::Desc,
        }
    }
}

impl SortState {
    /// Advance the state for a click on `column` and return the new direction.
    ///
    /// Re-selecting the current column while ascending flips to descending;
    /// anything else starts ascending.
    pub fn toggle(&mut self, column: SortColumn) -> SortDirection {
        let direction = if self.column == column && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        *self = SortState { column, direction };
        direction
    }
}

/// Return a sorted copy of `records`.
///
/// Records that compare equal keep their relative order: `slice::sort_by`
/// is a stable sort, and the descending comparator is the exact reverse of
/// the ascending one so ties still compare `Equal`.
pub fn sort_records(
    records: &[ExamRecord],
    column: SortColumn,
    direction: SortDirection,
) -> Vec<ExamRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ord = column.compare(a, b);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    sorted
}

/// Return the records whose exam name contains `term`, ignoring case.
///
/// An empty term matches everything.
pub fn filter_by_name(records: &[ExamRecord], term: &str) -> Vec<ExamRecord> {
    if term.is_empty() {
        return records.to_vec();
    }
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|r| r.exam_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
