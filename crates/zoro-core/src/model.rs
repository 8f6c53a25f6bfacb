//! Core data model types for zoro.
//!
//! An [`ExamRecord`] is one exam attempt. A collection is simply a
//! `Vec<ExamRecord>`: order carries no meaning and duplicates are allowed.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single exam attempt.
///
/// Field names on the wire are camelCase (`examName`, `notAttempted`) so
/// snapshots stay compatible with histories exported by the web dashboard.
///
/// `percentage` is authored independently of the three counts and is never
/// recomputed from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamRecord {
    /// When the exam was taken.
    #[serde(deserialize_with = "deserialize_instant")]
    pub date: DateTime<Utc>,
    /// Name of the exam.
    #[serde(default, deserialize_with = "null_as_default")]
    pub exam_name: String,
    /// Number of correctly answered questions.
    #[serde(default, deserialize_with = "null_as_default")]
    pub correct: u32,
    /// Number of incorrectly answered questions.
    #[serde(default, deserialize_with = "null_as_default")]
    pub incorrect: u32,
    /// Number of questions left unanswered.
    #[serde(default, deserialize_with = "null_as_default")]
    pub not_attempted: u32,
    /// Score for this attempt, expected in `[0, 100]`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub percentage: f64,
}

impl ExamRecord {
    /// Total number of questions in the attempt.
    pub fn question_count(&self) -> u64 {
        u64::from(self.correct) + u64::from(self.incorrect) + u64::from(self.not_attempted)
    }
}

/// Also accepted in the `date` field: milliseconds since the Unix epoch.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawInstant {
    Text(String),
    EpochMillis(i64),
}

/// Parse a timestamp the way exported histories write them.
///
/// Accepts RFC 3339 (`2024-01-10T08:30:00.000Z`, any offset), a naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]` taken as UTC, or a bare `YYYY-MM-DD` taken as
/// midnight UTC.
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(format!("unrecognized date: '{raw}'"))
}

fn deserialize_instant<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match RawInstant::deserialize(deserializer)? {
        RawInstant::Text(raw) => parse_instant(&raw).map_err(serde::de::Error::custom),
        RawInstant::EpochMillis(ms) => Utc
            .timestamp_millis_opt(ms)
            .single()
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {ms}"))),
    }
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
