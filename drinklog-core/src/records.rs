//! Dated drink records and per-user cycle bookkeeping.
//!
//! Each virtual user walks a private sequence of calendar dates anchored at
//! a fixed epoch: cycle `n` targets `epoch + n` days. Because the cycle
//! counter never resets, a user never reuses a `(date, record type)` key.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::api::RECORDS_PATH;
use crate::error::RecordDateOutOfRange;

/// Drink categories the records endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    #[default]
    Soju,
    Beer,
}

impl RecordType {
    /// Path segment used by the delete endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Soju => "soju",
            RecordType::Beer => "beer",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record type every cycle submits.
pub const CYCLE_RECORD_TYPE: RecordType = RecordType::Soju;

/// Amount every cycle submits; one of the server's accepted half-steps.
pub const CYCLE_AMOUNT: f64 = 3.5;

/// Anchor of the record-date sequence.
pub fn record_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).expect("fixed epoch is a valid date")
}

/// Record date for the `cycle`-th task of one virtual user.
///
/// Cycle 1 lands on 2000-01-02, cycle 365 on 2000-12-31 (2000 is a leap
/// year). Fails only when the offset leaves the calendar range.
pub fn record_date(cycle: u64) -> Result<NaiveDate, RecordDateOutOfRange> {
    record_epoch()
        .checked_add_days(Days::new(cycle))
        .ok_or(RecordDateOutOfRange { cycle })
}

/// Per-user monotonic cycle counter.
///
/// Starts at zero; the first `advance` returns 1. Never resets and is never
/// shared across users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleCounter {
    count: u64,
}

impl CycleCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment and return the new cycle number.
    pub fn advance(&mut self) -> u64 {
        self.count += 1;
        self.count
    }

    /// Number of cycles executed so far.
    pub fn current(&self) -> u64 {
        self.count
    }
}

/// Key of a server-side record owned by one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatedRecordKey {
    pub date: NaiveDate,
    pub record_type: RecordType,
}

impl DatedRecordKey {
    /// Delete endpoint path for this record.
    pub fn delete_path(&self) -> String {
        format!("{RECORDS_PATH}/{}/{}", self.date, self.record_type)
    }
}

/// Browse endpoint path for the month containing `date`.
///
/// Year and month are plain numbers; the server does not expect zero
/// padding.
pub fn month_path(date: NaiveDate) -> String {
    format!("{RECORDS_PATH}/{}/{}", date.year(), date.month())
}
