//! Error types for the drinklog load-test scenario.

use thiserror::Error;

/// Record-date computation walked off the end of the supported calendar.
///
/// Only reachable once a single virtual user has executed enough cycles to
/// push `2000-01-01 + cycle` days past `NaiveDate::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("record date out of calendar range: cycle {cycle}")]
pub struct RecordDateOutOfRange {
    pub cycle: u64,
}
