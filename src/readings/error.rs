use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    // "fetched fine but nothing survived parsing" and "parsed fine but
    // nothing is recent" are distinct outcomes for callers.
    #[error("Feed contained no valid readings")]
    NoValidReadings,

    #[error("No readings within the last {window_days} days (cutoff {cutoff})")]
    EmptyWindow { window_days: i64, cutoff: NaiveDate },
}
