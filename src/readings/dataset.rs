//! Assembles raw feed text into the canonical chronologically ordered
//! collection of valid readings for one fetch cycle.

use crate::readings::error::DatasetError;
use crate::readings::reading::Reading;
use crate::readings::window::WindowedDataset;
use chrono::{Duration, NaiveDate};
use csv::ReaderBuilder;
use log::{debug, info, warn};

/// Every valid [`Reading`] from one fetch cycle, ascending by `(date, time)`.
///
/// Built once per cycle and immutable afterwards; the next cycle's dataset
/// supersedes it outright, there is no merging or incremental update.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    readings: Vec<Reading>,
}

impl Dataset {
    /// Parses the full feed text into a `Dataset`.
    ///
    /// The first row is always treated as a header and skipped, never
    /// validated as data. Every remaining row goes through
    /// [`Reading::parse`]; rejected rows are logged and dropped, and a row
    /// the CSV reader itself cannot decode is likewise skipped rather than
    /// aborting the batch. Equal `(date, time)` keys keep their feed order
    /// (stable sort).
    ///
    /// # Errors
    ///
    /// [`DatasetError::NoValidReadings`] when not a single row survives,
    /// so callers can tell "no data" apart from an empty-but-fine feed.
    pub fn from_feed_text(text: &str) -> Result<Dataset, DatasetError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut readings = Vec::new();
        for (index, result) in reader.records().enumerate() {
            // 1-based file row, accounting for the header.
            let row_number = index + 2;
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    warn!("Skipping unreadable feed row {row_number}: {e}");
                    continue;
                }
            };
            match Reading::parse(&record) {
                Ok(reading) => readings.push(reading),
                Err(rejection) => debug!("Dropping feed row {row_number}: {rejection}"),
            }
        }

        if readings.is_empty() {
            return Err(DatasetError::NoValidReadings);
        }

        readings.sort_by_key(|r| (r.date, r.time));
        info!("Built dataset of {} readings", readings.len());
        Ok(Dataset { readings })
    }

    /// Restricts the dataset to the trailing `window_days` calendar days
    /// relative to `now`, boundary inclusive: a reading dated exactly
    /// `now - window_days` is retained.
    ///
    /// Since the dataset is ascending by date the window is the suffix
    /// starting at the first in-window reading, found by binary search
    /// rather than a full scan.
    ///
    /// # Errors
    ///
    /// [`DatasetError::EmptyWindow`] when valid data exists but none of it
    /// is recent enough, a different failure than [`DatasetError::NoValidReadings`].
    pub fn select_window(
        &self,
        now: NaiveDate,
        window_days: i64,
    ) -> Result<WindowedDataset<'_>, DatasetError> {
        let cutoff = now - Duration::days(window_days);
        let start = self.readings.partition_point(|r| r.date < cutoff);
        let readings = &self.readings[start..];
        if readings.is_empty() {
            return Err(DatasetError::EmptyWindow {
                window_days,
                cutoff,
            });
        }
        Ok(WindowedDataset::new(readings, cutoff))
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}
