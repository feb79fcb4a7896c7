//! One validated, timestamped sensor record, and the per-row parse that
//! either produces it or rejects the row.

use chrono::{NaiveDate, NaiveTime};
use csv::StringRecord;
use thiserror::Error;

/// Minimum field count for a feed row:
/// date, time, temperature, humidity, pressure, altitude, pm2.5, pm10,
/// wind speed, wind direction, gas, rain.
pub const MIN_ROW_FIELDS: usize = 12;

/// A single validated reading from the station feed.
///
/// Temperature is the one mandatory measurement; a row whose temperature
/// does not parse never becomes a `Reading`. Every other numeric field is
/// independently optional: `None` means the raw text failed to parse, which
/// is distinct from a legitimate zero and must stay distinct downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub temperature_c: f64,
    pub humidity_pct: Option<f64>,
    pub pressure_hpa: Option<f64>,
    pub altitude_m: Option<f64>,
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
    pub wind_speed_kmh: Option<f64>,
    pub wind_direction: String,
    pub gas_kohm: Option<f64>,
    pub rain_mm: Option<f64>,
}

/// Why a feed row produced no [`Reading`].
///
/// Rejections never abort a batch; the dataset builder logs them and moves
/// on to the next row.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowRejection {
    #[error("row has {found} fields, expected at least {MIN_ROW_FIELDS}")]
    TooFewFields { found: usize },

    #[error("unparsable date '{value}'")]
    BadDate { value: String },

    #[error("unparsable time '{value}'")]
    BadTime { value: String },

    #[error("unparsable temperature '{value}'")]
    BadTemperature { value: String },
}

impl Reading {
    /// Parses one raw feed row into a `Reading`, or rejects it.
    ///
    /// A row is rejected when it has fewer than [`MIN_ROW_FIELDS`] fields,
    /// when its temperature is not a finite decimal number, or when its
    /// date/time cannot be parsed (a reading without an orderable timestamp
    /// has no place in the chronological dataset). All other numeric fields
    /// degrade to `None` individually instead of dooming the row.
    pub fn parse(row: &StringRecord) -> Result<Reading, RowRejection> {
        if row.len() < MIN_ROW_FIELDS {
            return Err(RowRejection::TooFewFields { found: row.len() });
        }

        let date_text = row[0].trim();
        let date = parse_feed_date(date_text).ok_or_else(|| RowRejection::BadDate {
            value: date_text.to_string(),
        })?;

        let time_text = row[1].trim();
        let time = parse_feed_time(time_text).ok_or_else(|| RowRejection::BadTime {
            value: time_text.to_string(),
        })?;

        let temperature_c =
            parse_finite(&row[2]).ok_or_else(|| RowRejection::BadTemperature {
                value: row[2].trim().to_string(),
            })?;

        Ok(Reading {
            date,
            time,
            temperature_c,
            humidity_pct: parse_finite(&row[3]),
            pressure_hpa: parse_finite(&row[4]),
            altitude_m: parse_finite(&row[5]),
            pm25: parse_finite(&row[6]),
            pm10: parse_finite(&row[7]),
            wind_speed_kmh: parse_finite(&row[8]),
            wind_direction: row[9].trim().to_string(),
            gas_kohm: parse_finite(&row[10]),
            rain_mm: parse_finite(&row[11]),
        })
    }
}

/// Parses a feed date with a fixed, documented convention: ISO `YYYY-MM-DD`
/// first, then day-first `DD/MM/YYYY`.
///
/// The station's feed is day-first where it is ambiguous at all, so a
/// month-first interpretation is never attempted. Relying on whatever the
/// host environment guesses is exactly how ordering and windowing corrupt
/// silently.
pub fn parse_feed_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(text, "%d/%m/%Y"))
        .ok()
}

/// Parses a feed time-of-day: `HH:MM:SS`, then `HH:MM`.
pub fn parse_feed_time(text: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(text, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
        .ok()
}

// NaN and the infinities parse as f64 but are not measurements.
fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
