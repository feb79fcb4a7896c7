//! Projects a windowed dataset into per-metric `(label, value)` series for
//! a chart surface.

use crate::readings::reading::Reading;
use crate::readings::window::WindowedDataset;
use std::fmt;

/// One of the known numeric attributes of a [`Reading`].
///
/// Each metric carries the display label and line color of its chart panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Temperature,
    Humidity,
    Pressure,
    Altitude,
    Pm25,
    Pm10,
    WindSpeed,
    Gas,
    Rain,
}

impl Metric {
    /// The metrics rendered by default, in panel order. Altitude and PM10
    /// are recorded in the feed and projectable, but have no default panel.
    pub const CHARTED: [Metric; 7] = [
        Metric::Temperature,
        Metric::Humidity,
        Metric::Pressure,
        Metric::Pm25,
        Metric::WindSpeed,
        Metric::Rain,
        Metric::Gas,
    ];

    pub const ALL: [Metric; 9] = [
        Metric::Temperature,
        Metric::Humidity,
        Metric::Pressure,
        Metric::Altitude,
        Metric::Pm25,
        Metric::Pm10,
        Metric::WindSpeed,
        Metric::Gas,
        Metric::Rain,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Temperature => "Temperature (°C)",
            Metric::Humidity => "Humidity (%)",
            Metric::Pressure => "Pressure (hPa)",
            Metric::Altitude => "Altitude (m)",
            Metric::Pm25 => "PM2.5 (µg/m³)",
            Metric::Pm10 => "PM10 (µg/m³)",
            Metric::WindSpeed => "Wind (km/h)",
            Metric::Gas => "Gas (kΩ)",
            Metric::Rain => "Rain (mm)",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Metric::Temperature => "#FF6384",
            Metric::Humidity => "#36A2EB",
            Metric::Pressure => "#FFCE56",
            Metric::Altitude => "#9966FF",
            Metric::Pm25 => "#4BC0C0",
            Metric::Pm10 => "#FF9F40",
            Metric::WindSpeed => "#C9CBCF",
            Metric::Gas => "#FDB45C",
            Metric::Rain => "#46BFBD",
        }
    }

    /// The metric's value on one reading. `None` is an absent measurement,
    /// never zero. Temperature is mandatory on every reading, so it is
    /// always present.
    pub fn value(self, reading: &Reading) -> Option<f64> {
        match self {
            Metric::Temperature => Some(reading.temperature_c),
            Metric::Humidity => reading.humidity_pct,
            Metric::Pressure => reading.pressure_hpa,
            Metric::Altitude => reading.altitude_m,
            Metric::Pm25 => reading.pm25,
            Metric::Pm10 => reading.pm10,
            Metric::WindSpeed => reading.wind_speed_kmh,
            Metric::Gas => reading.gas_kohm,
            Metric::Rain => reading.rain_mm,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One point of a projected series.
///
/// `value: None` is a gap: the chart surface must break the line there, not
/// interpolate across it or draw a zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: Option<f64>,
}

impl WindowedDataset<'_> {
    /// Materializes the series for one metric: one point per reading, in the
    /// window's existing ascending order, labeled with the reading's date
    /// (date only, even though the underlying order used date and time).
    pub fn project(&self, metric: Metric) -> Vec<SeriesPoint> {
        self.readings()
            .iter()
            .map(|reading| SeriesPoint {
                label: reading.date.format("%Y-%m-%d").to_string(),
                value: metric.value(reading),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readings::dataset::Dataset;
    use chrono::NaiveDate;

    fn five_reading_window_feed() -> String {
        let mut text = String::from("header\n");
        for (day, hum) in [(5, "55"), (6, "56"), (7, ""), (8, "58"), (9, "59")] {
            text.push_str(&format!(
                "2024-06-{day:02},08:00,2{day}.0,{hum},1012,300,10,15,5,N,8.2,0\n"
            ));
        }
        text
    }

    #[test]
    fn one_point_per_reading_in_window_order() {
        let dataset = Dataset::from_feed_text(&five_reading_window_feed()).unwrap();
        let now = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let window = dataset.select_window(now, 7).unwrap();

        let series = window.project(Metric::Temperature);
        assert_eq!(series.len(), window.len());
        assert_eq!(series.len(), 5);

        let labels: Vec<_> = series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            ["2024-06-05", "2024-06-06", "2024-06-07", "2024-06-08", "2024-06-09"]
        );
        assert_eq!(series[0].value, Some(25.0));
        assert_eq!(series[4].value, Some(29.0));
    }

    #[test]
    fn absent_fields_project_as_gaps_not_zeros() {
        let dataset = Dataset::from_feed_text(&five_reading_window_feed()).unwrap();
        let now = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let window = dataset.select_window(now, 7).unwrap();

        let series = window.project(Metric::Humidity);
        let values: Vec<_> = series.iter().map(|p| p.value).collect();
        assert_eq!(
            values,
            [Some(55.0), Some(56.0), None, Some(58.0), Some(59.0)]
        );
    }

    #[test]
    fn labels_are_dates_without_times() {
        let feed = "header\n2024-06-09,23:59,21.5,60,1012,300,10,15,5,N,8.2,0\n";
        let dataset = Dataset::from_feed_text(feed).unwrap();
        let now = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let window = dataset.select_window(now, 7).unwrap();
        let series = window.project(Metric::Pressure);
        assert_eq!(series[0].label, "2024-06-09");
    }

    #[test]
    fn every_metric_has_a_label_and_color() {
        for metric in Metric::ALL {
            assert!(!metric.label().is_empty());
            assert!(metric.color().starts_with('#'));
        }
    }

    #[test]
    fn charted_metrics_match_the_default_panels() {
        assert_eq!(Metric::CHARTED.len(), 7);
        assert!(!Metric::CHARTED.contains(&Metric::Altitude));
        assert!(!Metric::CHARTED.contains(&Metric::Pm10));
    }
}
