//! The main entry point: one [`Sensorview`] client per feed, one
//! [`Sensorview::run`] per page load.

use crate::charts::surface::{ChartRegistry, ChartSurface};
use crate::error::SensorviewError;
use crate::feed::source::{FeedSource, HttpFeedSource};
use crate::readings::dataset::Dataset;
use crate::readings::series::Metric;
use bon::bon;
use chrono::{Local, NaiveDate};
use log::info;

/// Default trailing window: the last week of readings.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Client for one station feed.
///
/// A run is a strict single pass (fetch, build, window, project, render)
/// with nothing retained between runs: each run's dataset supersedes the
/// previous one outright. The fetch is the only asynchronous step.
///
/// # Examples
///
/// ```no_run
/// # use sensorview::{ChartHandle, ChartSurface, Sensorview, SensorviewError, SeriesPoint};
/// # struct Panel;
/// # impl ChartHandle for Panel { fn refresh(&mut self) {} }
/// # struct Page;
/// # impl ChartSurface for Page {
/// #     type Handle = Panel;
/// #     fn render(&mut self, _: &str, _: &[SeriesPoint], _: &str) -> Panel { Panel }
/// # }
/// # async fn run() -> Result<(), SensorviewError> {
/// let client = Sensorview::new("https://example.com/station.csv");
/// let mut surface = Page;
///
/// let charts = client.run().surface(&mut surface).call().await?;
/// println!("rendered {} charts", charts.len());
/// # Ok(())
/// # }
/// ```
pub struct Sensorview<F: FeedSource = HttpFeedSource> {
    source: F,
}

impl Sensorview<HttpFeedSource> {
    /// Client fetching the feed over HTTP from `feed_url`.
    pub fn new(feed_url: impl Into<String>) -> Self {
        Self::with_source(HttpFeedSource::new(feed_url))
    }
}

#[bon]
impl<F: FeedSource> Sensorview<F> {
    /// Client over any [`FeedSource`], e.g. canned text in tests.
    pub fn with_source(source: F) -> Self {
        Self { source }
    }

    /// Executes one pipeline run and renders one chart per metric.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.surface(&mut impl ChartSurface)`: **Required.** Receives one
    ///   `render` call per metric once the windowed dataset exists.
    /// * `.now(NaiveDate)`: Optional. The evaluation date for the trailing
    ///   window. Defaults to the local calendar date.
    /// * `.window_days(i64)`: Optional. Window length in calendar days,
    ///   boundary inclusive. Defaults to [`DEFAULT_WINDOW_DAYS`].
    /// * `.metrics(&[Metric])`: Optional. Which metrics to render, in call
    ///   order. Defaults to [`Metric::CHARTED`].
    ///
    /// # Returns
    ///
    /// The [`ChartRegistry`] holding every rendered chart handle. Pass it to
    /// [`apply_theme`](crate::apply_theme) when the theme toggles.
    ///
    /// # Errors
    ///
    /// Any failure aborts the run before a single chart is rendered:
    /// [`FeedError`](crate::FeedError) variants for fetch problems,
    /// [`DatasetError::NoValidReadings`](crate::DatasetError) when nothing
    /// survives parsing, [`DatasetError::EmptyWindow`](crate::DatasetError)
    /// when nothing is recent enough. Row-level problems never surface here;
    /// they are logged and dropped during the build.
    #[builder]
    pub async fn run<S: ChartSurface>(
        &self,
        surface: &mut S,
        now: Option<NaiveDate>,
        window_days: Option<i64>,
        metrics: Option<&[Metric]>,
    ) -> Result<ChartRegistry<S::Handle>, SensorviewError> {
        let now = now.unwrap_or_else(|| Local::now().date_naive());
        let window_days = window_days.unwrap_or(DEFAULT_WINDOW_DAYS);
        let metrics = metrics.unwrap_or(&Metric::CHARTED);

        let feed_text = self.source.fetch().await?;
        let dataset = Dataset::from_feed_text(&feed_text)?;
        let window = dataset.select_window(now, window_days)?;

        let mut registry = ChartRegistry::new();
        for &metric in metrics {
            let points = window.project(metric);
            registry.register(surface.render(metric.label(), &points, metric.color()));
        }
        info!(
            "Rendered {} charts from {} readings within the last {} days",
            registry.len(),
            window.len(),
            window_days
        );
        Ok(registry)
    }
}
