mod charts;
mod client;
mod error;
mod feed;
mod readings;
mod theme;

pub use error::SensorviewError;

pub use client::{Sensorview, DEFAULT_WINDOW_DAYS};

pub use charts::surface::{ChartHandle, ChartRegistry, ChartSurface};

pub use feed::error::FeedError;
pub use feed::source::{FeedSource, HttpFeedSource};

pub use readings::dataset::Dataset;
pub use readings::error::DatasetError;
pub use readings::reading::{parse_feed_date, parse_feed_time, Reading, RowRejection, MIN_ROW_FIELDS};
pub use readings::series::{Metric, SeriesPoint};
pub use readings::window::WindowedDataset;

pub use theme::apply_theme;
pub use theme::effect::AmbientEffect;
pub use theme::error::ThemeError;
pub use theme::store::ThemeStore;
