pub mod dataset;
pub mod error;
pub mod reading;
pub mod series;
pub mod window;
