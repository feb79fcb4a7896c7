use crate::feed::error::FeedError;
use crate::readings::error::DatasetError;
use crate::theme::error::ThemeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SensorviewError {
    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Theme(#[from] ThemeError),
}
