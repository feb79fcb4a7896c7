use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Failed to determine config directory")]
    ConfigDirResolution,

    #[error("Failed to create config directory '{0}'")]
    ConfigDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to write theme preference '{0}'")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("Failed to encode theme preference '{0}'")]
    Encode(PathBuf, #[source] serde_json::Error),
}
