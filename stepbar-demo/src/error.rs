use std::path::PathBuf;

use stepbar::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read icons from {}: {source}", path.display())]
    ReadIcons {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid icon list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
