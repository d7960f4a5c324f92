//! Toolbar configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Icons per batch when nothing else is configured.
pub const DEFAULT_BATCH_SIZE: usize = 3;

/// Width of a single icon, in pixels.
pub const DEFAULT_ICON_WIDTH: u16 = 35;

/// Sizing of the toolbar's batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarConfig {
    /// Number of icons revealed per expand.
    pub batch_size: usize,

    /// Width of one icon. A batch opens to `items * icon_width`.
    pub icon_width: u16,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            icon_width: DEFAULT_ICON_WIDTH,
        }
    }
}

impl ToolbarConfig {
    /// Create a validated config.
    pub fn new(batch_size: usize, icon_width: u16) -> Result<Self, ConfigError> {
        Self {
            batch_size,
            icon_width,
        }
        .validate()
    }

    /// Set the batch size.
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the icon width.
    pub fn icon_width(mut self, icon_width: u16) -> Self {
        self.icon_width = icon_width;
        self
    }

    /// Raise zero sizes to 1.
    pub fn clamped(self) -> Self {
        Self {
            batch_size: self.batch_size.max(1),
            icon_width: self.icon_width.max(1),
        }
    }

    /// Check that both sizes are non-zero.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }
        if self.icon_width == 0 {
            return Err(ConfigError::ZeroIconWidth);
        }
        Ok(self)
    }
}
