//! Error types for toolbar configuration and icon lists.

use thiserror::Error;

/// Errors raised when building a [`ToolbarConfig`](crate::ToolbarConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Batches must hold at least one icon.
    #[error("Batch size must be at least 1")]
    ZeroBatchSize,

    /// Icons must occupy some width or batches never open.
    #[error("Icon width must be at least 1")]
    ZeroIconWidth,
}

/// Problems found in an icon list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IconError {
    /// Two icons share an action. Batch keys derived from them may collide.
    #[error("Action '{action}' is used by icons {first} and {second}")]
    DuplicateAction {
        /// The repeated action.
        action: String,
        /// Index of the first icon using it.
        first: usize,
        /// Index of the second icon using it.
        second: usize,
    },
}
