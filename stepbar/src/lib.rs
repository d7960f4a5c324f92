//! Core model of a paginated icon toolbar.
//!
//! Icons are split into fixed-size batches. The toolbar starts with a single
//! batch visible and reveals the next one on each expand, or drops back to
//! the first on collapse. Everything in this crate is pure and synchronous;
//! animation and drawing live in `stepbar-tui`.

pub mod config;
pub mod error;
pub mod group;
pub mod icon;
pub mod registry;
pub mod state;
pub mod toolbar;
pub mod visibility;

pub use config::{DEFAULT_BATCH_SIZE, DEFAULT_ICON_WIDTH, ToolbarConfig};
pub use error::{ConfigError, IconError};
pub use group::{batch, batch_count, partition};
pub use icon::{IconBatch, IconDescriptor, check_unique_actions};
pub use registry::IconRegistry;
pub use state::{Command, ToolbarState};
pub use toolbar::{ExpandControl, Toolbar};
pub use visibility::{all_visible, control_available};
