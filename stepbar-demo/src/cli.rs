use std::fs;
use std::path::PathBuf;

use clap::Parser;
use stepbar::{ConfigError, DEFAULT_BATCH_SIZE, DEFAULT_ICON_WIDTH, IconDescriptor, ToolbarConfig};

use crate::error::DemoError;

/// Paginated icon toolbar in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// JSON file holding an array of {"icon": ..., "action": ...} objects
    #[arg(long = "icons")]
    pub icons: Option<PathBuf>,

    /// Icons revealed per press of the expand control
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Width of one icon in layout units
    #[arg(long, default_value_t = DEFAULT_ICON_WIDTH)]
    pub icon_width: u16,

    /// Show a drag grip before the icons
    #[arg(long, default_value_t = false)]
    pub grip: bool,

    /// Skip animations and jump straight to the end state
    #[arg(long, default_value_t = false)]
    pub reduced_motion: bool,

    /// Frames per second while animating
    #[arg(long, default_value_t = 60)]
    pub fps: u16,
}

impl CliArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Result<ToolbarConfig, ConfigError> {
        ToolbarConfig::new(self.batch_size, self.icon_width)
    }

    /// Icons from `--icons`, or the built-in set.
    pub fn load_icons(&self) -> Result<Vec<IconDescriptor>, DemoError> {
        let Some(path) = &self.icons else {
            return Ok(default_icons());
        };
        let json = fs::read_to_string(path).map_err(|source| DemoError::ReadIcons {
            path: path.clone(),
            source,
        })?;
        Ok(serde_json::from_str(&json)?)
    }
}

pub fn default_icons() -> Vec<IconDescriptor> {
    vec![
        IconDescriptor::new("MdPlayArrow", "play"),
        IconDescriptor::new("MdPause", "pause"),
        IconDescriptor::new("MdMusicNote", "music note"),
        IconDescriptor::new("MdLocalCafe", "cafe"),
        IconDescriptor::new("MdLocalAirport", "airport"),
        IconDescriptor::new("MdPhoto", "photo"),
        IconDescriptor::new("MdCancel", "cancel"),
    ]
}
