//! The toolbar component: icons, state and the click callback together.

use std::fmt;

use log::{trace, warn};

use crate::config::ToolbarConfig;
use crate::icon::{IconBatch, IconDescriptor, check_unique_actions};
use crate::state::{Command, ToolbarState};
use crate::visibility::control_available;

type ClickHandler = Box<dyn FnMut(&str)>;

/// What the expand control looks like and does right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandControl {
    /// Drawn mirrored. True once every icon is visible.
    pub flipped: bool,
    /// Command issued when the control is pressed.
    pub command: Command,
}

/// A paginated icon toolbar.
///
/// Owns its [`ToolbarState`] for as long as it is mounted. Dropping the
/// toolbar discards the state.
pub struct Toolbar {
    icons: Option<Vec<IconDescriptor>>,
    config: ToolbarConfig,
    state: ToolbarState,
    grip: bool,
    on_icon_clicked: ClickHandler,
}

impl Toolbar {
    /// Mount a toolbar. Zero sizes in `config` are raised to 1.
    pub fn new(icons: Vec<IconDescriptor>, config: ToolbarConfig) -> Self {
        if let Err(e) = check_unique_actions(&icons) {
            warn!("Toolbar icons are not unique: {}", e);
        }
        Self::mount(Some(icons), config)
    }

    /// A toolbar with no icon list. Everything counts as visible and no
    /// control is shown.
    pub fn without_icons(config: ToolbarConfig) -> Self {
        Self::mount(None, config)
    }

    fn mount(icons: Option<Vec<IconDescriptor>>, config: ToolbarConfig) -> Self {
        let config = config.validate().unwrap_or_else(|e| {
            warn!("Invalid toolbar config, clamping: {}", e);
            config.clamped()
        });
        let state = ToolbarState::initial(icons.as_deref(), config.batch_size);
        Self {
            icons,
            config,
            state,
            grip: false,
            on_icon_clicked: Box::new(|_| {}),
        }
    }

    /// Set the callback invoked with an icon's action when it is clicked.
    pub fn on_icon_clicked(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.on_icon_clicked = Box::new(handler);
        self
    }

    /// Show a drag grip before the icons. Cosmetic only.
    pub fn with_grip(mut self, grip: bool) -> Self {
        self.grip = grip;
        self
    }

    pub fn has_grip(&self) -> bool {
        self.grip
    }

    pub fn icons(&self) -> Option<&[IconDescriptor]> {
        self.icons.as_deref()
    }

    pub fn config(&self) -> &ToolbarConfig {
        &self.config
    }

    pub fn state(&self) -> &ToolbarState {
        &self.state
    }

    pub fn visible_batches(&self) -> &[IconBatch] {
        self.state.visible()
    }

    pub fn all_visible(&self) -> bool {
        self.state.all_visible(self.icons(), self.config.batch_size)
    }

    pub fn control_available(&self) -> bool {
        control_available(self.icons(), self.config.batch_size)
    }

    /// The expand control, if it should be rendered.
    pub fn control(&self) -> Option<ExpandControl> {
        if !self.control_available() {
            return None;
        }
        let flipped = self.all_visible();
        Some(ExpandControl {
            flipped,
            command: if flipped {
                Command::Collapse
            } else {
                Command::Expand
            },
        })
    }

    pub fn dispatch(&mut self, command: Command) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(command, self.icons.as_deref(), self.config.batch_size);
    }

    pub fn expand(&mut self) {
        self.dispatch(Command::Expand);
    }

    pub fn collapse(&mut self) {
        self.dispatch(Command::Collapse);
    }

    /// Press the expand control. Returns the command applied, or `None` when
    /// there is no control.
    pub fn press_control(&mut self) -> Option<Command> {
        let control = self.control()?;
        self.dispatch(control.command);
        Some(control.command)
    }

    /// Report a click on the icon with `action`. State is untouched.
    pub fn click_icon(&mut self, action: &str) {
        trace!("Icon clicked: {}", action);
        (self.on_icon_clicked)(action);
    }
}

impl fmt::Debug for Toolbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toolbar")
            .field("icons", &self.icons)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("grip", &self.grip)
            .finish_non_exhaustive()
    }
}
