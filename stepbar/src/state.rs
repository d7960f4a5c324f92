//! The expand/collapse state machine.

use log::{debug, trace};

use crate::group::batch;
use crate::icon::{IconBatch, IconDescriptor};
use crate::visibility::{all_visible, control_available};

/// Input to [`ToolbarState::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Reveal the next batch.
    Expand,
    /// Go back to the first batch only.
    Collapse,
}

/// The batches currently on screen.
///
/// Always a prefix of the full partition of the icon list: batch `i` here is
/// batch `i` of the partition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolbarState {
    visible: Vec<IconBatch>,
}

impl ToolbarState {
    /// State right after mount: the first batch, even when it is empty.
    pub fn initial(icons: Option<&[IconDescriptor]>, size: usize) -> Self {
        Self {
            visible: vec![batch(icons, 0, size.max(1)).unwrap_or_default()],
        }
    }

    pub fn visible(&self) -> &[IconBatch] {
        &self.visible
    }

    /// Number of visible batches.
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn is_collapsed(&self) -> bool {
        self.visible.len() <= 1
    }

    pub fn all_visible(&self, icons: Option<&[IconDescriptor]>, size: usize) -> bool {
        all_visible(icons, &self.visible, size.max(1))
    }

    /// Apply a command and return the next state.
    ///
    /// `Expand` does nothing when the control is unavailable or everything is
    /// already shown. A `size` of 0 is treated as 1.
    pub fn apply(mut self, command: Command, icons: Option<&[IconDescriptor]>, size: usize) -> Self {
        let size = size.max(1);
        match command {
            Command::Expand => {
                if !control_available(icons, size) || self.all_visible(icons, size) {
                    trace!("Expand ignored: {} batches visible", self.visible.len());
                    return self;
                }
                let next = batch(icons, self.visible.len(), size).unwrap_or_default();
                debug!("Expand: batch {} '{}'", self.visible.len(), next.key());
                self.visible.push(next);
            }
            Command::Collapse => {
                if self.visible.len() > 1 {
                    debug!("Collapse: dropping {} batches", self.visible.len() - 1);
                }
                self.visible.truncate(1);
            }
        }
        self
    }
}
