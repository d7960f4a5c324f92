//! A mounted toolbar together with its animations.

use std::time::Duration;

use stepbar::{Command, Toolbar};

use crate::animation::{Animator, SpringAnimator};
use crate::control::ControlRotation;
use crate::hit::Target;
use crate::presence::{BatchFrame, BatchTransitions};
use crate::spring::SpringConfig;

/// The expand control as it should be drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlFrame {
    /// Rotation in degrees, 0 to 180.
    pub angle: f32,
    pub flipped: bool,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarFrame<'a> {
    pub grip: bool,
    pub icon_width: u16,
    pub batches: Vec<BatchFrame<'a>>,
    pub control: Option<ControlFrame>,
}

/// A toolbar wired to an animation engine.
///
/// Every command goes through the view so batch and control animations stay
/// in step with the toolbar state. Dropping the view unmounts the toolbar and
/// discards any animation still running.
#[derive(Debug)]
pub struct ToolbarView<A: Animator = SpringAnimator> {
    toolbar: Toolbar,
    animator: A,
    batches: BatchTransitions,
    control: ControlRotation,
}

impl ToolbarView<SpringAnimator> {
    pub fn new(toolbar: Toolbar) -> Self {
        Self::with_animator(toolbar, SpringAnimator::new())
    }
}

impl<A: Animator> ToolbarView<A> {
    pub fn with_animator(toolbar: Toolbar, animator: A) -> Self {
        let batches = BatchTransitions::new(toolbar.config().icon_width, SpringConfig::DEFAULT);
        let mut view = Self {
            toolbar,
            animator,
            batches,
            control: ControlRotation::new(SpringConfig::CONTROL),
        };
        view.sync();
        view
    }

    fn sync(&mut self) {
        self.batches
            .sync(self.toolbar.visible_batches(), &mut self.animator);
        let flipped = self.toolbar.control().map(|control| control.flipped);
        self.control.sync(flipped, &mut self.animator);
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    pub fn dispatch(&mut self, command: Command) {
        self.toolbar.dispatch(command);
        self.sync();
    }

    pub fn expand(&mut self) {
        self.dispatch(Command::Expand);
    }

    pub fn collapse(&mut self) {
        self.dispatch(Command::Collapse);
    }

    pub fn press_control(&mut self) -> Option<Command> {
        let command = self.toolbar.press_control();
        self.sync();
        command
    }

    pub fn click_icon(&mut self, action: &str) {
        self.toolbar.click_icon(action);
    }

    /// Act on a hit-test result.
    pub fn handle(&mut self, target: &Target) {
        match target {
            Target::Icon(action) => self.click_icon(action),
            Target::Control => {
                self.press_control();
            }
        }
    }

    /// Advance animations by `dt` and drop batches that finished leaving.
    pub fn tick(&mut self, dt: Duration) {
        self.animator.advance(dt);
        self.batches.settle(&mut self.animator);
    }

    pub fn is_animating(&self) -> bool {
        self.batches.is_animating(&self.animator) || self.control.is_animating(&self.animator)
    }

    /// Number of rendered batches, including ones still leaving.
    pub fn rendered_batches(&self) -> usize {
        self.batches.len()
    }

    pub fn frame(&self) -> ToolbarFrame<'_> {
        let control = self.toolbar.control().map(|control| ControlFrame {
            angle: self.control.angle(&self.animator).unwrap_or(0.0),
            flipped: control.flipped,
        });
        ToolbarFrame {
            grip: self.toolbar.has_grip(),
            icon_width: self.toolbar.config().icon_width,
            batches: self.batches.frames(&self.animator).collect(),
            control,
        }
    }

    /// Unmount: release every animation and hand back the engine.
    pub fn into_animator(mut self) -> A {
        self.batches.unmount(&mut self.animator);
        self.control.unmount(&mut self.animator);
        self.animator
    }
}
