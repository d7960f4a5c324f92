use crate::rect::Rect;

/// Something on the toolbar that reacts to a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// An icon, identified by its action.
    Icon(String),
    /// The expand/collapse control.
    Control,
}

/// Clickable regions from the last render, in paint order.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Target)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a region. Empty rectangles are ignored.
    pub fn push(&mut self, rect: Rect, target: Target) {
        if !rect.is_empty() {
            self.regions.push((rect, target));
        }
    }

    /// Find the topmost target at the given coordinates.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<&Target> {
        // Check in reverse order (last painted = on top)
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, target)| target)
    }

    pub fn regions(&self) -> &[(Rect, Target)] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
