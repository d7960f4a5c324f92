//! Keyed enter/exit transitions for icon batches.
//!
//! [`BatchTransitions`] follows the toolbar's visible batches. A batch that
//! appears opens from zero width; a batch that disappears closes to zero
//! width, then fades out, and only then is dropped. Batches are matched by
//! key, so a batch that comes back while still closing is turned around
//! instead of duplicated.

use log::debug;
use stepbar::IconBatch;

use crate::animation::{AnimationHandle, Animator};
use crate::spring::SpringConfig;

/// Where a rendered batch is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// In the visible list, opening or open.
    Enter,
    /// Removed from the visible list, closing.
    Leave,
    /// Closed, fading out before it is dropped.
    Fade,
}

#[derive(Debug)]
struct Presence {
    batch: IconBatch,
    phase: Phase,
    width: AnimationHandle,
    opacity: AnimationHandle,
}

/// A batch as it should be drawn this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchFrame<'a> {
    pub batch: &'a IconBatch,
    pub width: f32,
    pub opacity: f32,
    pub phase: Phase,
}

/// Rendered batches and their animations.
#[derive(Debug)]
pub struct BatchTransitions {
    entries: Vec<Presence>,
    icon_width: u16,
    spring: SpringConfig,
    mounted: bool,
}

impl BatchTransitions {
    pub fn new(icon_width: u16, spring: SpringConfig) -> Self {
        Self {
            entries: Vec::new(),
            icon_width,
            spring,
            mounted: false,
        }
    }

    /// Width a batch opens to: its real item count times the icon width.
    pub fn target_width(&self, batch: &IconBatch) -> f32 {
        batch.len() as f32 * f32::from(self.icon_width)
    }

    /// Match rendered batches against the visible list.
    ///
    /// Batches present on the first call appear at full width.
    pub fn sync(&mut self, visible: &[IconBatch], animator: &mut impl Animator) {
        let first = !self.mounted;
        self.mounted = true;

        for entry in &mut self.entries {
            let still_visible = visible.iter().any(|b| b.key() == entry.batch.key());
            if !still_visible && entry.phase == Phase::Enter {
                debug!("Batch '{}' leaving", entry.batch.key());
                entry.phase = Phase::Leave;
                animator.retarget(entry.width, 0.0);
            }
        }

        let mut cursor = 0;
        for batch in visible {
            let target = self.target_width(batch);
            match self.entries.iter().position(|e| e.batch.key() == batch.key()) {
                Some(pos) => {
                    let entry = &mut self.entries[pos];
                    if entry.phase != Phase::Enter {
                        debug!("Batch '{}' returning", batch.key());
                        entry.phase = Phase::Enter;
                        animator.retarget(entry.width, target);
                        animator.retarget(entry.opacity, 1.0);
                    }
                    cursor = pos + 1;
                }
                None => {
                    let from = if first { target } else { 0.0 };
                    debug!("Batch '{}' entering", batch.key());
                    let entry = Presence {
                        batch: batch.clone(),
                        phase: Phase::Enter,
                        width: animator.animate(from, target, self.spring),
                        opacity: animator.animate(1.0, 1.0, self.spring),
                    };
                    self.entries.insert(cursor, entry);
                    cursor += 1;
                }
            }
        }
    }

    /// Move leaving batches along and drop the ones that finished.
    ///
    /// Call after the animator advanced. Returns how many batches were dropped.
    pub fn settle(&mut self, animator: &mut impl Animator) -> usize {
        for entry in &mut self.entries {
            if entry.phase == Phase::Leave && animator.is_settled(entry.width) {
                entry.phase = Phase::Fade;
                animator.retarget(entry.opacity, 0.0);
            }
        }

        let before = self.entries.len();
        self.entries.retain(|entry| {
            let done = entry.phase == Phase::Fade && animator.is_settled(entry.opacity);
            if done {
                debug!("Batch '{}' unmounted", entry.batch.key());
                animator.release(entry.width);
                animator.release(entry.opacity);
            }
            !done
        });
        before - self.entries.len()
    }

    /// Batches to draw, in display order.
    pub fn frames<'a>(&'a self, animator: &'a impl Animator) -> impl Iterator<Item = BatchFrame<'a>> {
        self.entries.iter().map(move |entry| BatchFrame {
            batch: &entry.batch,
            width: animator.value(entry.width).unwrap_or(0.0),
            opacity: animator.value(entry.opacity).unwrap_or(0.0),
            phase: entry.phase,
        })
    }

    /// Number of rendered batches, leaving ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True while any batch is opening, closing or fading.
    pub fn is_animating(&self, animator: &impl Animator) -> bool {
        self.entries.iter().any(|entry| {
            entry.phase != Phase::Enter
                || !animator.is_settled(entry.width)
                || !animator.is_settled(entry.opacity)
        })
    }

    /// Drop everything and release all handles.
    pub fn unmount(&mut self, animator: &mut impl Animator) {
        for entry in self.entries.drain(..) {
            animator.release(entry.width);
            animator.release(entry.opacity);
        }
        self.mounted = false;
    }
}
