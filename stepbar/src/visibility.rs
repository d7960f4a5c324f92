//! Predicates deciding what the expand control shows.

use crate::icon::{IconBatch, IconDescriptor};

/// Whether the visible batches cover the whole icon list.
///
/// Counts full batches (`visible * size >= len`). Because batches are only
/// ever revealed in order this is exact, the trailing partial batch included.
/// A missing list counts as fully visible.
pub fn all_visible(icons: Option<&[IconDescriptor]>, visible: &[IconBatch], size: usize) -> bool {
    match icons {
        None => true,
        Some(icons) => visible.len().saturating_mul(size) >= icons.len(),
    }
}

/// Whether there are enough icons for the expand control to exist.
pub fn control_available(icons: Option<&[IconDescriptor]>, size: usize) -> bool {
    icons.is_some_and(|icons| icons.len() >= size)
}
