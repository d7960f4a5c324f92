//! Splitting an icon list into fixed-size batches.

use crate::icon::{IconBatch, IconDescriptor};

/// Get the batch at `index` when icons are grouped `size` at a time.
///
/// Returns `None` only when there is no icon list at all. An index past the
/// end yields an empty batch with an empty key.
pub fn batch(icons: Option<&[IconDescriptor]>, index: usize, size: usize) -> Option<IconBatch> {
    let icons = icons?;
    let start = index.saturating_mul(size).min(icons.len());
    let end = start.saturating_add(size).min(icons.len());
    Some(IconBatch::from_items(icons[start..end].to_vec()))
}

/// Number of batches needed to show every icon.
pub fn batch_count(icons: Option<&[IconDescriptor]>, size: usize) -> usize {
    match icons {
        Some(icons) if size > 0 => icons.len().div_ceil(size),
        _ => 0,
    }
}

/// Every batch of the list, in order.
pub fn partition(icons: Option<&[IconDescriptor]>, size: usize) -> Vec<IconBatch> {
    (0..batch_count(icons, size))
        .filter_map(|index| batch(icons, index, size))
        .collect()
}
