//! Drawing a [`ToolbarFrame`] into a [`Buffer`].
//!
//! The toolbar is one row tall:
//!
//! ```text
//! ⠿  ▶  ‖  ♪  ♨  ✈  ▣  ›
//! ^  '-batch 0-''-batch 1-' ^ expand control
//! grip
//! ```
//!
//! Each batch is clipped to its animated width, so a batch that is opening
//! or closing shows only the icons that fit.

use stepbar::IconRegistry;

use crate::buffer::Buffer;
use crate::color::Rgb;
use crate::hit::{HitMap, Target};
use crate::rect::Rect;
use crate::view::{ControlFrame, ToolbarFrame};

const GRIP: char = '⠿';

/// Colours and cell sizing for the toolbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTheme {
    pub background: Rgb,
    pub icon: Rgb,
    pub grip: Rgb,
    pub control: Rgb,
    /// Terminal columns taken by one icon.
    pub cells_per_icon: u16,
}

impl Default for RenderTheme {
    fn default() -> Self {
        Self {
            background: Rgb::new(40, 44, 52),
            icon: Rgb::new(220, 223, 228),
            grip: Rgb::new(110, 115, 125),
            control: Rgb::new(97, 175, 239),
            cells_per_icon: 3,
        }
    }
}

/// Convert an animated width to terminal columns, capped at `u16::MAX`.
pub fn width_to_cells(width: f32, icon_width: u16, cells_per_icon: u16) -> u16 {
    if icon_width == 0 || width <= 0.0 {
        return 0;
    }
    let cells = width / f32::from(icon_width) * f32::from(cells_per_icon);
    cells.round().min(f32::from(u16::MAX)) as u16
}

/// Arrow for the expand control at a given rotation.
///
/// The control turns around its vertical axis, so it is seen edge-on
/// half way through.
pub fn control_glyph(angle: f32) -> char {
    if angle < 60.0 {
        '›'
    } else if angle <= 120.0 {
        '│'
    } else {
        '‹'
    }
}

/// Draw the toolbar with its top-left corner at `(x, y)`.
///
/// Returns the clickable regions that were drawn.
pub fn render_toolbar<R>(
    frame: &ToolbarFrame<'_>,
    registry: &R,
    x: u16,
    y: u16,
    theme: &RenderTheme,
    buf: &mut Buffer,
) -> HitMap
where
    R: IconRegistry<Drawable = char>,
{
    let mut hits = HitMap::new();
    let cpi = theme.cells_per_icon.max(1);
    let mut col = x;

    if frame.grip {
        buf.fill(col, y, 2, theme.background);
        buf.put_char(col, y, GRIP, theme.grip, theme.background);
        col = col.saturating_add(2);
    }

    for batch in &frame.batches {
        let cells = width_to_cells(batch.width, frame.icon_width, cpi);
        buf.fill(col, y, cells, theme.background);
        let end = col.saturating_add(cells);
        let fg = theme.background.mix(theme.icon, batch.opacity);

        for (i, icon) in batch.batch.items().iter().enumerate() {
            let slot = col.saturating_add((i as u16).saturating_mul(cpi));
            if slot >= end {
                break;
            }
            let visible = cpi.min(end - slot);
            hits.push(Rect::new(slot, y, visible, 1), Target::Icon(icon.action.clone()));

            let glyph_col = slot.saturating_add(cpi / 2);
            if glyph_col < end {
                if let Some(glyph) = registry.resolve(&icon.glyph) {
                    buf.put_char(glyph_col, y, glyph, fg, theme.background);
                }
            }
        }
        col = end;
    }

    if let Some(control) = frame.control {
        render_control(control, col, y, cpi, theme, buf, &mut hits);
    }

    hits
}

fn render_control(
    control: ControlFrame,
    x: u16,
    y: u16,
    cells: u16,
    theme: &RenderTheme,
    buf: &mut Buffer,
    hits: &mut HitMap,
) {
    buf.fill(x, y, cells, theme.background);
    buf.put_char(
        x.saturating_add(cells / 2),
        y,
        control_glyph(control.angle),
        theme.control,
        theme.background,
    );
    hits.push(Rect::new(x, y, cells, 1), Target::Control);
}
