//! Terminal stand-ins for Material Design icon names.

use stepbar::IconRegistry;

const GLYPHS: &[(&str, char)] = &[
    ("MdAdd", '+'),
    ("MdCancel", '⊗'),
    ("MdCheck", '✓'),
    ("MdClose", '✕'),
    ("MdDelete", '⌫'),
    ("MdEdit", '✎'),
    ("MdFavorite", '♥'),
    ("MdHome", '⌂'),
    ("MdKeyboardArrowLeft", '‹'),
    ("MdKeyboardArrowRight", '›'),
    ("MdLocalAirport", '✈'),
    ("MdLocalCafe", '♨'),
    ("MdMenu", '☰'),
    ("MdMusicNote", '♪'),
    ("MdPause", '‖'),
    ("MdPhoto", '▣'),
    ("MdPlayArrow", '▶'),
    ("MdRefresh", '↻'),
    ("MdRemove", '−'),
    ("MdSettings", '⚙'),
    ("MdStar", '★'),
    ("MdStop", '■'),
];

/// Icon registry resolving Material icon names to single characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialGlyphs;

impl IconRegistry for MaterialGlyphs {
    type Drawable = char;

    fn resolve(&self, glyph: &str) -> Option<char> {
        GLYPHS
            .iter()
            .find(|(name, _)| *name == glyph)
            .map(|(_, ch)| *ch)
    }
}
