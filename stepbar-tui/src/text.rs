use unicode_width::UnicodeWidthChar;

/// Columns a character takes in the terminal. Control characters take none.
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}
