use super::Cell;
use crate::color::Rgb;
use crate::text::char_width;

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Write a glyph, marking the next cell as a continuation when it is wide.
    ///
    /// Returns the number of columns used.
    pub fn put_char(&mut self, x: u16, y: u16, char: char, fg: Rgb, bg: Rgb) -> u16 {
        let width = char_width(char).max(1) as u16;
        self.set(x, y, Cell::new(char).with_fg(fg).with_bg(bg));
        for offset in 1..width {
            let Some(cell) = self.get_mut(x.saturating_add(offset), y) else {
                break;
            };
            *cell = Cell::new(' ').with_fg(fg).with_bg(bg);
            cell.wide_continuation = true;
        }
        width
    }

    /// Write a string starting at `(x, y)`, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, fg: Rgb, bg: Rgb) -> u16 {
        let mut col = x;
        for ch in text.chars() {
            if col >= self.width {
                break;
            }
            col = col.saturating_add(self.put_char(col, y, ch, fg, bg));
        }
        col - x
    }

    /// Paint `width` cells of background starting at `(x, y)`.
    pub fn fill(&mut self, x: u16, y: u16, width: u16, bg: Rgb) {
        for col in x..x.saturating_add(width) {
            self.set(col, y, Cell::new(' ').with_bg(bg));
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }

    /// The characters of one row, continuation cells skipped.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
    }
}
