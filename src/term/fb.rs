//! Styled character framebuffer for terminal rendering.

use crossterm::style::Color;

/// Per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Color,
    pub bg: Color,
    pub dim: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Color::Grey,
            bg: Color::Black,
            dim: false,
        }
    }
}

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermCell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for TermCell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D buffer of styled characters, built by the view and flushed by the
/// renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<TermCell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![TermCell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<TermCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y as usize * self.width as usize + x as usize])
    }

    /// Write one cell; off-buffer writes are dropped.
    pub fn put(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        if x < self.width && y < self.height {
            self.cells[y as usize * self.width as usize + x as usize] = TermCell { ch, style };
        }
    }

    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: CellStyle) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i as u16, y, ch, style);
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put(x + dx, y + dy, ch, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_and_get() {
        let mut fb = FrameBuffer::new(8, 4);
        let style = CellStyle::default();
        fb.put(3, 2, '#', style);
        assert_eq!(fb.get(3, 2).map(|c| c.ch), Some('#'));
        assert_eq!(fb.get(0, 0).map(|c| c.ch), Some(' '));
    }

    #[test]
    fn out_of_bounds_writes_dropped() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.put(4, 0, '#', CellStyle::default());
        fb.put(0, 4, '#', CellStyle::default());
        assert_eq!(fb.get(4, 0), None);
        assert!(fb
            .cells
            .iter()
            .all(|c| c.ch == ' '));
    }

    #[test]
    fn put_str_writes_run() {
        let mut fb = FrameBuffer::new(10, 2);
        fb.put_str(1, 1, "score", CellStyle::default());
        let row: String = (1..6).filter_map(|x| fb.get(x, 1).map(|c| c.ch)).collect();
        assert_eq!(row, "score");
    }
}
