//! Grid: the fixed-size occupancy map.
//!
//! Storage is a flat row-major vector for cache locality; the public
//! coordinate system is centered on the origin with y pointing up, so a
//! 10x20 board spans x in [-5, 5) and y in [-10, 10). All access goes
//! through bounds-checked accessors: out-of-bounds reads report "invalid"
//! rather than panicking, and nothing here mutates state to signal failure.

use arrayvec::ArrayVec;

use crate::core::data::CellOffset;
use crate::types::{Cell, PieceKind};

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: i32,
    height: i32,
    x_min: i32,
    y_min: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid. Dimensions must be positive; callers go through
    /// [`crate::config::EngineConfig::validate`] first.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            x_min: -width / 2,
            y_min: -height / 2,
            cells: vec![None; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Leftmost column, inclusive.
    pub fn x_min(&self) -> i32 {
        self.x_min
    }

    /// Bottom row, inclusive.
    pub fn y_min(&self) -> i32 {
        self.y_min
    }

    /// Rightmost column, exclusive.
    pub fn x_max(&self) -> i32 {
        self.x_min + self.width
    }

    /// Top row, exclusive.
    pub fn y_max(&self) -> i32 {
        self.y_min + self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let col = x - self.x_min;
        let row = y - self.y_min;
        Some((row * self.width + col) as usize)
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= self.x_min && x < self.x_max() && y >= self.y_min && y < self.y_max()
    }

    /// Cell at (x, y); `None` when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Set cell at (x, y). Returns false when out of bounds.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and unoccupied.
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// True iff every absolute cell of `cells + position` is in bounds and
    /// unoccupied. The single source of truth for movement and rotation
    /// legality.
    pub fn is_valid_position(&self, cells: &[CellOffset; 4], position: (i32, i32)) -> bool {
        cells
            .iter()
            .all(|&(dx, dy)| self.is_free(position.0 + dx, position.1 + dy))
    }

    /// Mark a piece's cells occupied.
    ///
    /// Must be paired with [`Grid::release`] around trial mutations so a
    /// piece never collides with its own committed cells.
    pub fn commit(&mut self, cells: &[CellOffset; 4], position: (i32, i32), kind: PieceKind) {
        for &(dx, dy) in cells {
            self.set(position.0 + dx, position.1 + dy, Some(kind));
        }
    }

    /// Mark a piece's cells empty again.
    pub fn release(&mut self, cells: &[CellOffset; 4], position: (i32, i32)) {
        for &(dx, dy) in cells {
            self.set(position.0 + dx, position.1 + dy, None);
        }
    }

    /// True iff every column of `row` is occupied. Rows outside the board
    /// are never full.
    pub fn is_row_full(&self, row: i32) -> bool {
        if row < self.y_min || row >= self.y_max() {
            return false;
        }
        (self.x_min..self.x_max()).all(|x| matches!(self.get(x, row), Some(Some(_))))
    }

    /// Clear `row` and shift every row above it down by one, emptying the
    /// top row.
    fn clear_row(&mut self, row: i32) {
        let width = self.width as usize;
        let start = ((row - self.y_min) * self.width) as usize;

        // Rows above slide into place; with y-up storage the row above lives
        // `width` cells later, so this is one overlapping copy.
        let top = (self.height as usize - 1) * width;
        self.cells.copy_within(start + width.., start);
        for cell in &mut self.cells[top..top + width] {
            *cell = None;
        }
    }

    /// Clear every full row, bottom to top, compacting as it goes.
    ///
    /// A row index that becomes full after compaction is re-tested rather
    /// than advanced, so stacked full rows collapse in one pass. Returns the
    /// row indices cleared, in clearing order (at most 4 per lock).
    pub fn clear_and_compact(&mut self) -> ArrayVec<i32, 4> {
        let mut cleared = ArrayVec::new();
        let mut row = self.y_min;

        while row < self.y_max() {
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared.push(row);
            } else {
                row += 1;
            }
        }

        cleared
    }

    /// Every occupied cell with its rendering tag.
    pub fn occupied_cells(&self) -> impl Iterator<Item = ((i32, i32), PieceKind)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            cell.map(|kind| {
                let x = self.x_min + (i as i32 % self.width);
                let y = self.y_min + (i as i32 / self.width);
                ((x, y), kind)
            })
        })
    }

    /// Empty the whole grid.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}
