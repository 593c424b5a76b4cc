//! Active piece: the movement/rotation state machine.
//!
//! A piece is a small value constructed fresh at every spawn and consumed
//! into the grid at lock. Its four cell offsets are re-derived on every
//! rotation by the catalog transform; rotation is atomic, so either a kick
//! candidate lands or the piece reverts bit-for-bit.
//!
//! All methods take the grid with the piece's own cells released; the
//! session owns that commit/release pairing.

use crate::core::data::{self, CellOffset};
use crate::core::grid::Grid;
use crate::types::{PieceKind, Spin};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivePiece {
    kind: PieceKind,
    rotation: u8,
    position: (i32, i32),
    cells: [CellOffset; 4],
}

impl ActivePiece {
    /// New piece at `position`, rotation index 0, base cells loaded.
    pub fn spawn(kind: PieceKind, position: (i32, i32)) -> Self {
        Self {
            kind,
            rotation: 0,
            position,
            cells: data::base_cells(kind),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Rotation index in [0, 4).
    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    /// Pivot-relative cell offsets for the current rotation.
    pub fn cells(&self) -> &[CellOffset; 4] {
        &self.cells
    }

    /// Absolute grid coordinates of the four cells.
    pub fn absolute_cells(&self) -> [(i32, i32); 4] {
        self.cells
            .map(|(dx, dy)| (self.position.0 + dx, self.position.1 + dy))
    }

    /// Try to translate by (dx, dy). On failure the piece is unchanged.
    pub fn try_move(&mut self, grid: &Grid, dx: i32, dy: i32) -> bool {
        let candidate = (self.position.0 + dx, self.position.1 + dy);
        if grid.is_valid_position(&self.cells, candidate) {
            self.position = candidate;
            return true;
        }
        false
    }

    /// Rotate a quarter turn with wall-kick resolution.
    ///
    /// The rotation index advances, the offsets are re-derived, and the kick
    /// candidates for this transition are tried in order (the accepted kick
    /// also translates the piece). If every candidate fails, index and
    /// offsets revert and the piece is exactly as before.
    pub fn rotate(&mut self, grid: &Grid, spin: Spin) -> bool {
        let direction = spin.direction();
        let original_rotation = self.rotation;

        self.rotation = wrap(self.rotation as i32 + direction, 0, 4) as u8;
        self.apply_rotation(direction);

        if !self.test_wall_kicks(grid, direction) {
            self.rotation = original_rotation;
            self.apply_rotation(-direction);
            return false;
        }

        true
    }

    /// Step down until blocked. Returns rows descended; the caller locks.
    pub fn hard_drop(&mut self, grid: &Grid) -> u32 {
        let mut rows = 0;
        while self.try_move(grid, 0, -1) {
            rows += 1;
        }
        rows
    }

    fn apply_rotation(&mut self, direction: i32) {
        for cell in &mut self.cells {
            *cell = data::rotate_offset(self.kind, *cell, direction);
        }
    }

    fn test_wall_kicks(&mut self, grid: &Grid, direction: i32) -> bool {
        let table = data::kick_table(self.kind);
        let row = kick_index(self.rotation, direction, table.len());

        for &(dx, dy) in &table[row] {
            if self.try_move(grid, dx, dy) {
                return true;
            }
        }

        false
    }
}

/// Kick table row for a transition: `2 * new_rotation`, minus one for
/// counter-clockwise, wrapped into the table.
fn kick_index(new_rotation: u8, direction: i32, rows: usize) -> usize {
    let mut index = 2 * new_rotation as i32;
    if direction < 0 {
        index -= 1;
    }
    wrap(index, 0, rows as i32) as usize
}

/// Wrap `value` into [min, max).
fn wrap(value: i32, min: i32, max: i32) -> i32 {
    if value < min {
        max - (min - value) % (max - min)
    } else {
        min + (value - min) % (max - min)
    }
}
