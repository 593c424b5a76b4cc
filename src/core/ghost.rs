//! Ghost projection: where the active piece would land if dropped now.
//!
//! Purely derived state. The scan releases the tracked piece's committed
//! cells so it cannot collide with itself, walks downward keeping the last
//! valid row, then re-commits. The tracked piece itself is never moved.

use crate::core::data::CellOffset;
use crate::core::grid::Grid;
use crate::core::piece::ActivePiece;

/// A non-committing preview of the active piece's resting position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GhostProjection {
    position: (i32, i32),
    cells: [CellOffset; 4],
}

impl GhostProjection {
    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    /// Absolute grid coordinates of the projected cells.
    pub fn absolute_cells(&self) -> [(i32, i32); 4] {
        self.cells
            .map(|(dx, dy)| (self.position.0 + dx, self.position.1 + dy))
    }
}

/// Project `piece` straight down to its lowest valid row.
///
/// `piece` must currently be committed to `grid`; the grid is restored
/// before returning.
pub fn project(piece: &ActivePiece, grid: &mut Grid) -> GhostProjection {
    let (x, start_row) = piece.position();
    let bottom = grid.y_min() - 1;

    grid.release(piece.cells(), piece.position());

    let mut landing = piece.position();
    let mut row = start_row;
    while row >= bottom {
        if grid.is_valid_position(piece.cells(), (x, row)) {
            landing = (x, row);
        } else {
            break;
        }
        row -= 1;
    }

    grid.commit(piece.cells(), piece.position(), piece.kind());

    GhostProjection {
        position: landing,
        cells: *piece.cells(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn committed_piece(grid: &mut Grid, kind: PieceKind, position: (i32, i32)) -> ActivePiece {
        let piece = ActivePiece::spawn(kind, position);
        grid.commit(piece.cells(), piece.position(), kind);
        piece
    }

    #[test]
    fn ghost_lands_on_floor_in_empty_grid() {
        let mut grid = Grid::new(10, 20);
        let piece = committed_piece(&mut grid, PieceKind::O, (-1, 8));

        let ghost = project(&piece, &mut grid);
        assert_eq!(ghost.position(), (-1, grid.y_min()));
    }

    #[test]
    fn ghost_rests_on_stack() {
        let mut grid = Grid::new(10, 20);
        for x in grid.x_min()..grid.x_max() {
            grid.set(x, grid.y_min(), Some(PieceKind::I));
        }
        let piece = committed_piece(&mut grid, PieceKind::O, (-1, 8));

        let ghost = project(&piece, &mut grid);
        assert_eq!(ghost.position(), (-1, grid.y_min() + 1));
    }

    #[test]
    fn ghost_never_mutates_piece_or_grid() {
        let mut grid = Grid::new(10, 20);
        let piece = committed_piece(&mut grid, PieceKind::T, (0, 5));
        let grid_before = grid.clone();
        let piece_before = piece;

        let _ = project(&piece, &mut grid);
        assert_eq!(grid, grid_before);
        assert_eq!(piece, piece_before);
    }

    #[test]
    fn grounded_piece_projects_onto_itself() {
        let mut grid = Grid::new(10, 20);
        let y_min = grid.y_min();
        let piece = committed_piece(&mut grid, PieceKind::O, (-1, y_min));

        let ghost = project(&piece, &mut grid);
        assert_eq!(ghost.position(), piece.position());
        assert_eq!(ghost.absolute_cells(), piece.absolute_cells());
    }

    #[test]
    fn ghost_ignores_own_committed_cells() {
        let mut grid = Grid::new(10, 20);
        // Without the release/re-commit pair the scan would stop immediately
        // on the piece's own cells.
        let piece = committed_piece(&mut grid, PieceKind::I, (0, 0));

        let ghost = project(&piece, &mut grid);
        assert!(ghost.position().1 < piece.position().1);
    }
}
