//! Shape catalog: base cell offsets and wall-kick tables.
//!
//! Offsets are pivot-relative in a y-up coordinate system. Base cells are for
//! rotation index 0; every other orientation is derived by
//! [`rotate_offset`], not looked up. The kick tables are SRS-style: 8 ordered
//! (rotation, direction) transitions with 5 candidate translations each.

use crate::types::PieceKind;

/// Integer (x, y) offset relative to a piece's pivot.
pub type CellOffset = (i32, i32);

/// One row of kick candidates, tried in order; first success wins.
pub type KickRow = [CellOffset; 5];

/// Kick table: rows indexed by `2 * new_rotation - (direction < 0)`, wrapped.
pub type KickTable = [KickRow; 8];

/// Base cell offsets (rotation index 0) for a piece kind.
pub fn base_cells(kind: PieceKind) -> [CellOffset; 4] {
    match kind {
        PieceKind::I => [(-1, 1), (0, 1), (1, 1), (2, 1)],
        PieceKind::J => [(-1, 1), (-1, 0), (0, 0), (1, 0)],
        PieceKind::L => [(1, 1), (-1, 0), (0, 0), (1, 0)],
        PieceKind::O => [(0, 1), (1, 1), (0, 0), (1, 0)],
        PieceKind::S => [(0, 1), (1, 1), (-1, 0), (0, 0)],
        PieceKind::T => [(0, 1), (-1, 0), (0, 0), (1, 0)],
        PieceKind::Z => [(-1, 1), (0, 1), (0, 0), (1, 0)],
    }
}

/// Wall-kick table for a piece kind. I has its own; the rest share one.
pub fn kick_table(kind: PieceKind) -> &'static KickTable {
    match kind {
        PieceKind::I => &I_KICKS,
        _ => &JLOSTZ_KICKS,
    }
}

const I_KICKS: KickTable = [
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
];

const JLOSTZ_KICKS: KickTable = [
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
];

/// Quarter-turn matrix, row-major: [cos, sin, -sin, cos] for 90 degrees.
const ROTATION_MATRIX: [f32; 4] = [0.0, 1.0, -1.0, 0.0];

/// Rotate one offset a quarter turn in `direction` (+1 cw, -1 ccw).
///
/// I and O pivot between cells: their offsets are centered by -0.5 on each
/// axis before the transform and the result rounds toward positive infinity.
/// Cell-centered kinds round to nearest.
pub fn rotate_offset(kind: PieceKind, offset: CellOffset, direction: i32) -> CellOffset {
    let d = direction as f32;
    let (x, y) = (offset.0 as f32, offset.1 as f32);

    match kind {
        PieceKind::I | PieceKind::O => {
            let cx = x - 0.5;
            let cy = y - 0.5;
            let rx = (cx * ROTATION_MATRIX[0] * d) + (cy * ROTATION_MATRIX[1] * d);
            let ry = (cx * ROTATION_MATRIX[2] * d) + (cy * ROTATION_MATRIX[3] * d);
            (rx.ceil() as i32, ry.ceil() as i32)
        }
        _ => {
            let rx = (x * ROTATION_MATRIX[0] * d) + (y * ROTATION_MATRIX[1] * d);
            let ry = (x * ROTATION_MATRIX[2] * d) + (y * ROTATION_MATRIX[3] * d);
            (rx.round() as i32, ry.round() as i32)
        }
    }
}
