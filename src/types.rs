//! Shared pure data types and engine defaults.
//!
//! Everything here is plain data with no dependencies on the grid or the
//! terminal layer.

/// Default board dimensions (columns x rows).
pub const BOARD_WIDTH: i32 = 10;
pub const BOARD_HEIGHT: i32 = 20;

/// Default spawn pivot, in board coordinates (origin centered, y-up).
pub const SPAWN_POSITION: (i32, i32) = (-1, 8);

/// Default timing, in seconds.
pub const STEP_DELAY: f32 = 1.0;
pub const MOVE_DELAY: f32 = 0.1;
pub const LOCK_DELAY: f32 = 0.5;

/// Level increases every this many cleared lines.
pub const LINES_PER_LEVEL: u32 = 5;

/// Host loop tick length, in milliseconds.
pub const TICK_MS: u32 = 16;

/// Tetromino piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All seven kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Rotation direction for a single quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Cw,
    Ccw,
}

impl Spin {
    /// Signed direction: +1 clockwise, -1 counter-clockwise.
    pub fn direction(&self) -> i32 {
        match self {
            Spin::Cw => 1,
            Spin::Ccw => -1,
        }
    }
}

/// One frame of input, as seen by [`crate::core::GameSession::update`].
///
/// Rotation and hard drop are edge-triggered (one attempt per press); the
/// movement flags are level-triggered and re-applied while held, gated by the
/// session's move-repeat timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    pub rotate_cw: bool,
    pub rotate_ccw: bool,
    pub hard_drop: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub soft_drop: bool,
}

/// A board cell: empty, or locked with the kind that filled it.
///
/// The kind is a rendering tag only; occupancy logic never inspects it.
pub type Cell = Option<PieceKind>;
