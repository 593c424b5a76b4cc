//! Playfield engine core.
//!
//! Pure game logic with no I/O: the shape catalog, the grid, the active
//! piece state machine, ghost projection, and the session that orchestrates
//! them. The terminal layer only ever reads [`RenderState`] snapshots.
//!
//! Coordinates are centered on the origin with y pointing up, matching the
//! wall-kick tables in [`data`].

pub mod data;
pub mod ghost;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;

pub use data::{base_cells, kick_table, CellOffset};
pub use ghost::GhostProjection;
pub use grid::Grid;
pub use piece::ActivePiece;
pub use rng::{PiecePicker, SimpleRng};
pub use session::{GameSession, GameSummary, RenderState};
