//! Game session: spawn, lifecycle, lock, line clears, scoring, game over.
//!
//! The session owns the grid and the active piece and is driven externally:
//! the host calls [`GameSession::update`] once per frame with the elapsed
//! time and the frame's input. Within one update the order is fixed:
//! rotation and hard drop, then repeated directional movement, then the
//! automatic step. A lock triggered by the step check therefore always
//! reflects the frame's latest position.
//!
//! The active piece stays committed to the grid between updates; an update
//! releases it, runs the frame, and commits it back (or locks it). That
//! commit/release pairing is what keeps validity queries from seeing the
//! piece as its own obstacle.

use crate::config::{ConfigError, EngineConfig};
use crate::core::ghost::{self, GhostProjection};
use crate::core::grid::Grid;
use crate::core::piece::ActivePiece;
use crate::core::rng::PiecePicker;
use crate::core::scoring;
use crate::types::{InputState, PieceKind, Spin};

/// Final results exported when the session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub final_score: u32,
    pub final_level: u32,
    pub final_lines: u32,
}

/// Read-only view of one frame, consumed by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub width: i32,
    pub height: i32,
    pub x_min: i32,
    pub y_min: i32,
    /// Occupied cells with their rendering tags (includes the active piece,
    /// which is committed between updates).
    pub locked: Vec<((i32, i32), PieceKind)>,
    /// Active piece cells, drawn on top.
    pub active: Option<([(i32, i32); 4], PieceKind)>,
    /// Ghost cells, drawn under the active piece.
    pub ghost: Option<[(i32, i32); 4]>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: EngineConfig,
    grid: Grid,
    active: Option<ActivePiece>,
    ghost: Option<GhostProjection>,
    picker: PiecePicker,
    score: u32,
    level: u32,
    lines: u32,
    game_over: bool,
    step_timer: f32,
    move_timer: f32,
    lock_timer: f32,
}

impl GameSession {
    /// Build a session and spawn the first piece.
    ///
    /// Fails fast on a malformed configuration.
    pub fn new(config: EngineConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = Grid::new(config.width, config.height);
        let mut session = Self {
            config,
            grid,
            active: None,
            ghost: None,
            picker: PiecePicker::new(seed),
            score: 0,
            level: 0,
            lines: 0,
            game_over: false,
            step_timer: 0.0,
            move_timer: 0.0,
            lock_timer: 0.0,
        };
        session.spawn_piece();
        Ok(session)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for scripted setups.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn ghost(&self) -> Option<&GhostProjection> {
        self.ghost.as_ref()
    }

    /// Score and level as exported at session end.
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            final_score: self.score,
            final_level: self.level,
            final_lines: self.lines,
        }
    }

    /// Draw a random kind and spawn it at the configured coordinate.
    ///
    /// A blocked spawn is terminal: the session flips to game over and the
    /// grid is left untouched.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.picker.next_kind();
        self.spawn_piece_of(kind)
    }

    /// Spawn a specific kind; used by scripted sessions and tests.
    pub fn spawn_piece_of(&mut self, kind: PieceKind) -> bool {
        let piece = ActivePiece::spawn(kind, self.config.spawn);

        if !self.grid.is_valid_position(piece.cells(), piece.position()) {
            self.game_over = true;
            self.active = None;
            self.ghost = None;
            return false;
        }

        self.grid.commit(piece.cells(), piece.position(), kind);
        self.ghost = Some(ghost::project(&piece, &mut self.grid));
        self.active = Some(piece);

        // Per-piece timers start fresh.
        self.step_timer = 0.0;
        self.move_timer = 0.0;
        self.lock_timer = 0.0;

        true
    }

    /// Advance the session by `dt` seconds with this frame's input.
    ///
    /// Inert after game over until [`GameSession::reset`].
    pub fn update(&mut self, dt: f32, input: &InputState) {
        if self.game_over {
            return;
        }
        let Some(mut piece) = self.active else {
            return;
        };

        self.grid.release(piece.cells(), piece.position());
        self.lock_timer += dt;

        // Rotation and hard drop before held movement.
        if input.rotate_ccw {
            self.rotate_piece(&mut piece, Spin::Ccw);
        } else if input.rotate_cw {
            self.rotate_piece(&mut piece, Spin::Cw);
        }

        if input.hard_drop {
            piece.hard_drop(&self.grid);
            self.lock_piece(piece);
            return;
        }

        self.move_timer += dt;
        if self.move_timer >= self.config.move_delay {
            self.handle_move_inputs(&mut piece, input);
        }

        // Automatic step last, so the lock check sees the frame's final
        // position.
        self.step_timer += dt;
        if self.step_timer >= self.config.step_delay {
            self.step_timer = 0.0;
            self.move_piece(&mut piece, 0, -1);

            if self.lock_timer >= self.config.lock_delay {
                self.lock_piece(piece);
                return;
            }
        }

        self.grid.commit(piece.cells(), piece.position(), piece.kind());
        self.ghost = Some(ghost::project(&piece, &mut self.grid));
        self.active = Some(piece);
    }

    /// Clear all session state and spawn again.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.active = None;
        self.ghost = None;
        self.score = 0;
        self.level = 0;
        self.lines = 0;
        self.game_over = false;
        self.step_timer = 0.0;
        self.move_timer = 0.0;
        self.lock_timer = 0.0;
        self.spawn_piece();
    }

    /// Snapshot for the renderer.
    pub fn render_state(&self) -> RenderState {
        RenderState {
            width: self.grid.width(),
            height: self.grid.height(),
            x_min: self.grid.x_min(),
            y_min: self.grid.y_min(),
            locked: self.grid.occupied_cells().collect(),
            active: self
                .active
                .as_ref()
                .map(|p| (p.absolute_cells(), p.kind())),
            ghost: self.ghost.as_ref().map(|g| g.absolute_cells()),
            score: self.score,
            level: self.level,
            lines: self.lines,
            game_over: self.game_over,
        }
    }

    /// Held directional input, gated by the move-repeat timer.
    ///
    /// A successful soft drop also restarts the step timer so gravity does
    /// not double-step the piece.
    fn handle_move_inputs(&mut self, piece: &mut ActivePiece, input: &InputState) {
        if input.soft_drop && self.move_piece(piece, 0, -1) {
            self.step_timer = 0.0;
        }

        if input.move_left {
            self.move_piece(piece, -1, 0);
        } else if input.move_right {
            self.move_piece(piece, 1, 0);
        }
    }

    /// Move wrapper: a successful move resets the lock and move-repeat
    /// timers.
    fn move_piece(&mut self, piece: &mut ActivePiece, dx: i32, dy: i32) -> bool {
        if piece.try_move(&self.grid, dx, dy) {
            self.move_timer = 0.0;
            self.lock_timer = 0.0;
            return true;
        }
        false
    }

    /// Rotate wrapper: an accepted rotation went through at least one
    /// successful kick move, so the same timers reset.
    fn rotate_piece(&mut self, piece: &mut ActivePiece, spin: Spin) -> bool {
        if piece.rotate(&self.grid, spin) {
            self.move_timer = 0.0;
            self.lock_timer = 0.0;
            return true;
        }
        false
    }

    /// Commit the piece permanently, clear lines, score, spawn the next.
    fn lock_piece(&mut self, piece: ActivePiece) {
        self.grid.commit(piece.cells(), piece.position(), piece.kind());
        self.active = None;
        self.ghost = None;

        let cleared = self.grid.clear_and_compact();
        if !cleared.is_empty() {
            // Score with the pre-clear level, then re-derive the level.
            self.score += scoring::line_clear_points(cleared.len() as u32, self.level);
            self.lines += cleared.len() as u32;
            self.level = scoring::level_for_lines(self.lines, self.config.lines_per_level);
        }

        self.spawn_piece();
    }
}
