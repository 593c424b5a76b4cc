//! Engine configuration.
//!
//! All tunables live in one value struct so a session can be constructed for
//! non-default boards (tests use small grids). Validation is fail-fast: a
//! malformed configuration is a construction error, never a silent degrade.

use thiserror::Error;

use crate::types::{
    BOARD_HEIGHT, BOARD_WIDTH, LINES_PER_LEVEL, LOCK_DELAY, MOVE_DELAY, SPAWN_POSITION, STEP_DELAY,
};

/// Configuration error, reported at session construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("board must have positive dimensions, got {width}x{height}")]
    ZeroSizedBoard { width: i32, height: i32 },
    #[error("spawn position ({x}, {y}) is outside the board")]
    SpawnOutOfBounds { x: i32, y: i32 },
    #[error("{name} must be a positive duration, got {value}s")]
    NonPositiveDelay { name: &'static str, value: f32 },
    #[error("lines_per_level must be at least 1")]
    ZeroLinesPerLevel,
}

/// Playfield engine tunables.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Board width in columns.
    pub width: i32,
    /// Board height in rows.
    pub height: i32,
    /// Spawn pivot in board coordinates (origin centered, y-up).
    pub spawn: (i32, i32),
    /// Seconds between automatic downward steps.
    pub step_delay: f32,
    /// Seconds between repeats of held directional input.
    pub move_delay: f32,
    /// Seconds a piece may rest without a successful move before it locks.
    pub lock_delay: f32,
    /// Cleared lines per level-up.
    pub lines_per_level: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            spawn: SPAWN_POSITION,
            step_delay: STEP_DELAY,
            move_delay: MOVE_DELAY,
            lock_delay: LOCK_DELAY,
            lines_per_level: LINES_PER_LEVEL,
        }
    }
}

impl EngineConfig {
    /// Leftmost column of the board this config describes.
    pub fn x_min(&self) -> i32 {
        -self.width / 2
    }

    /// Bottom row of the board this config describes.
    pub fn y_min(&self) -> i32 {
        -self.height / 2
    }

    /// Check the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::ZeroSizedBoard {
                width: self.width,
                height: self.height,
            });
        }

        let (sx, sy) = self.spawn;
        let in_x = sx >= self.x_min() && sx < self.x_min() + self.width;
        let in_y = sy >= self.y_min() && sy < self.y_min() + self.height;
        if !in_x || !in_y {
            return Err(ConfigError::SpawnOutOfBounds { x: sx, y: sy });
        }

        for (name, value) in [
            ("step_delay", self.step_delay),
            ("lock_delay", self.lock_delay),
        ] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(ConfigError::NonPositiveDelay { name, value });
            }
        }
        // A zero move_delay is legal (held input repeats every frame).
        if !(self.move_delay >= 0.0) || !self.move_delay.is_finite() {
            return Err(ConfigError::NonPositiveDelay {
                name: "move_delay",
                value: self.move_delay,
            });
        }

        if self.lines_per_level == 0 {
            return Err(ConfigError::ZeroLinesPerLevel);
        }

        Ok(())
    }
}
