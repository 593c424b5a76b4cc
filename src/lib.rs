//! Quadfall: a tetromino playfield engine with a terminal front-end.
//!
//! The engine ([`core`]) is deterministic and frame-driven: the host calls
//! [`core::GameSession::update`] with elapsed time and the frame's input,
//! then renders the resulting [`core::RenderState`]. Everything outside
//! `core` (terminal drawing, key mapping) is a thin collaborator that
//! never reaches into engine state.
//!
//! # Example
//!
//! ```
//! use quadfall::config::EngineConfig;
//! use quadfall::core::GameSession;
//! use quadfall::types::InputState;
//!
//! let mut session = GameSession::new(EngineConfig::default(), 7).unwrap();
//! let input = InputState { hard_drop: true, ..Default::default() };
//! session.update(0.016, &input);
//! assert!(session.active().is_some() || session.game_over());
//! ```

pub mod config;
pub mod core;
pub mod input;
pub mod term;
pub mod types;

pub use config::{ConfigError, EngineConfig};
pub use core::{ActivePiece, GameSession, GameSummary, GhostProjection, Grid, RenderState};
pub use types::{InputState, PieceKind, Spin};
