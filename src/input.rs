//! Keyboard input collection for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! a held key stops being "held" once no press event has arrived for the
//! timeout window. Rotations and hard drop are one-shot edges consumed by the
//! next frame snapshot; movement keys report held state and the engine's own
//! repeat timer paces them.

use crossterm::event::KeyCode;
use std::time::Instant;

use crate::types::{InputState, Spin};

// In terminals without key-release events, a short timeout prevents a single
// tap from turning into a sustained "held" state.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeldKey {
    Left,
    Right,
    Down,
}

#[derive(Debug, Clone, Copy)]
struct Held {
    key: HeldKey,
    last_press: Instant,
}

/// Accumulates key events between frames and produces one [`InputState`]
/// snapshot per engine tick.
#[derive(Debug, Clone)]
pub struct InputCollector {
    held: [Option<Held>; 3],
    pending_spin: Option<Spin>,
    pending_hard_drop: bool,
    release_timeout_ms: u32,
}

impl InputCollector {
    pub fn new() -> Self {
        Self {
            held: [None; 3],
            pending_spin: None,
            pending_hard_drop: false,
            release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    pub fn handle_key_press(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                self.press(HeldKey::Left);
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                self.press(HeldKey::Right);
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                self.press(HeldKey::Down);
            }
            KeyCode::Up | KeyCode::Char('e') | KeyCode::Char('x') => {
                self.pending_spin = Some(Spin::Cw);
            }
            KeyCode::Char('q') | KeyCode::Char('z') => {
                self.pending_spin = Some(Spin::Ccw);
            }
            KeyCode::Char(' ') => {
                self.pending_hard_drop = true;
            }
            _ => {}
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                self.release(HeldKey::Left);
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                self.release(HeldKey::Right);
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                self.release(HeldKey::Down);
            }
            _ => {}
        }
    }

    /// Snapshot for the next engine tick. Edges (rotation, hard drop) are
    /// consumed; held movement reflects keys still within the release window.
    pub fn frame_input(&mut self) -> InputState {
        self.expire_stale();

        let input = InputState {
            rotate_cw: self.pending_spin == Some(Spin::Cw),
            rotate_ccw: self.pending_spin == Some(Spin::Ccw),
            hard_drop: self.pending_hard_drop,
            move_left: self.is_held(HeldKey::Left),
            move_right: self.is_held(HeldKey::Right),
            soft_drop: self.is_held(HeldKey::Down),
        };
        self.pending_spin = None;
        self.pending_hard_drop = false;
        input
    }

    pub fn reset(&mut self) {
        self.held = [None; 3];
        self.pending_spin = None;
        self.pending_hard_drop = false;
    }

    fn press(&mut self, key: HeldKey) {
        let now = Instant::now();
        if let Some(slot) = self.slot_of(key) {
            self.held[slot] = Some(Held {
                key,
                last_press: now,
            });
            return;
        }
        if let Some(slot) = self.held.iter().position(Option::is_none) {
            self.held[slot] = Some(Held {
                key,
                last_press: now,
            });
        }
    }

    fn release(&mut self, key: HeldKey) {
        if let Some(slot) = self.slot_of(key) {
            self.held[slot] = None;
        }
    }

    fn slot_of(&self, key: HeldKey) -> Option<usize> {
        self.held
            .iter()
            .position(|h| h.map(|h| h.key) == Some(key))
    }

    fn is_held(&self, key: HeldKey) -> bool {
        self.slot_of(key).is_some()
    }

    fn expire_stale(&mut self) {
        let timeout = self.release_timeout_ms as u128;
        for slot in self.held.iter_mut() {
            if let Some(h) = slot {
                if h.last_press.elapsed().as_millis() > timeout {
                    *slot = None;
                }
            }
        }
    }
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new()
    }
}
