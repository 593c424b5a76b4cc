//! GameView: maps engine [`RenderState`] into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested. Board cells render 2x1 to
//! compensate for terminal glyph aspect ratio. Draw order: locked cells,
//! ghost (dim), active piece on top.

use crossterm::style::Color;

use crate::core::RenderState;
use crate::term::fb::{CellStyle, FrameBuffer};
use crate::types::PieceKind;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

pub struct GameView {
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn render(&self, state: &RenderState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_w = state.width as u16 * self.cell_w;
        let board_h = state.height as u16;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w + 14) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h);

        for &((x, y), kind) in &state.locked {
            self.draw_cell(&mut fb, state, start_x, start_y, (x, y), tile_style(kind));
        }

        if let Some(cells) = state.ghost {
            let ghost = CellStyle {
                fg: Color::DarkGrey,
                bg: Color::Black,
                dim: true,
            };
            for cell in cells {
                self.draw_cell_char(&mut fb, state, start_x, start_y, cell, '░', ghost);
            }
        }

        if let Some((cells, kind)) = state.active {
            for cell in cells {
                self.draw_cell(&mut fb, state, start_x, start_y, cell, tile_style(kind));
            }
        }

        self.draw_panel(&mut fb, state, start_x + frame_w + 2, start_y + 1);

        if state.game_over {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }

        fb
    }

    /// Terminal position of a board cell, or None when outside the board.
    fn cell_origin(
        &self,
        state: &RenderState,
        start_x: u16,
        start_y: u16,
        (x, y): (i32, i32),
    ) -> Option<(u16, u16)> {
        let col = x - state.x_min;
        let row_from_top = (state.y_min + state.height - 1) - y;
        if col < 0 || col >= state.width || row_from_top < 0 || row_from_top >= state.height {
            return None;
        }
        Some((
            start_x + 1 + col as u16 * self.cell_w,
            start_y + 1 + row_from_top as u16,
        ))
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        state: &RenderState,
        start_x: u16,
        start_y: u16,
        cell: (i32, i32),
        style: CellStyle,
    ) {
        self.draw_cell_char(fb, state, start_x, start_y, cell, '█', style);
    }

    fn draw_cell_char(
        &self,
        fb: &mut FrameBuffer,
        state: &RenderState,
        start_x: u16,
        start_y: u16,
        cell: (i32, i32),
        ch: char,
        style: CellStyle,
    ) {
        if let Some((tx, ty)) = self.cell_origin(state, start_x, start_y, cell) {
            for dx in 0..self.cell_w {
                fb.put(tx + dx, ty, ch, style);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle {
            fg: Color::White,
            bg: Color::Black,
            dim: false,
        };

        fb.put(x, y, '┌', style);
        fb.put(x + w - 1, y, '┐', style);
        fb.put(x, y + h - 1, '└', style);
        fb.put(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put(x + dx, y, '─', style);
            fb.put(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put(x, y + dy, '│', style);
            fb.put(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, state: &RenderState, x: u16, y: u16) {
        let label = CellStyle {
            fg: Color::DarkGrey,
            bg: Color::Black,
            dim: false,
        };
        let value = CellStyle {
            fg: Color::White,
            bg: Color::Black,
            dim: false,
        };

        fb.put_str(x, y, "SCORE", label);
        fb.put_str(x, y + 1, &state.score.to_string(), value);
        fb.put_str(x, y + 3, "LEVEL", label);
        fb.put_str(x, y + 4, &state.level.to_string(), value);
        fb.put_str(x, y + 6, "LINES", label);
        fb.put_str(x, y + 7, &state.lines.to_string(), value);
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
        let style = CellStyle {
            fg: Color::Red,
            bg: Color::Black,
            dim: false,
        };
        let tx = x + w.saturating_sub(text.len() as u16) / 2;
        let ty = y + h / 2;
        fb.put_str(tx, ty, text, style);
        fb.put_str(
            x + w.saturating_sub(16) / 2,
            ty + 1,
            "press r to retry",
            CellStyle {
                fg: Color::Grey,
                bg: Color::Black,
                dim: true,
            },
        );
    }
}

fn tile_style(kind: PieceKind) -> CellStyle {
    let fg = match kind {
        PieceKind::I => Color::Cyan,
        PieceKind::J => Color::Blue,
        PieceKind::L => Color::Rgb {
            r: 255,
            g: 160,
            b: 0,
        },
        PieceKind::O => Color::Yellow,
        PieceKind::S => Color::Green,
        PieceKind::T => Color::Magenta,
        PieceKind::Z => Color::Red,
    };
    CellStyle {
        fg,
        bg: Color::Black,
        dim: false,
    }
}
