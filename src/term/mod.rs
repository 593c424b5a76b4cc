//! Terminal presentation: framebuffer, raw-mode renderer, and game view.

pub mod fb;
pub mod renderer;
pub mod view;

pub use fb::{CellStyle, FrameBuffer, TermCell};
pub use renderer::TerminalRenderer;
pub use view::{GameView, Viewport};
