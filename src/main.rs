//! Terminal runner (default binary).
//!
//! Drives the falling-block engine with crossterm input and a
//! framebuffer-based renderer at a fixed tick rate.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use quadfall::config::EngineConfig;
use quadfall::core::GameSession;
use quadfall::input::InputCollector;
use quadfall::term::{GameView, TerminalRenderer, Viewport};
use quadfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1);
    let mut session = GameSession::new(EngineConfig::default(), seed)?;

    let view = GameView::default();
    let mut collector = InputCollector::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&session.render_state(), Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if key.code == KeyCode::Char('r') {
                            session.reset();
                            collector.reset();
                        } else {
                            collector.handle_key_press(key.code);
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Ignore terminal auto-repeat; held state covers it.
                    }
                    KeyEventKind::Release => {
                        collector.handle_key_release(key.code);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let input = collector.frame_input();
            session.update(TICK_MS as f32 / 1000.0, &input);
        }
    }
}
