//! End-to-end session behavior: determinism, clears, ghost, game over.

use quadfall::config::EngineConfig;
use quadfall::core::GameSession;
use quadfall::types::{InputState, PieceKind};

fn hard_drop() -> InputState {
    InputState {
        hard_drop: true,
        ..Default::default()
    }
}

#[test]
fn test_same_seed_produces_same_piece_sequence() {
    let mut a = GameSession::new(EngineConfig::default(), 777).expect("valid config");
    let mut b = GameSession::new(EngineConfig::default(), 777).expect("valid config");

    for _ in 0..8 {
        let ka = a.active().map(|p| p.kind());
        let kb = b.active().map(|p| p.kind());
        assert_eq!(ka, kb);
        a.update(0.016, &hard_drop());
        b.update(0.016, &hard_drop());
    }
}

#[test]
fn test_quad_clear_awards_1200_and_compacts() {
    let mut session = GameSession::new(EngineConfig::default(), 1).expect("valid config");
    session.grid_mut().clear();

    // Four complete rows already on the floor; the next lock sweeps them.
    let y_min = session.grid().y_min();
    for row in y_min..y_min + 4 {
        for x in session.grid().x_min()..session.grid().x_max() {
            session.grid_mut().set(x, row, Some(PieceKind::J));
        }
    }
    assert!(session.spawn_piece_of(PieceKind::O));

    session.update(0.016, &hard_drop());

    assert_eq!(session.lines(), 4);
    assert_eq!(session.score(), 1200);
    assert_eq!(session.level(), 0);

    // The O landed on top of the stack and compacted down to the floor.
    for (x, y) in [(-1, y_min), (0, y_min), (-1, y_min + 1), (0, y_min + 1)] {
        assert_eq!(session.grid().get(x, y), Some(Some(PieceKind::O)));
    }
    assert_eq!(session.grid().occupied_cells().count(), 8);
}

#[test]
fn test_ghost_marks_hard_drop_landing() {
    let mut session = GameSession::new(EngineConfig::default(), 5).expect("valid config");
    session.grid_mut().clear();
    assert!(session.spawn_piece_of(PieceKind::T));

    let landing = session.ghost().expect("ghost").absolute_cells();
    let kind = session.active().expect("active").kind();
    session.update(0.016, &hard_drop());

    for (x, y) in landing {
        assert_eq!(session.grid().get(x, y), Some(Some(kind)));
    }
}

#[test]
fn test_scores_accumulate_across_clears() {
    let mut session = GameSession::new(EngineConfig::default(), 1).expect("valid config");

    for _ in 0..2 {
        session.grid_mut().clear();
        let y_min = session.grid().y_min();
        for x in session.grid().x_min()..session.grid().x_max() {
            if x != -1 && x != 0 {
                session.grid_mut().set(x, y_min, Some(PieceKind::I));
            }
        }
        assert!(session.spawn_piece_of(PieceKind::O));
        session.update(0.016, &hard_drop());
    }

    assert_eq!(session.lines(), 2);
    assert_eq!(session.score(), 80);
}

#[test]
fn test_render_state_active_cells_are_occupied() {
    let session = GameSession::new(EngineConfig::default(), 42).expect("valid config");
    let state = session.render_state();

    let (cells, kind) = state.active.expect("active piece");
    for cell in cells {
        assert!(state.locked.contains(&(cell, kind)));
    }
}

#[test]
fn test_top_out_and_reset_cycle() {
    let mut session = GameSession::new(EngineConfig::default(), 9).expect("valid config");

    let mut updates = 0;
    while !session.game_over() {
        session.update(0.016, &hard_drop());
        updates += 1;
        assert!(updates < 500, "session never topped out");
    }
    assert!(session.active().is_none());
    assert!(session.render_state().game_over);

    session.reset();
    assert!(!session.game_over());
    assert_eq!(session.score(), 0);
    assert!(session.active().is_some());
    assert_eq!(session.grid().occupied_cells().count(), 4);
}

#[test]
fn test_custom_board_dimensions() {
    let cfg = EngineConfig {
        width: 6,
        height: 12,
        spawn: (-1, 4),
        ..Default::default()
    };
    let mut session = GameSession::new(cfg, 3).expect("valid config");

    assert_eq!(session.grid().x_min(), -3);
    assert_eq!(session.grid().y_min(), -6);

    session.update(0.016, &hard_drop());
    assert!(!session.game_over());
    assert!(session.grid().occupied_cells().count() >= 4);
}
