//! Grid behavior through the public API: bounds, occupancy, line clears.

use quadfall::core::Grid;
use quadfall::types::PieceKind;

fn fill_row(grid: &mut Grid, row: i32) {
    for x in grid.x_min()..grid.x_max() {
        grid.set(x, row, Some(PieceKind::I));
    }
}

#[test]
fn test_default_grid_is_centered() {
    let grid = Grid::new(10, 20);
    assert_eq!(grid.x_min(), -5);
    assert_eq!(grid.x_max(), 5);
    assert_eq!(grid.y_min(), -10);
    assert_eq!(grid.y_max(), 10);

    assert!(grid.in_bounds(-5, -10));
    assert!(grid.in_bounds(4, 9));
    assert!(!grid.in_bounds(5, 0));
    assert!(!grid.in_bounds(0, 10));
}

#[test]
fn test_set_outside_bounds_is_rejected() {
    let mut grid = Grid::new(10, 20);
    assert!(!grid.set(5, 0, Some(PieceKind::T)));
    assert!(!grid.set(0, -11, Some(PieceKind::T)));
    assert_eq!(grid.get(5, 0), None);
}

#[test]
fn test_out_of_bounds_is_never_free() {
    let grid = Grid::new(10, 20);
    assert!(grid.is_free(0, 9));
    assert!(!grid.is_free(0, 10));
    assert!(!grid.is_free(-6, 0));
    assert!(!grid.is_free(0, -11));
}

#[test]
fn test_full_row_detection() {
    let mut grid = Grid::new(10, 20);
    fill_row(&mut grid, -10);
    assert!(grid.is_row_full(-10));

    grid.set(0, -10, None);
    assert!(!grid.is_row_full(-10));
}

#[test]
fn test_clear_compacts_rows_above() {
    let mut grid = Grid::new(10, 20);
    fill_row(&mut grid, -10);
    grid.set(3, -9, Some(PieceKind::L));
    grid.set(-2, -8, Some(PieceKind::S));

    let cleared = grid.clear_and_compact();
    assert_eq!(cleared.as_slice(), &[-10]);

    // Everything above shifted down one row.
    assert_eq!(grid.get(3, -10), Some(Some(PieceKind::L)));
    assert_eq!(grid.get(-2, -9), Some(Some(PieceKind::S)));
    assert_eq!(grid.get(3, -9), Some(None));
    assert_eq!(grid.get(-2, -8), Some(None));
}

#[test]
fn test_stacked_full_rows_clear_in_one_pass() {
    let mut grid = Grid::new(10, 20);
    fill_row(&mut grid, -10);
    fill_row(&mut grid, -9);
    grid.set(0, -8, Some(PieceKind::Z));

    let cleared = grid.clear_and_compact();
    // After the first clear the second full row lands on the same index.
    assert_eq!(cleared.as_slice(), &[-10, -10]);
    assert_eq!(grid.get(0, -10), Some(Some(PieceKind::Z)));
}

#[test]
fn test_separated_full_rows_clear_together() {
    let mut grid = Grid::new(10, 20);
    fill_row(&mut grid, -10);
    grid.set(0, -9, Some(PieceKind::J));
    fill_row(&mut grid, -8);

    let cleared = grid.clear_and_compact();
    assert_eq!(cleared.len(), 2);
    assert_eq!(grid.get(0, -10), Some(Some(PieceKind::J)));
    for x in grid.x_min()..grid.x_max() {
        assert_eq!(grid.get(x, -9), Some(None));
    }
}

#[test]
fn test_clear_on_sparse_board_is_noop() {
    let mut grid = Grid::new(10, 20);
    grid.set(0, -10, Some(PieceKind::T));
    grid.set(4, 5, Some(PieceKind::O));

    let cleared = grid.clear_and_compact();
    assert!(cleared.is_empty());
    assert_eq!(grid.get(0, -10), Some(Some(PieceKind::T)));
    assert_eq!(grid.get(4, 5), Some(Some(PieceKind::O)));
}

#[test]
fn test_commit_and_release_round_trip() {
    let mut grid = Grid::new(10, 20);
    let cells = [(0, 0), (1, 0), (0, 1), (1, 1)];
    grid.commit(&cells, (2, 3), PieceKind::O);

    assert_eq!(grid.occupied_cells().count(), 4);
    assert!(!grid.is_free(2, 3));

    grid.release(&cells, (2, 3));
    assert_eq!(grid.occupied_cells().count(), 0);
    assert!(grid.is_free(2, 3));
}

#[test]
fn test_odd_dimensions_keep_origin_centering() {
    let grid = Grid::new(7, 15);
    assert_eq!(grid.x_min(), -3);
    assert_eq!(grid.x_max(), 4);
    assert_eq!(grid.y_min(), -7);
    assert_eq!(grid.y_max(), 8);
}
