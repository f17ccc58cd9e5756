//! Pieces tests - shapes, movement and SRS rotation with wall kicks

use stacker::core::{ActivePiece, Board, Shape};
use stacker::types::{kick_index, KickTables, PieceKind, Point, Rotation, Spin};

// ============== Shape Tests ==============

fn sorted(shape: &Shape) -> Vec<(i32, i32)> {
    let mut cells: Vec<_> = shape.cells().collect();
    cells.sort();
    cells
}

#[test]
fn test_i_piece_orientations() {
    let north = Shape::for_kind(PieceKind::I);
    assert_eq!(sorted(&north), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);

    let east = north.rotated(Spin::Cw);
    assert_eq!(sorted(&east), vec![(2, 0), (2, 1), (2, 2), (2, 3)]);

    let south = east.rotated(Spin::Cw);
    assert_eq!(sorted(&south), vec![(0, 2), (1, 2), (2, 2), (3, 2)]);

    let west = south.rotated(Spin::Cw);
    assert_eq!(sorted(&west), vec![(1, 0), (1, 1), (1, 2), (1, 3)]);
}

#[test]
fn test_j_and_l_are_mirrored() {
    assert_eq!(
        sorted(&Shape::for_kind(PieceKind::J)),
        vec![(0, 0), (0, 1), (1, 1), (2, 1)]
    );
    assert_eq!(
        sorted(&Shape::for_kind(PieceKind::L)),
        vec![(0, 1), (1, 1), (2, 0), (2, 1)]
    );
}

#[test]
fn test_four_turns_restore_every_shape() {
    for kind in PieceKind::ALL {
        let original = Shape::for_kind(kind);
        let mut shape = original;
        for _ in 0..4 {
            shape.rotate(Spin::Ccw);
        }
        assert_eq!(shape, original);
    }
}

// ============== Movement Tests ==============

#[test]
fn test_four_moves_left_reach_the_wall() {
    let board = Board::new(10, 20, 2);
    let mut piece = ActivePiece::spawn(PieceKind::O, Point::new(4, 5));

    for expected in (0..4).rev() {
        assert!(piece.move_left(&board));
        assert_eq!(piece.anchor.x, expected);
    }
    assert!(!piece.move_left(&board));
    assert_eq!(piece.anchor.x, 0);
}

#[test]
fn test_move_right_blocked_by_stack() {
    let board = Board::new(10, 20, 2).with_rows(&["....Z.....", "....Z....."]);
    let mut piece = ActivePiece::spawn(PieceKind::O, Point::new(2, 20));

    assert!(!piece.move_right(&board));
    assert_eq!(piece.anchor.x, 2);
    assert!(piece.move_left(&board));
}

#[test]
fn test_to_bottom_terminates_resting() {
    let board = Board::new(10, 20, 2).with_rows(&["..........", "ZZZ.ZZZZZZ"]);
    for kind in PieceKind::ALL {
        let mut piece = ActivePiece::spawn(kind, Point::new(3, 0));
        piece.to_bottom(&board);
        assert!(board.collides_bottom(piece.anchor, &piece.shape, 1));
        assert!(!piece.collides_any(&board));
    }
}

#[test]
fn test_to_bottom_reports_distance() {
    let board = Board::new(10, 20, 2);
    let mut piece = ActivePiece::spawn(PieceKind::I, Point::new(3, 0));
    // I occupies its second row, so it falls until that row is the floor.
    assert_eq!(piece.to_bottom(&board), 20);
    assert_eq!(piece.anchor.y, 20);
    assert_eq!(piece.to_bottom(&board), 0);
}

// ============== Rotation Tests ==============

#[test]
fn test_kick_index_layout() {
    assert_eq!(kick_index(Rotation::North, Spin::Cw), 0);
    assert_eq!(kick_index(Rotation::North, Spin::Ccw), 1);
    assert_eq!(kick_index(Rotation::East, Spin::Ccw), 2);
    assert_eq!(kick_index(Rotation::East, Spin::Cw), 3);
    assert_eq!(kick_index(Rotation::South, Spin::Ccw), 4);
    assert_eq!(kick_index(Rotation::South, Spin::Cw), 5);
    assert_eq!(kick_index(Rotation::West, Spin::Ccw), 6);
    assert_eq!(kick_index(Rotation::West, Spin::Cw), 7);
}

#[test]
fn test_t_rotation_in_open_space_uses_no_kick() {
    let board = Board::new(10, 20, 2);
    let kicks = KickTables::default();
    let mut piece = ActivePiece::spawn(PieceKind::T, Point::new(4, 10));

    for expected in [Rotation::East, Rotation::South, Rotation::West, Rotation::North] {
        assert!(piece.try_rotate(&board, Spin::Cw, &kicks));
        assert_eq!(piece.rotation, expected);
        assert_eq!(piece.anchor, Point::new(4, 10));
    }
    assert_eq!(piece.shape, Shape::for_kind(PieceKind::T));
}

#[test]
fn test_t_kicks_off_right_wall() {
    let board = Board::new(10, 20, 2);
    let kicks = KickTables::default();

    // T pointing west with its stem against the right wall
    let mut piece = ActivePiece::spawn(PieceKind::T, Point::new(8, 10));
    piece.shape = piece.shape.rotated(Spin::Ccw);
    piece.rotation = Rotation::West;
    assert!(!piece.collides_any(&board));

    // W->N: (0,0) would poke through the wall; the next kick shifts it left.
    assert!(piece.try_rotate(&board, Spin::Cw, &kicks));
    assert_eq!(piece.rotation, Rotation::North);
    assert_eq!(piece.anchor, Point::new(7, 10));
}

#[test]
fn test_i_kicks_off_left_wall() {
    let board = Board::new(10, 20, 2);
    let kicks = KickTables::default();

    let mut piece = ActivePiece::spawn(PieceKind::I, Point::new(-2, 10));
    piece.shape = piece.shape.rotated(Spin::Cw);
    piece.rotation = Rotation::East;
    assert!(!piece.collides_any(&board));

    // E->N: (0,0) pokes through the wall, (2,0) is the first offset that fits.
    assert!(piece.try_rotate(&board, Spin::Ccw, &kicks));
    assert_eq!(piece.rotation, Rotation::North);
    assert_eq!(piece.anchor, Point::new(0, 10));
    assert!(!piece.collides_any(&board));
}

#[test]
fn test_failed_rotation_changes_nothing() {
    let rows: Vec<&str> = std::iter::repeat("JJJ...JJJJ").take(22).collect();
    let board = Board::new(10, 20, 2).with_rows(&rows);
    let kicks = KickTables::default();

    // I standing in a three-wide shaft cannot lie down.
    let mut piece = ActivePiece::spawn(PieceKind::I, Point::new(2, 6));
    piece.shape = piece.shape.rotated(Spin::Cw);
    piece.rotation = Rotation::East;
    assert!(!piece.collides_any(&board));

    let before = piece;
    assert!(!piece.try_rotate(&board, Spin::Cw, &kicks));
    assert_eq!(piece, before);
}
