//! Tetromino catalog and validator tests.

use blockfall::core::{kind, Board, Piece, TETROMINOS};
use blockfall::types::{BOARD_HEIGHT, BOARD_WIDTH, SPAWN_COL};

fn occupied(index: u8, rotation: u8) -> Vec<(i8, i8)> {
    let tetromino = &TETROMINOS[index as usize];
    let mut cells = Vec::new();
    for row in 0..tetromino.side() {
        for col in 0..tetromino.side() {
            if tetromino.cell_at(row, col, rotation) != 0 {
                cells.push((row, col));
            }
        }
    }
    cells
}

#[test]
fn catalog_sides_match_shape_sizes() {
    assert_eq!(TETROMINOS[kind::I as usize].side(), 4);
    assert_eq!(TETROMINOS[kind::O as usize].side(), 2);
    for index in [kind::T, kind::S, kind::Z, kind::L, kind::J] {
        assert_eq!(TETROMINOS[index as usize].side(), 3);
    }
}

#[test]
fn four_rotations_return_to_the_original_pattern() {
    for index in 0..8u8 {
        let tetromino = &TETROMINOS[index as usize];
        for row in 0..tetromino.side() {
            for col in 0..tetromino.side() {
                assert_eq!(
                    tetromino.cell_at(row, col, 0),
                    tetromino.cell_at(row, col, 4),
                    "shape {} cell ({}, {})",
                    index,
                    row,
                    col
                );
            }
        }
    }
}

#[test]
fn every_rotation_keeps_four_occupied_cells() {
    for index in 1..=7u8 {
        for rotation in 0..4 {
            assert_eq!(occupied(index, rotation).len(), 4);
        }
    }
}

#[test]
fn o_piece_is_rotation_invariant() {
    for rotation in 1..4 {
        assert_eq!(occupied(kind::O, rotation), occupied(kind::O, 0));
    }
}

#[test]
fn spawn_position_is_valid_for_every_shape_on_an_empty_board() {
    let board = Board::new();
    for index in 1..=7u8 {
        let piece = Piece {
            col: SPAWN_COL,
            ..Piece::new(index)
        };
        assert!(piece.is_valid(&board), "shape {} invalid at spawn", index);
    }
}

#[test]
fn validator_rejects_each_boundary() {
    let board = Board::new();

    // Left wall: I occupies grid columns 0-3 on its spawn rotation.
    let mut i = Piece::new(kind::I);
    i.col = -1;
    assert!(!i.is_valid(&board));
    i.col = 0;
    assert!(i.is_valid(&board));

    // Right wall.
    i.col = (BOARD_WIDTH as i8) - 4;
    assert!(i.is_valid(&board));
    i.col += 1;
    assert!(!i.is_valid(&board));

    // Floor: the bar sits on grid row 1.
    i.col = 3;
    i.row = (BOARD_HEIGHT as i8) - 2;
    assert!(i.is_valid(&board));
    i.row += 1;
    assert!(!i.is_valid(&board));

    // Ceiling: occupied cells may never sit above row 0.
    i.row = -1;
    assert!(i.is_valid(&board)); // bar is on grid row 1 -> board row 0
    i.row = -2;
    assert!(!i.is_valid(&board));
}

#[test]
fn validator_rejects_overlap_with_locked_cells() {
    let mut board = Board::new();
    board.set(21, 5, kind::T);

    let piece = Piece {
        row: 20,
        col: 5,
        ..Piece::new(kind::O)
    };
    assert!(!piece.is_valid(&board));

    let beside = Piece {
        row: 20,
        col: 7,
        ..Piece::new(kind::O)
    };
    assert!(beside.is_valid(&board));
}

#[test]
fn merge_then_validate_detects_the_merged_cells() {
    let mut board = Board::new();
    let landed = Piece {
        row: 20,
        col: 0,
        ..Piece::new(kind::O)
    };
    landed.merge_into(&mut board);

    assert_eq!(board.get(20, 0), kind::O);
    assert_eq!(board.get(21, 1), kind::O);
    assert!(!landed.is_valid(&board));
}
