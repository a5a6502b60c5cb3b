//! Board tests - grid access, row scans, and compaction.

use blockfall::core::Board;
use blockfall::types::{BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, row: usize, value: u8) {
    for col in 0..BOARD_WIDTH as usize {
        board.set(row, col, value);
    }
}

#[test]
fn new_board_has_no_full_rows() {
    let board = Board::new();
    let (count, mask) = board.find_full_rows();
    assert_eq!(count, 0);
    assert!(mask.iter().all(|&flag| !flag));
    for row in 0..BOARD_HEIGHT as usize {
        assert!(board.row_is_empty(row));
    }
}

#[test]
fn set_and_get_roundtrip() {
    let mut board = Board::new();
    board.set(5, 3, 7);
    board.set(21, 9, 1);
    assert_eq!(board.get(5, 3), 7);
    assert_eq!(board.get(21, 9), 1);
    assert_eq!(board.get(5, 4), 0);
}

#[test]
fn one_missing_cell_keeps_a_row_from_being_full() {
    let mut board = Board::new();
    fill_row(&mut board, 10, 3);
    assert!(board.row_is_full(10));

    board.set(10, 7, 0);
    assert!(!board.row_is_full(10));
}

#[test]
fn clear_single_bottom_row_shifts_everything_down() {
    let mut board = Board::new();
    fill_row(&mut board, 21, 1);
    board.set(20, 2, 4);
    board.set(19, 8, 5);

    let (count, mask) = board.find_full_rows();
    assert_eq!(count, 1);
    board.clear_rows(&mask);

    assert_eq!(board.get(21, 2), 4);
    assert_eq!(board.get(20, 8), 5);
    assert!(board.row_is_empty(19));
}

#[test]
fn clear_noncontiguous_rows_preserves_survivor_order() {
    let mut board = Board::new();
    // Full rows at 5, 10, and 15 with markers directly above each.
    for row in [5, 10, 15] {
        fill_row(&mut board, row, 2);
    }
    board.set(4, 0, 7); // drops by 3
    board.set(9, 0, 6); // drops by 2
    board.set(14, 0, 5); // drops by 1

    let (count, mask) = board.find_full_rows();
    assert_eq!(count, 3);
    board.clear_rows(&mask);

    assert_eq!(board.get(7, 0), 7);
    assert_eq!(board.get(11, 0), 6);
    assert_eq!(board.get(15, 0), 5);

    // Order is preserved: 7 stays above 6, which stays above 5.
    let (count, _) = board.find_full_rows();
    assert_eq!(count, 0);
}

#[test]
fn clearing_found_rows_always_leaves_zero_full_rows() {
    // A board with an arbitrary mix of full, partial, and empty rows.
    let mut board = Board::new();
    for row in 12..BOARD_HEIGHT as usize {
        fill_row(&mut board, row, 1);
    }
    board.set(14, 0, 0); // row 14 only partial
    board.set(17, 9, 0); // row 17 only partial

    let (count, mask) = board.find_full_rows();
    assert_eq!(count, 8);
    board.clear_rows(&mask);

    let (count_after, _) = board.find_full_rows();
    assert_eq!(count_after, 0);
    // The two partial rows survive at the bottom, still in order.
    assert!(!board.row_is_empty(20));
    assert!(!board.row_is_empty(21));
    assert_eq!(board.get(20, 9), 1); // was row 14 (missing col 0)
    assert_eq!(board.get(20, 0), 0);
    assert_eq!(board.get(21, 0), 1); // was row 17 (missing col 9)
    assert_eq!(board.get(21, 9), 0);
}

#[test]
fn clearing_the_entire_board_empties_it() {
    let mut board = Board::new();
    for row in 0..BOARD_HEIGHT as usize {
        fill_row(&mut board, row, 3);
    }
    let (count, mask) = board.find_full_rows();
    assert_eq!(count, BOARD_HEIGHT as u32);
    board.clear_rows(&mask);
    for row in 0..BOARD_HEIGHT as usize {
        assert!(board.row_is_empty(row));
    }
}
