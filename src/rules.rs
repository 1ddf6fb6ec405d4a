//! Win, draw and move-legality predicates.
//!
//! Everything here is a pure function over a board snapshot; the rules
//! keep no state of their own.

use crate::board::{Board, Piece};
use crate::WIN_LENGTH;

/// True iff four `piece` cells are aligned horizontally, vertically or on
/// either diagonal anywhere on the board.
///
/// Each check walks every valid window start in its direction and
/// short-circuits on the first full alignment.
pub fn has_four_in_a_row(board: &Board, piece: Piece) -> bool {
    let rows = board.rows();
    let cols = board.cols();

    // horizontal
    for row in 0..rows {
        for col in 0..cols.saturating_sub(WIN_LENGTH - 1) {
            if (0..WIN_LENGTH).all(|i| board.get(row, col + i) == piece) {
                return true;
            }
        }
    }

    // vertical
    for col in 0..cols {
        for row in 0..rows.saturating_sub(WIN_LENGTH - 1) {
            if (0..WIN_LENGTH).all(|i| board.get(row + i, col) == piece) {
                return true;
            }
        }
    }

    // diagonals rising to the right
    for row in 0..rows.saturating_sub(WIN_LENGTH - 1) {
        for col in 0..cols.saturating_sub(WIN_LENGTH - 1) {
            if (0..WIN_LENGTH).all(|i| board.get(row + i, col + i) == piece) {
                return true;
            }
        }
    }

    // diagonals falling to the right, anchored at the top of the window
    for row in 0..rows.saturating_sub(WIN_LENGTH - 1) {
        for col in 0..cols.saturating_sub(WIN_LENGTH - 1) {
            if (0..WIN_LENGTH).all(|i| board.get(row + WIN_LENGTH - 1 - i, col + i) == piece) {
                return true;
            }
        }
    }

    false
}

/// Columns that can still accept a piece, in ascending order.
pub fn valid_moves(board: &Board) -> Vec<usize> {
    (0..board.cols())
        .filter(|&col| board.is_column_open(col))
        .collect()
}

/// True iff the game is over: either side has four in a row, or no valid
/// moves remain.
pub fn is_terminal(board: &Board) -> bool {
    has_four_in_a_row(board, Piece::Player)
        || has_four_in_a_row(board, Piece::Ai)
        || valid_moves(board).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_horizontal_run() {
        let mut board = Board::standard();
        for col in 2..6 {
            board.drop_piece(col, Piece::Player).unwrap();
        }
        assert!(has_four_in_a_row(&board, Piece::Player));
        assert!(!has_four_in_a_row(&board, Piece::Ai));
    }

    #[test]
    fn detects_vertical_run() {
        let mut board = Board::standard();
        for _ in 0..4 {
            board.drop_piece(4, Piece::Ai).unwrap();
        }
        assert!(has_four_in_a_row(&board, Piece::Ai));
        assert!(!has_four_in_a_row(&board, Piece::Player));
    }

    #[test]
    fn detects_rising_diagonal() {
        let mut board = Board::standard();
        // staircase climbing one row per column
        board.drop_piece(0, Piece::Player).unwrap();
        board.drop_piece(1, Piece::Ai).unwrap();
        board.drop_piece(1, Piece::Player).unwrap();
        board.drop_piece(2, Piece::Ai).unwrap();
        board.drop_piece(2, Piece::Ai).unwrap();
        board.drop_piece(2, Piece::Player).unwrap();
        board.drop_piece(3, Piece::Ai).unwrap();
        board.drop_piece(3, Piece::Ai).unwrap();
        board.drop_piece(3, Piece::Ai).unwrap();
        board.drop_piece(3, Piece::Player).unwrap();

        assert!(has_four_in_a_row(&board, Piece::Player));
        assert!(!has_four_in_a_row(&board, Piece::Ai));
    }

    #[test]
    fn detects_falling_diagonal() {
        let mut board = Board::standard();
        board.drop_piece(6, Piece::Player).unwrap();
        board.drop_piece(5, Piece::Ai).unwrap();
        board.drop_piece(5, Piece::Player).unwrap();
        board.drop_piece(4, Piece::Ai).unwrap();
        board.drop_piece(4, Piece::Ai).unwrap();
        board.drop_piece(4, Piece::Player).unwrap();
        board.drop_piece(3, Piece::Ai).unwrap();
        board.drop_piece(3, Piece::Ai).unwrap();
        board.drop_piece(3, Piece::Ai).unwrap();
        board.drop_piece(3, Piece::Player).unwrap();

        assert!(has_four_in_a_row(&board, Piece::Player));
        assert!(!has_four_in_a_row(&board, Piece::Ai));
    }

    #[test]
    fn three_in_a_row_is_not_a_win() {
        let mut board = Board::standard();
        for col in 0..3 {
            board.drop_piece(col, Piece::Player).unwrap();
        }
        assert!(!has_four_in_a_row(&board, Piece::Player));
    }

    #[test]
    fn valid_moves_tracks_open_columns() {
        let mut board = Board::standard();
        assert_eq!(valid_moves(&board), vec![0, 1, 2, 3, 4, 5, 6]);

        // fill column 3 without making four in a row
        for row in 0..board.rows() {
            let piece = if row % 2 == 0 { Piece::Player } else { Piece::Ai };
            board.drop_piece(3, piece).unwrap();
        }

        assert!(!board.is_column_open(3));
        assert_eq!(valid_moves(&board), vec![0, 1, 2, 4, 5, 6]);
        assert_eq!(valid_moves(&board).len(), board.cols() - 1);
    }

    #[test]
    fn terminal_positions() {
        let mut board = Board::standard();
        assert!(!is_terminal(&board));

        board.drop_piece(0, Piece::Player).unwrap();
        assert!(!is_terminal(&board));

        // a vertical win ends the game
        let mut won = Board::standard();
        for _ in 0..4 {
            won.drop_piece(0, Piece::Ai).unwrap();
        }
        assert!(is_terminal(&won));
    }

    #[test]
    fn full_board_without_winner_is_terminal() {
        // paired rows of alternating colors leave no alignment anywhere
        let mut board = Board::new(4, 4);
        for row in 0..4 {
            for col in 0..4 {
                let piece = if (row / 2 + col) % 2 == 0 {
                    Piece::Player
                } else {
                    Piece::Ai
                };
                board.place(row, col, piece).unwrap();
            }
        }

        assert!(!has_four_in_a_row(&board, Piece::Player));
        assert!(!has_four_in_a_row(&board, Piece::Ai));
        assert!(valid_moves(&board).is_empty());
        assert!(is_terminal(&board));
    }
}
