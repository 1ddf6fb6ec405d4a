//! Sliding-window position evaluation.
//!
//! A window is a run of four adjacent cells in one direction; the position
//! score is the sum of every window's pattern value plus a bonus for
//! holding the center column. Weights are hand-tuned.

use crate::board::{Board, Piece};
use crate::WIN_LENGTH;

const FOUR_IN_WINDOW: i32 = 10;
const THREE_IN_WINDOW: i32 = 5;
const TWO_IN_WINDOW: i32 = 2;
const OPPONENT_THREE_PENALTY: i32 = 4;
const CENTER_COLUMN_WEIGHT: i32 = 3;

/// Scores one window of four adjacent cells from `piece`'s perspective.
///
/// A window holding three opposing pieces and a gap only deducts its
/// penalty from an already-positive running score; otherwise the window is
/// clamped to zero rather than going negative.
pub fn evaluate_window(window: &[Piece; WIN_LENGTH], piece: Piece) -> i32 {
    let own = window.iter().filter(|&&cell| cell == piece).count();
    let empty = window.iter().filter(|&&cell| cell.is_empty()).count();
    let opponent = window
        .iter()
        .filter(|&&cell| cell == piece.other())
        .count();

    let mut score = 0;
    if own == 4 {
        score += FOUR_IN_WINDOW;
    } else if own == 3 && empty == 1 {
        score += THREE_IN_WINDOW;
    } else if own == 2 && empty == 2 {
        score += TWO_IN_WINDOW;
    }

    if opponent == 3 && empty == 1 {
        if score > 0 {
            score -= OPPONENT_THREE_PENALTY;
        } else {
            score = 0;
        }
    }

    score
}

fn window_from(board: &Board, row: usize, col: usize, dr: isize, dc: isize) -> [Piece; WIN_LENGTH] {
    let mut cells = [Piece::Empty; WIN_LENGTH];
    for (i, cell) in cells.iter_mut().enumerate() {
        let r = (row as isize + dr * i as isize) as usize;
        let c = (col as isize + dc * i as isize) as usize;
        *cell = board.get(r, c);
    }
    cells
}

/// Scores the whole position for `piece`.
///
/// Sums the center-column control bonus with the value of every
/// horizontal, vertical and diagonal window on the board. The result is
/// always relative to one side; the search evaluates every position from
/// the automated player's perspective.
pub fn score_position(board: &Board, piece: Piece) -> i32 {
    let rows = board.rows();
    let cols = board.cols();
    let mut score = 0;

    // central control bonus
    let center = cols / 2;
    let center_count = (0..rows).filter(|&row| board.get(row, center) == piece).count();
    score += center_count as i32 * CENTER_COLUMN_WEIGHT;

    // horizontal windows
    for row in 0..rows {
        for col in 0..cols.saturating_sub(WIN_LENGTH - 1) {
            score += evaluate_window(&window_from(board, row, col, 0, 1), piece);
        }
    }

    // vertical windows
    for col in 0..cols {
        for row in 0..rows.saturating_sub(WIN_LENGTH - 1) {
            score += evaluate_window(&window_from(board, row, col, 1, 0), piece);
        }
    }

    // diagonals rising to the right
    for row in 0..rows.saturating_sub(WIN_LENGTH - 1) {
        for col in 0..cols.saturating_sub(WIN_LENGTH - 1) {
            score += evaluate_window(&window_from(board, row, col, 1, 1), piece);
        }
    }

    // diagonals falling to the right, anchored at the top of the window
    for row in 0..rows.saturating_sub(WIN_LENGTH - 1) {
        for col in 0..cols.saturating_sub(WIN_LENGTH - 1) {
            score += evaluate_window(
                &window_from(board, row + WIN_LENGTH - 1, col, -1, 1),
                piece,
            );
        }
    }

    score
}
