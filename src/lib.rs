//! A heuristic agent for playing the board game 'Connect 4'
//!
//! This agent scores positions with a sliding-window pattern heuristic
//! and picks moves with a depth-bounded minimax search, pruned with
//! alpha-beta bounds.
//!
//! # Basic Usage
//!
//! ```
//! use fourline::board::{Board, Piece};
//! use fourline::search::Searcher;
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::standard();
//! board.drop_piece(3, Piece::Player)?;
//!
//! let mut searcher = Searcher::new(Piece::Ai);
//! let (column, _score) = searcher.select_move(&board, 4)?;
//!
//! assert!(column < 7);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;

pub mod board;

pub mod error;

pub mod rules;

pub mod heuristic;

pub mod search;

mod test;

/// The height of the reference game board in rows
pub const ROWS: usize = 6;

/// The width of the reference game board in columns
pub const COLS: usize = 7;

/// The number of aligned pieces that wins the game
pub const WIN_LENGTH: usize = 4;

// ensure the reference dimensions can host a winning alignment
const_assert!(ROWS >= WIN_LENGTH);
const_assert!(COLS >= WIN_LENGTH);
