//! Depth-bounded minimax move selection with alpha-beta pruning.

use log::debug;
use rand::seq::SliceRandom;

use crate::board::{Board, Piece};
use crate::error::EngineError;
use crate::heuristic::score_position;
use crate::rules::{has_four_in_a_row, is_terminal, valid_moves};

/// The outcome of one search call: the column to play, absent at leaf
/// evaluations, and the position's score for the automated side.
///
/// Scores are extended reals: positive infinity for a position the
/// automated side has won, negative infinity for one the opponent has won,
/// zero for a drawn full board, and the finite heuristic value wherever
/// the depth bound cuts the tree off.
#[derive(Copy, Clone, Debug)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: f64,
}

/// Picks moves for one automated side.
///
/// # Notes
/// The searcher never mutates the board it is given; every hypothetical
/// move is played on a clone. A search runs to completion on the calling
/// thread, so a deep search is a blocking, CPU-bound call.
///
/// Pruning on the alpha/beta bounds never changes the score versus a plain
/// minimax: a branch is only skipped once it provably cannot improve on a
/// bound the opposing side has already secured.
pub struct Searcher {
    piece: Piece,
    opponent: Piece,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
    rng: rand::rngs::ThreadRng,
}

impl Searcher {
    /// Creates a searcher that maximizes for `piece`.
    pub fn new(piece: Piece) -> Self {
        Self {
            piece,
            opponent: piece.other(),
            node_count: 0,
            rng: rand::thread_rng(),
        }
    }

    /// The side this searcher maximizes for.
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// Picks the best column for the searcher's side.
    ///
    /// This is the checked entry point around [`minimax`]: the board must
    /// be non-terminal with at least one open column, and `depth` must be
    /// positive, otherwise the invocation is rejected.
    ///
    /// [`minimax`]: Self::minimax
    pub fn select_move(
        &mut self,
        board: &Board,
        depth: u32,
    ) -> Result<(usize, f64), EngineError> {
        if depth == 0 || valid_moves(board).is_empty() || is_terminal(board) {
            return Err(EngineError::InvalidSearchInvocation);
        }

        let result = self.minimax(board, depth, f64::NEG_INFINITY, f64::INFINITY, true);
        let column = result
            .column
            .ok_or(EngineError::InvalidSearchInvocation)?;
        Ok((column, result.score))
    }

    /// Depth-bounded minimax over hypothetical board states.
    ///
    /// `alpha` is the best score the maximizing side can already guarantee
    /// along this path and `beta` the minimizing side's counterpart; the
    /// remaining columns of a node are skipped once `alpha >= beta`.
    ///
    /// Columns are tried in ascending order and the chosen column only
    /// changes on a strict improvement, so ties keep the earliest column
    /// found.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> SearchResult {
        self.node_count += 1;

        let moves = valid_moves(board);
        let terminal = is_terminal(board);

        if depth == 0 || terminal {
            if terminal {
                let score = if has_four_in_a_row(board, self.piece) {
                    f64::INFINITY
                } else if has_four_in_a_row(board, self.opponent) {
                    f64::NEG_INFINITY
                } else {
                    0.0
                };
                return SearchResult {
                    column: None,
                    score,
                };
            }
            return SearchResult {
                column: None,
                score: f64::from(score_position(board, self.piece)),
            };
        }

        // a legal fallback column in case pruning stops the loop before any
        // child improves on the infinite starting bound
        let mut column = *moves
            .choose(&mut self.rng)
            .expect("non-terminal position has an open column");

        if maximizing {
            let mut value = f64::NEG_INFINITY;
            for &col in &moves {
                let mut child = board.clone();
                if child.drop_piece(col, self.piece).is_err() {
                    continue;
                }
                let score = self.minimax(&child, depth - 1, alpha, beta, false).score;
                debug!("depth {}: column {} scored {}", depth, col, score);
                if score > value {
                    value = score;
                    column = col;
                }
                alpha = alpha.max(value);
                if alpha >= beta {
                    break;
                }
            }
            SearchResult {
                column: Some(column),
                score: value,
            }
        } else {
            let mut value = f64::INFINITY;
            for &col in &moves {
                let mut child = board.clone();
                if child.drop_piece(col, self.opponent).is_err() {
                    continue;
                }
                let score = self.minimax(&child, depth - 1, alpha, beta, true).score;
                if score < value {
                    value = score;
                    column = col;
                }
                beta = beta.min(value);
                if alpha >= beta {
                    break;
                }
            }
            SearchResult {
                column: Some(column),
                score: value,
            }
        }
    }
}
