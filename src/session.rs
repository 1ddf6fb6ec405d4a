use anyhow::{anyhow, Result};
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use fourline::board::{Board, Piece};
use fourline::rules::{has_four_in_a_row, valid_moves};

#[derive(Copy, Clone, Debug)]
pub enum GameState {
    Playing,
    PlayerWin,
    AiWin,
    Draw,
}

/// Owns the canonical board and turn order for one game.
///
/// The engine only ever sees this board through shared references; every
/// real placement goes through `play_checked`.
pub struct GameSession {
    pub board: Board,
    pub to_move: Piece,
    pub state: GameState,
}

impl GameSession {
    pub fn new(first: Piece) -> Self {
        Self {
            board: Board::standard(),
            to_move: first,
            state: GameState::Playing,
        }
    }

    /// Clears the board for a fresh game.
    pub fn reset(&mut self, first: Piece) {
        self.board = Board::standard();
        self.to_move = first;
        self.state = GameState::Playing;
    }

    /// Plays a move given as a 1-indexed column, validating it first.
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState> {
        let cols = self.board.cols();
        if column_one_indexed < 1 || column_one_indexed > cols {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                cols
            ));
        }
        let column = column_one_indexed - 1;
        if !self.board.is_column_open(column) {
            return Err(anyhow!("Invalid move, column {} full", column_one_indexed));
        }

        let piece = self.to_move;
        self.board.drop_piece(column, piece)?;

        self.state = if has_four_in_a_row(&self.board, piece) {
            match piece {
                Piece::Player => GameState::PlayerWin,
                _ => GameState::AiWin,
            }
        } else if valid_moves(&self.board).is_empty() {
            GameState::Draw
        } else {
            GameState::Playing
        };
        self.to_move = piece.other();

        Ok(self.state)
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();
        let rows = self.board.rows();
        let cols = self.board.cols();

        let header: String = (1..=cols).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(header + "\n")))?;
        for _ in 0..rows {
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;

        let (origin_x, origin_y) = crossterm::cursor::position()?;

        for row in 0..rows {
            for col in 0..cols {
                let (pos_x, pos_y) = (origin_x + col as u16, origin_y - row as u16);

                stdout
                    .queue(MoveTo(pos_x, pos_y))?
                    .queue(PrintStyledContent(
                        style("O")
                            .attribute(Attribute::Bold)
                            .on(Color::DarkBlue)
                            .with(match self.board.get(row, col) {
                                Piece::Player => Color::Red,
                                Piece::Ai => Color::Yellow,
                                Piece::Empty => Color::DarkBlue,
                            }),
                    ))?;
            }
        }
        stdout
            .queue(MoveTo(origin_x + cols as u16, origin_y))?
            .queue(PrintStyledContent(style("\n")))?;
        stdout.flush()?;
        Ok(())
    }
}
