use crate::error::EngineError;

/// A single cell of the game grid
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Piece {
    Empty,
    /// the human-side tile, first to move by default
    Player,
    /// the automated-side tile
    Ai,
}

impl Piece {
    /// The opposing side's piece. `Empty` has no opponent and maps to itself.
    pub fn other(self) -> Self {
        match self {
            Piece::Player => Piece::Ai,
            Piece::Ai => Piece::Player,
            Piece::Empty => Piece::Empty,
        }
    }

    pub fn is_empty(self) -> bool {
        match self {
            Piece::Empty => true,
            _ => false,
        }
    }
}

/// The game grid.
///
/// Cells are stored left-to-right, bottom-to-top: row 0 is the bottom row
/// and gravity fills each column upward, so within a column every empty
/// cell sits above every occupied one. The board is value-like; cloning it
/// is how the search explores hypothetical futures without touching the
/// canonical game state.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Piece>,
}

impl Board {
    /// Creates an empty `rows` x `cols` board.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Piece::Empty; rows * cols],
        }
    }

    /// Creates an empty board with the reference 6x7 dimensions.
    pub fn standard() -> Self {
        Self::new(crate::ROWS, crate::COLS)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cell at `(row, col)`, row 0 being the bottom row.
    ///
    /// # Panics
    /// Panics if `(row, col)` is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Piece {
        assert!(row < self.rows && col < self.cols);
        self.cells[col + self.cols * row]
    }

    /// Writes `piece` at `(row, col)` unconditionally.
    ///
    /// The caller is expected to have validated legality (the lowest open
    /// row of an open column); only the grid bounds are checked here.
    pub fn place(&mut self, row: usize, col: usize, piece: Piece) -> Result<(), EngineError> {
        if row >= self.rows || col >= self.cols {
            return Err(EngineError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.cells[col + self.cols * row] = piece;
        Ok(())
    }

    /// True iff the topmost row of `col` still has room.
    ///
    /// Out-of-range columns are reported as closed.
    pub fn is_column_open(&self, col: usize) -> bool {
        col < self.cols && self.get(self.rows - 1, col).is_empty()
    }

    /// The lowest empty row of `col`, scanning from the bottom, or `None`
    /// when the column is full.
    ///
    /// # Panics
    /// Panics if `col` is outside the grid.
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        (0..self.rows).find(|&row| self.get(row, col).is_empty())
    }

    /// Drops `piece` into `col`, letting it fall to the lowest open row.
    ///
    /// Returns the row the piece landed in.
    pub fn drop_piece(&mut self, col: usize, piece: Piece) -> Result<usize, EngineError> {
        if col >= self.cols {
            return Err(EngineError::OutOfBounds {
                row: 0,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let row = self
            .next_open_row(col)
            .ok_or(EngineError::ColumnFull(col))?;
        self.place(row, col, piece)?;
        Ok(row)
    }
}
