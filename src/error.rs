/// Errors surfaced by the engine.
///
/// Every variant is a programmer-contract violation local to the core:
/// none are retried, and user-facing messaging is the session layer's
/// responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("search invoked on a position with no move to make")]
    InvalidSearchInvocation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EngineError::OutOfBounds {
            row: 9,
            col: 2,
            rows: 6,
            cols: 7,
        };
        assert_eq!(err.to_string(), "cell (9, 2) is outside the 6x7 board");

        assert_eq!(EngineError::ColumnFull(3).to_string(), "column 3 is full");
    }
}
