use std::fmt;

use thiserror::Error;

use crate::model::Clue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Row,
    Column,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Row => write!(f, "row"),
            Dimension::Column => write!(f, "column"),
        }
    }
}

/// Identifies one line of the board, for error reports and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId {
    pub dimension: Dimension,
    pub index: usize,
}

impl LineId {
    pub fn row(index: usize) -> Self {
        Self {
            dimension: Dimension::Row,
            index,
        }
    }

    pub fn column(index: usize) -> Self {
        Self {
            dimension: Dimension::Column,
            index,
        }
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.dimension, self.index)
    }
}

/// Structural problems in a puzzle definition, caught before solving.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("expected {expected} {dimension} clues, found {found}")]
    ClueCountMismatch {
        dimension: Dimension,
        expected: usize,
        found: usize,
    },
    #[error("clue for {line} contains a zero-length run")]
    ZeroRun { line: LineId },
    #[error("given row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unrecognized cell glyph {glyph:?} at row {row}, column {column}")]
    BadGlyph {
        glyph: char,
        row: usize,
        column: usize,
    },
    #[error("given grid is {found_rows}x{found_columns}, puzzle is {rows}x{columns}")]
    GivensMismatch {
        rows: usize,
        columns: usize,
        found_rows: usize,
        found_columns: usize,
    },
}

/// Why a solve attempt ended without a solved board. All outcomes are
/// fail-fast: no partial board is ever returned alongside one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("invalid puzzle: {0}")]
    Puzzle(#[from] PuzzleError),

    /// The clue cannot fit in its line even when packed as tightly as
    /// possible. Raised while building candidate sets, before any round.
    #[error("clue [{clue}] needs {needed} cells but {line} has {length}")]
    InvalidClue {
        line: LineId,
        clue: Clue,
        needed: usize,
        length: usize,
    },

    /// A line ran out of arrangements, or a cell was asked to take two
    /// different values. The clues and givens admit no consistent solution.
    #[error("no arrangement remains for {line}")]
    Contradiction { line: LineId },

    /// A full round committed nothing while cells are still unknown. The
    /// puzzle cannot be finished by propagation alone; it needs guessing.
    #[error("no progress in round {round}; deduction alone cannot finish this puzzle")]
    Stalled { round: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_id_display() {
        assert_eq!(LineId::row(3).to_string(), "row 3");
        assert_eq!(LineId::column(0).to_string(), "column 0");
    }

    #[test]
    fn test_invalid_clue_message() {
        let err = SolveError::InvalidClue {
            line: LineId::row(2),
            clue: Clue(vec![1, 1]),
            needed: 3,
            length: 1,
        };
        assert_eq!(
            err.to_string(),
            "clue [1 1] needs 3 cells but row 2 has 1"
        );
    }
}
