use serde::{Deserialize, Serialize};

use crate::error::{Dimension, LineId, PuzzleError};
use crate::model::{Board, Clue};

/// Everything one solve needs: board dimensions, the clue sequences for both
/// dimensions, and optionally some cells known up front.
///
/// Givens are written as one string of glyphs per row (`.` unknown, `#`
/// filled, `x` excluded), which keeps puzzle files readable.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Puzzle {
    pub rows: usize,
    pub columns: usize,
    pub row_clues: Vec<Clue>,
    pub column_clues: Vec<Clue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub givens: Option<Vec<String>>,
}

impl Puzzle {
    pub fn new(
        rows: usize,
        columns: usize,
        row_clues: Vec<Clue>,
        column_clues: Vec<Clue>,
    ) -> Puzzle {
        Puzzle {
            rows,
            columns,
            row_clues,
            column_clues,
            givens: None,
        }
    }

    pub fn with_givens(mut self, givens: Vec<String>) -> Puzzle {
        self.givens = Some(givens);
        self
    }

    /// Check everything that can be checked without solving: clue counts
    /// match the dimensions, runs are positive, givens have the right shape.
    /// Clue-vs-length feasibility is the solver's concern.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if self.row_clues.len() != self.rows {
            return Err(PuzzleError::ClueCountMismatch {
                dimension: Dimension::Row,
                expected: self.rows,
                found: self.row_clues.len(),
            });
        }
        if self.column_clues.len() != self.columns {
            return Err(PuzzleError::ClueCountMismatch {
                dimension: Dimension::Column,
                expected: self.columns,
                found: self.column_clues.len(),
            });
        }
        for (index, clue) in self.row_clues.iter().enumerate() {
            if clue.runs().contains(&0) {
                return Err(PuzzleError::ZeroRun {
                    line: LineId::row(index),
                });
            }
        }
        for (index, clue) in self.column_clues.iter().enumerate() {
            if clue.runs().contains(&0) {
                return Err(PuzzleError::ZeroRun {
                    line: LineId::column(index),
                });
            }
        }
        self.initial_board().map(|_| ())
    }

    /// The starting board: blank, or the parsed givens.
    pub fn initial_board(&self) -> Result<Board, PuzzleError> {
        let Some(givens) = &self.givens else {
            return Ok(Board::new(self.rows, self.columns));
        };
        let board = Board::parse(&givens.join("\n"))?;
        if board.rows() != self.rows || board.columns() != self.columns {
            return Err(PuzzleError::GivensMismatch {
                rows: self.rows,
                columns: self.columns,
                found_rows: board.rows(),
                found_columns: board.columns(),
            });
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Cell;

    fn clues(raw: &[&[usize]]) -> Vec<Clue> {
        raw.iter().map(|runs| Clue(runs.to_vec())).collect()
    }

    #[test]
    fn test_validate_accepts_consistent_puzzle() {
        let puzzle = Puzzle::new(
            2,
            3,
            clues(&[&[3], &[1]]),
            clues(&[&[2], &[1], &[1]]),
        );
        assert_eq!(puzzle.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_clue_count_mismatch() {
        let puzzle = Puzzle::new(2, 2, clues(&[&[1]]), clues(&[&[1], &[1]]));
        assert_eq!(
            puzzle.validate(),
            Err(PuzzleError::ClueCountMismatch {
                dimension: Dimension::Row,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_validate_rejects_zero_run() {
        let puzzle = Puzzle::new(1, 2, clues(&[&[1]]), clues(&[&[0], &[1]]));
        assert_eq!(
            puzzle.validate(),
            Err(PuzzleError::ZeroRun {
                line: LineId::column(0)
            })
        );
    }

    #[test]
    fn test_initial_board_blank_by_default() {
        let puzzle = Puzzle::new(2, 2, clues(&[&[1], &[1]]), clues(&[&[1], &[1]]));
        let board = puzzle.initial_board().unwrap();
        assert_eq!(board.unknown_count(), 4);
    }

    #[test]
    fn test_initial_board_from_givens() {
        let puzzle = Puzzle::new(2, 2, clues(&[&[1], &[1]]), clues(&[&[1], &[1]]))
            .with_givens(vec!["#.".to_string(), ".x".to_string()]);
        let board = puzzle.initial_board().unwrap();
        assert_eq!(board.get(0, 0), Cell::Filled);
        assert_eq!(board.get(1, 1), Cell::Excluded);
        assert_eq!(board.unknown_count(), 2);
    }

    #[test]
    fn test_initial_board_rejects_wrong_shape() {
        let puzzle = Puzzle::new(2, 2, clues(&[&[1], &[1]]), clues(&[&[1], &[1]]))
            .with_givens(vec!["#.".to_string()]);
        assert_eq!(
            puzzle.initial_board(),
            Err(PuzzleError::GivensMismatch {
                rows: 2,
                columns: 2,
                found_rows: 1,
                found_columns: 2
            })
        );
    }

    #[test]
    fn test_json_round_trip() {
        let text = r#"{
            "rows": 2,
            "columns": 2,
            "row_clues": [[1], [1]],
            "column_clues": [[1], [1]]
        }"#;
        let puzzle: Puzzle = serde_json::from_str(text).unwrap();
        assert_eq!(puzzle.row_clues, clues(&[&[1], &[1]]));
        assert_eq!(puzzle.givens, None);

        let serialized = serde_json::to_string(&puzzle).unwrap();
        let reparsed: Puzzle = serde_json::from_str(&serialized).unwrap();
        assert_eq!(reparsed, puzzle);
    }
}
