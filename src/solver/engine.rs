use log::debug;

use crate::error::{LineId, SolveError};
use crate::model::Board;
use crate::solver::line::{LineCandidates, LineSupport};

/// One propagation pass over the whole board: filter and commit every row,
/// then every column. Row commits land on the board before the columns are
/// examined, so deductions cross dimensions within a single round.
#[derive(Debug)]
pub struct Engine {
    board: Board,
    rows: Vec<LineCandidates>,
    columns: Vec<LineCandidates>,
}

impl Engine {
    pub fn new(board: Board, rows: Vec<LineCandidates>, columns: Vec<LineCandidates>) -> Engine {
        Engine {
            board,
            rows,
            columns,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn rows(&self) -> &[LineCandidates] {
        &self.rows
    }

    pub fn columns(&self) -> &[LineCandidates] {
        &self.columns
    }

    /// Run one full round. Returns the number of cells committed; an empty
    /// candidate set aborts with a contradiction naming the line.
    pub fn round(&mut self) -> Result<usize, SolveError> {
        let mut committed = 0;

        let column_support: Vec<LineSupport> =
            self.columns.iter().map(LineCandidates::support).collect();
        for index in 0..self.rows.len() {
            let set = &mut self.rows[index];
            set.retain_board(self.board.row(index));
            set.retain_supported(&column_support);
            if set.is_empty() {
                return Err(SolveError::Contradiction {
                    line: LineId::row(index),
                });
            }
            for (column, value) in set.settled().into_iter().enumerate() {
                if value.is_known()
                    && self.board.set(index, column, value, LineId::row(index))?
                {
                    committed += 1;
                }
            }
        }

        let row_support: Vec<LineSupport> =
            self.rows.iter().map(LineCandidates::support).collect();
        for index in 0..self.columns.len() {
            let cells = self.board.column(index);
            let set = &mut self.columns[index];
            set.retain_board(&cells);
            set.retain_supported(&row_support);
            if set.is_empty() {
                return Err(SolveError::Contradiction {
                    line: LineId::column(index),
                });
            }
            for (row, value) in set.settled().into_iter().enumerate() {
                if value.is_known()
                    && self.board.set(row, index, value, LineId::column(index))?
                {
                    committed += 1;
                }
            }
        }

        debug!(
            target: "solver",
            "round committed {} cells, {} still unknown",
            committed,
            self.board.unknown_count()
        );
        Ok(committed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cell, Clue, Puzzle};

    fn engine_for(puzzle: &Puzzle) -> Engine {
        let board = puzzle.initial_board().unwrap();
        let rows = puzzle
            .row_clues
            .iter()
            .enumerate()
            .map(|(index, clue)| {
                LineCandidates::generate(clue, puzzle.columns, LineId::row(index)).unwrap()
            })
            .collect();
        let columns = puzzle
            .column_clues
            .iter()
            .enumerate()
            .map(|(index, clue)| {
                LineCandidates::generate(clue, puzzle.rows, LineId::column(index)).unwrap()
            })
            .collect();
        Engine::new(board, rows, columns)
    }

    fn clues(raw: &[&[usize]]) -> Vec<Clue> {
        raw.iter().map(|runs| Clue(runs.to_vec())).collect()
    }

    #[test]
    fn test_forced_rows_solve_in_one_round() {
        let puzzle = Puzzle::new(2, 2, clues(&[&[2], &[]]), clues(&[&[1], &[1]]));
        let mut engine = engine_for(&puzzle);
        let committed = engine.round().unwrap();
        assert_eq!(committed, 4);
        assert!(engine.board().is_solved());
        assert_eq!(engine.board().render(), "██\n××\n");
    }

    #[test]
    fn test_cross_filter_prunes_rows() {
        // The board starts blank, so only the cross-dimension filter can
        // rule out the row placements that would fill column 1.
        let puzzle = Puzzle::new(2, 2, clues(&[&[1], &[1]]), clues(&[&[2], &[]]));
        let mut engine = engine_for(&puzzle);
        let committed = engine.round().unwrap();
        assert_eq!(committed, 4);
        assert!(engine.board().is_solved());
        assert_eq!(engine.board().render(), "█×\n█×\n");
    }

    #[test]
    fn test_row_deductions_reach_columns_in_one_round() {
        // Everything the columns need is deduced while the rows are being
        // processed; a single round settles the whole board.
        let puzzle = Puzzle::new(
            2,
            3,
            clues(&[&[2], &[]]),
            clues(&[&[1], &[1], &[]]),
        );
        let mut engine = engine_for(&puzzle);
        let committed = engine.round().unwrap();
        assert_eq!(committed, 6);
        assert!(engine.board().is_solved());
        assert_eq!(engine.board().render(), "██×\n×××\n");
    }

    #[test]
    fn test_round_on_solved_board_is_a_no_op() {
        let puzzle = Puzzle::new(2, 2, clues(&[&[2], &[]]), clues(&[&[1], &[1]]));
        let mut engine = engine_for(&puzzle);
        engine.round().unwrap();
        assert!(engine.board().is_solved());

        let row_counts: Vec<usize> = engine.rows().iter().map(LineCandidates::len).collect();
        let column_counts: Vec<usize> =
            engine.columns().iter().map(LineCandidates::len).collect();
        let committed = engine.round().unwrap();
        assert_eq!(committed, 0);
        let row_counts_after: Vec<usize> =
            engine.rows().iter().map(LineCandidates::len).collect();
        let column_counts_after: Vec<usize> =
            engine.columns().iter().map(LineCandidates::len).collect();
        assert_eq!(row_counts, row_counts_after);
        assert_eq!(column_counts, column_counts_after);
    }

    #[test]
    fn test_contradictory_clues_abort_the_round() {
        // Rows force every cell filled; single-cell column clues then have
        // nowhere left to go.
        let puzzle = Puzzle::new(2, 2, clues(&[&[2], &[2]]), clues(&[&[1], &[1]]));
        let mut engine = engine_for(&puzzle);
        assert_eq!(
            engine.round(),
            Err(SolveError::Contradiction {
                line: LineId::column(0)
            })
        );
    }

    #[test]
    fn test_candidate_sets_and_unknowns_shrink_monotonically() {
        let puzzle = Puzzle::new(
            5,
            5,
            clues(&[&[5], &[1, 1, 1], &[5], &[1, 1, 1], &[5]]),
            clues(&[&[5], &[1, 1, 1], &[5], &[1, 1, 1], &[5]]),
        );
        let mut engine = engine_for(&puzzle);
        let mut unknown = engine.board().unknown_count();
        let mut counts: Vec<usize> = engine
            .rows()
            .iter()
            .chain(engine.columns())
            .map(LineCandidates::len)
            .collect();
        for _ in 0..4 {
            engine.round().unwrap();
            let unknown_now = engine.board().unknown_count();
            assert!(unknown_now <= unknown);
            unknown = unknown_now;
            let counts_now: Vec<usize> = engine
                .rows()
                .iter()
                .chain(engine.columns())
                .map(LineCandidates::len)
                .collect();
            for (before, after) in counts.iter().zip(&counts_now) {
                assert!(after <= before);
            }
            counts = counts_now;
        }
        assert!(engine.board().is_solved());
    }

    #[test]
    fn test_board_filter_respects_givens() {
        // The pre-excluded cell rules out the leftmost placement of the
        // run; the column clues pin what is left.
        let puzzle = Puzzle::new(1, 5, clues(&[&[3]]), clues(&[&[], &[1], &[1], &[1], &[]]))
            .with_givens(vec!["x....".to_string()]);
        let mut engine = engine_for(&puzzle);
        engine.round().unwrap();
        assert_eq!(engine.board().get(0, 0), Cell::Excluded);
        assert!(engine.board().is_solved());
        assert_eq!(engine.board().render(), "×███×\n");
    }
}
