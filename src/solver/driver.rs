use log::debug;
use num_bigint::BigUint;

use crate::error::{LineId, SolveError};
use crate::model::{Board, Puzzle};
use crate::solver::engine::Engine;
use crate::solver::line::LineCandidates;

/// Collaborator notified after every propagation round. The solver assumes
/// nothing about what implementations do with the snapshot; rendering,
/// pacing, and screen control all live on the other side of this trait.
pub trait ProgressListener {
    fn on_round(&mut self, _board: &Board, _remaining: &BigUint) {}
}

/// Listener that discards every report.
pub struct Silent;

impl ProgressListener for Silent {}

#[derive(Debug)]
pub struct Solver {
    engine: Engine,
    max_rounds: Option<usize>,
}

impl Solver {
    /// Build the candidate sets for every line and seed the board with the
    /// puzzle's givens. A clue that cannot fit its line surfaces here,
    /// before any round runs.
    pub fn new(puzzle: &Puzzle) -> Result<Solver, SolveError> {
        puzzle.validate()?;
        let board = puzzle.initial_board()?;
        let rows = puzzle
            .row_clues
            .iter()
            .enumerate()
            .map(|(index, clue)| {
                LineCandidates::generate(clue, puzzle.columns, LineId::row(index))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let columns = puzzle
            .column_clues
            .iter()
            .enumerate()
            .map(|(index, clue)| {
                LineCandidates::generate(clue, puzzle.rows, LineId::column(index))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Solver {
            engine: Engine::new(board, rows, columns),
            max_rounds: None,
        })
    }

    /// Give up with a stalled outcome once this many rounds have run,
    /// whether or not progress is still being made.
    pub fn with_max_rounds(mut self, limit: usize) -> Solver {
        self.max_rounds = Some(limit);
        self
    }

    /// Loose overestimate of the assignments still open: the product of
    /// every line's surviving arrangement count. Cross-dimension
    /// consistency is only partially reflected, so the true count is
    /// usually far smaller.
    pub fn remaining_upper_bound(&self) -> BigUint {
        self.engine
            .rows()
            .iter()
            .chain(self.engine.columns())
            .map(|set| BigUint::from(set.len()))
            .product()
    }

    pub fn solve(self) -> Result<Board, SolveError> {
        self.solve_with(&mut Silent)
    }

    /// Run propagation rounds until no cell is unknown, reporting after
    /// each round. A round that commits nothing while the board is
    /// unsolved means deduction is exhausted, and the solve ends stalled.
    pub fn solve_with(
        mut self,
        listener: &mut dyn ProgressListener,
    ) -> Result<Board, SolveError> {
        let mut round = 0;
        while !self.engine.board().is_solved() {
            if let Some(limit) = self.max_rounds {
                if round >= limit {
                    debug!(target: "solver", "round limit {} reached", limit);
                    return Err(SolveError::Stalled { round });
                }
            }
            round += 1;
            let committed = self.engine.round()?;
            listener.on_round(self.engine.board(), &self.remaining_upper_bound());
            if committed == 0 {
                return Err(SolveError::Stalled { round });
            }
        }
        debug!(target: "solver", "solved in {} rounds", round);
        Ok(self.engine.into_board())
    }
}

/// Solve a puzzle with no progress reporting.
pub fn solve(puzzle: &Puzzle) -> Result<Board, SolveError> {
    Solver::new(puzzle)?.solve()
}
