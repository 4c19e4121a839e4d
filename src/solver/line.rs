use log::trace;

use crate::error::{LineId, SolveError};
use crate::model::{Cell, Clue};
use crate::solver::arrangement::Arrangements;

/// For each position of a line: can any surviving arrangement place a filled
/// cell there, and can any place an excluded cell there. A position with
/// exactly one of the two still possible is settled for the whole line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSupport {
    can_fill: Vec<bool>,
    can_exclude: Vec<bool>,
}

impl LineSupport {
    pub fn admits(&self, position: usize, value: Cell) -> bool {
        match value {
            Cell::Filled => self.can_fill[position],
            Cell::Excluded => self.can_exclude[position],
            Cell::Unknown => true,
        }
    }

    /// The consensus value at a position, `Unknown` where the survivors
    /// still disagree.
    pub fn settled(&self, position: usize) -> Cell {
        match (self.can_fill[position], self.can_exclude[position]) {
            (true, false) => Cell::Filled,
            (false, true) => Cell::Excluded,
            _ => Cell::Unknown,
        }
    }
}

/// The arrangements of one line still consistent with everything deduced so
/// far. The set only ever shrinks; an empty set means the puzzle is
/// over-constrained.
#[derive(Debug)]
pub struct LineCandidates {
    line: LineId,
    length: usize,
    masks: Vec<Vec<Cell>>,
}

impl LineCandidates {
    /// Enumerate the full arrangement set for a clue. A clue that cannot fit
    /// its line is an error here, never a silently empty set.
    pub fn generate(clue: &Clue, length: usize, line: LineId) -> Result<LineCandidates, SolveError> {
        if !clue.fits(length) {
            return Err(SolveError::InvalidClue {
                line,
                clue: clue.clone(),
                needed: clue.min_length(),
                length,
            });
        }
        let masks: Vec<Vec<Cell>> = Arrangements::new(clue, length).collect();
        trace!(
            target: "solver",
            "{} starts with {} arrangements",
            line,
            masks.len()
        );
        Ok(LineCandidates {
            line,
            length,
            masks,
        })
    }

    pub fn line(&self) -> LineId {
        self.line
    }

    pub fn len(&self) -> usize {
        self.masks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    /// Drop arrangements that disagree with a cell already committed on the
    /// board.
    pub fn retain_board(&mut self, cells: &[Cell]) {
        debug_assert_eq!(cells.len(), self.length);
        let before = self.masks.len();
        self.masks.retain(|mask| {
            mask.iter()
                .zip(cells)
                .all(|(&value, &known)| known.admits(value))
        });
        if self.masks.len() < before {
            trace!(
                target: "solver",
                "{}: board filter kept {} of {}",
                self.line,
                self.masks.len(),
                before
            );
        }
    }

    /// Drop arrangements the perpendicular lines can no longer meet: the
    /// value at position `j` must be achievable by some survivor of
    /// crossing line `j` at the cell where the two lines meet.
    pub fn retain_supported(&mut self, crossing: &[LineSupport]) {
        debug_assert_eq!(crossing.len(), self.length);
        let own = self.line.index;
        let before = self.masks.len();
        self.masks.retain(|mask| {
            mask.iter()
                .enumerate()
                .all(|(position, &value)| crossing[position].admits(own, value))
        });
        if self.masks.len() < before {
            trace!(
                target: "solver",
                "{}: cross filter kept {} of {}",
                self.line,
                self.masks.len(),
                before
            );
        }
    }

    /// What the surviving arrangements can still do at each position.
    pub fn support(&self) -> LineSupport {
        let mut can_fill = vec![false; self.length];
        let mut can_exclude = vec![false; self.length];
        for mask in &self.masks {
            for (position, &value) in mask.iter().enumerate() {
                match value {
                    Cell::Filled => can_fill[position] = true,
                    Cell::Excluded => can_exclude[position] = true,
                    Cell::Unknown => {}
                }
            }
        }
        LineSupport {
            can_fill,
            can_exclude,
        }
    }

    /// Per-position consensus across the survivors. A set with a single
    /// survivor settles every position.
    pub fn settled(&self) -> Vec<Cell> {
        let support = self.support();
        (0..self.length)
            .map(|position| support.settled(position))
            .collect()
    }
}
