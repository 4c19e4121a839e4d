use std::fmt::{self, Display};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::Cell;

/// The run lengths for one line, in order. `[4, 2]` reads: a run of four
/// filled cells, a gap of at least one excluded cell, then a run of two.
/// An empty clue means the whole line is excluded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Clue(pub Vec<usize>);

impl Clue {
    pub fn runs(&self) -> &[usize] {
        &self.0
    }

    pub fn run_count(&self) -> usize {
        self.0.len()
    }

    /// Total number of filled cells the clue demands.
    pub fn filled_count(&self) -> usize {
        self.0.iter().sum()
    }

    /// Cells needed to place every run with single-cell gaps between them.
    pub fn min_length(&self) -> usize {
        if self.0.is_empty() {
            0
        } else {
            self.filled_count() + self.run_count() - 1
        }
    }

    pub fn fits(&self, length: usize) -> bool {
        self.min_length() <= length
    }

    /// Decode the maximal contiguous `Filled` runs of a line back into a
    /// clue. Unknown cells count as not filled, so this is only meaningful
    /// on settled lines.
    pub fn from_cells(cells: &[Cell]) -> Clue {
        let mut runs = Vec::new();
        let mut current = 0;
        for &cell in cells {
            if cell == Cell::Filled {
                current += 1;
            } else if current > 0 {
                runs.push(current);
                current = 0;
            }
        }
        if current > 0 {
            runs.push(current);
        }
        Clue(runs)
    }
}

impl Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}
