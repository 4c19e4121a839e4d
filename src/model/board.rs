use std::fmt::{self, Debug};

use log::warn;

use crate::error::{LineId, PuzzleError, SolveError};
use crate::model::Cell;

/// The puzzle grid. Commits are monotonic: once a cell is `Filled` or
/// `Excluded` it keeps that value for the rest of the solve.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(rows: usize, columns: usize) -> Board {
        Board {
            rows,
            columns,
            cells: vec![Cell::Unknown; rows * columns],
        }
    }

    /// Parse a grid from one line of glyphs per row (see
    /// [`Cell::from_glyph`]). All rows must have the same width.
    pub fn parse(input: &str) -> Result<Board, PuzzleError> {
        let mut cells = Vec::new();
        let mut columns = 0;
        let mut rows = 0;
        for (row, line) in input.lines().filter(|line| !line.trim().is_empty()).enumerate() {
            let mut width = 0;
            for (column, glyph) in line.trim().chars().enumerate() {
                let cell = Cell::from_glyph(glyph).ok_or(PuzzleError::BadGlyph {
                    glyph,
                    row,
                    column,
                })?;
                cells.push(cell);
                width += 1;
            }
            if row == 0 {
                columns = width;
            } else if width != columns {
                return Err(PuzzleError::RaggedRow {
                    row,
                    expected: columns,
                    found: width,
                });
            }
            rows += 1;
        }
        Ok(Board {
            rows,
            columns,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    fn index(&self, row: usize, column: usize) -> usize {
        debug_assert!(row < self.rows && column < self.columns);
        row * self.columns + column
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[self.index(row, column)]
    }

    /// Commit a cell to a known value on behalf of `line`, the line being
    /// processed; a conflict is attributed to it. Returns `Ok(true)` for a
    /// fresh commit, `Ok(false)` when the cell already holds the same
    /// value, and a contradiction when it holds the other one.
    pub fn set(
        &mut self,
        row: usize,
        column: usize,
        value: Cell,
        line: LineId,
    ) -> Result<bool, SolveError> {
        debug_assert!(value.is_known(), "only Filled/Excluded can be committed");
        let index = self.index(row, column);
        let current = self.cells[index];
        if current == Cell::Unknown {
            self.cells[index] = value;
            Ok(true)
        } else if current == value {
            Ok(false)
        } else {
            warn!(
                target: "board",
                "cell ({}, {}) already committed as {:?}, refusing {:?} for {}",
                row, column, current, value, line
            );
            Err(SolveError::Contradiction { line })
        }
    }

    /// True when no cell is `Unknown` any more.
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_known())
    }

    pub fn unknown_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| !cell.is_known())
            .count()
    }

    /// A row as a slice; rows are contiguous in storage.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = self.index(row, 0);
        &self.cells[start..start + self.columns]
    }

    /// A column, collected; columns are not contiguous in storage.
    pub fn column(&self, column: usize) -> Vec<Cell> {
        (0..self.rows)
            .map(|row| self.get(row, column))
            .collect()
    }

    /// The grid as one line of glyphs per row.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..self.rows {
            for cell in self.row(row) {
                out.push(cell.glyph());
            }
            out.push('\n');
        }
        out
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
