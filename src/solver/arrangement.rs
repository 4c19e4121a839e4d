use crate::model::{Cell, Clue};

/// Iterator over every placement of a clue's runs within a line of fixed
/// length: runs keep their order, consecutive runs are separated by at least
/// one excluded cell, and leftover space pads the ends.
///
/// Enumeration keeps the start position of each run and works like an
/// odometer: emit the current placement, then shift the rightmost run that
/// still has room one cell to the right and pack every run after it back to
/// its leftmost position. Callers are expected to check `clue.fits(length)`
/// first; an infeasible clue yields nothing.
pub struct Arrangements {
    length: usize,
    runs: Vec<usize>,
    /// `tail_min[i]` is the space runs `i..` need when packed tightly.
    tail_min: Vec<usize>,
    /// Start position of each run for the next placement to emit.
    starts: Vec<usize>,
    done: bool,
}

impl Arrangements {
    pub fn new(clue: &Clue, length: usize) -> Arrangements {
        let runs = clue.runs().to_vec();
        let mut tail_min = vec![0; runs.len()];
        for index in (0..runs.len()).rev() {
            tail_min[index] = if index + 1 < runs.len() {
                runs[index] + 1 + tail_min[index + 1]
            } else {
                runs[index]
            };
        }
        let mut starts = Vec::with_capacity(runs.len());
        let mut position = 0;
        for &run in &runs {
            starts.push(position);
            position += run + 1;
        }
        let done = !clue.fits(length);
        Arrangements {
            length,
            runs,
            tail_min,
            starts,
            done,
        }
    }

    fn mask(&self) -> Vec<Cell> {
        let mut mask = vec![Cell::Excluded; self.length];
        for (&start, &run) in self.starts.iter().zip(&self.runs) {
            for cell in &mut mask[start..start + run] {
                *cell = Cell::Filled;
            }
        }
        mask
    }

    fn advance(&mut self) {
        for index in (0..self.starts.len()).rev() {
            if self.starts[index] + 1 + self.tail_min[index] <= self.length {
                self.starts[index] += 1;
                let mut position = self.starts[index] + self.runs[index] + 1;
                for next in index + 1..self.starts.len() {
                    self.starts[next] = position;
                    position += self.runs[next] + 1;
                }
                return;
            }
        }
        self.done = true;
    }
}

impl Iterator for Arrangements {
    type Item = Vec<Cell>;

    fn next(&mut self) -> Option<Vec<Cell>> {
        if self.done {
            return None;
        }
        let mask = self.mask();
        if self.starts.is_empty() {
            // Empty clue: the single all-excluded placement.
            self.done = true;
        } else {
            self.advance();
        }
        Some(mask)
    }
}
