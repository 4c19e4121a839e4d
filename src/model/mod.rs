mod board;
mod cell;
mod clue;
mod puzzle;

pub use board::Board;
pub use cell::Cell;
pub use clue::Clue;
pub use puzzle::Puzzle;
