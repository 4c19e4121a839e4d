mod arrangement;
mod driver;
mod engine;
mod line;

pub use arrangement::Arrangements;
pub use driver::{solve, ProgressListener, Silent, Solver};
pub use engine::Engine;
pub use line::{LineCandidates, LineSupport};
