use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::Parser;
use num_bigint::BigUint;

use picrust::model::{Board, Puzzle};
use picrust::solver::{ProgressListener, Solver};

/// Solve a nonogram puzzle by constraint propagation.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to a JSON puzzle file.
    puzzle: PathBuf,

    /// Milliseconds to pause after each progress frame.
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Give up with a stalled outcome after this many rounds.
    #[arg(long)]
    max_rounds: Option<usize>,

    /// Only print the final grid.
    #[arg(long)]
    quiet: bool,
}

/// Redraws the grid in place after every round, like watching the solve
/// as an animation.
struct TerminalFrames {
    delay: Duration,
}

impl ProgressListener for TerminalFrames {
    fn on_round(&mut self, board: &Board, remaining: &BigUint) {
        print!("\x1b[2J\x1b[H");
        println!("Progress:");
        print!("{}", board.render());
        println!("possible solutions: {}", remaining);
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let text = fs::read_to_string(&args.puzzle)?;
    let puzzle: Puzzle = serde_json::from_str(&text)?;
    puzzle.validate()?;

    let mut solver = Solver::new(&puzzle)?;
    if let Some(limit) = args.max_rounds {
        solver = solver.with_max_rounds(limit);
    }

    let board = if args.quiet {
        solver.solve()?
    } else {
        let mut frames = TerminalFrames {
            delay: Duration::from_millis(args.delay_ms),
        };
        solver.solve_with(&mut frames)?
    };

    println!("Solution:");
    print!("{}", board.render());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
