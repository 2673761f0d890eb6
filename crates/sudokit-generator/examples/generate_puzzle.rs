//! Example demonstrating Sudoku puzzle generation.
//!
//! Generates one puzzle and prints its seed, problem, and solution in the
//! engine's textual grid format.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty (easy, medium, or hard):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Reproduce a previous puzzle from its 64-hex-character seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <SEED>
//! ```
//!
//! Generation timing is logged at debug level:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example generate_puzzle
//! ```

use std::process;

use clap::Parser;
use sudokit_core::Difficulty;
use sudokit_generator::{PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty label controlling how many cells are removed.
    #[arg(short, long, value_name = "LABEL", default_value = "easy")]
    difficulty: String,

    /// Seed to reproduce a previous puzzle (64 hex characters).
    #[arg(short, long, value_name = "SEED")]
    seed: Option<String>,

    /// Board dimension; must be a perfect square.
    #[arg(short = 'n', long, value_name = "N", default_value_t = 9)]
    size: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let difficulty: Difficulty = match args.difficulty.parse() {
        Ok(difficulty) => difficulty,
        Err(err) => {
            eprintln!("{err}");
            eprintln!(
                "Available difficulties: {}",
                Difficulty::ALL.map(|d| d.name()).join(", ")
            );
            process::exit(2);
        }
    };

    let seed = match args.seed {
        Some(text) => match text.parse::<PuzzleSeed>() {
            Ok(seed) => seed,
            Err(err) => {
                eprintln!("{err}");
                process::exit(2);
            }
        },
        None => PuzzleSeed::random(),
    };

    let generator = PuzzleGenerator::new(args.size, difficulty);
    let puzzle = generator.generate_with_seed(seed);

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Difficulty:");
    println!("  {}", puzzle.difficulty);
    println!();
    println!("Problem:");
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
}
