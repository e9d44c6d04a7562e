//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of `search` on *your* machine.
//! - Loads a puzzle once for its word list, then searches it in the puzzle's
//!   own grid and in a few larger pseudo-random grids, reporting the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - With the rayon-backed search:   `cargo run --bin bench_local --release --features parallel`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - Grids are generated from a fixed seed, so runs are comparable.
//! - One warm-up run per case is done (not included in timing).

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;
use wordfind::grid::Grid;
use wordfind::puzzle::Puzzle;
use wordfind::searcher;

/// Simple local benchmark runner: load a puzzle once, time several grid sizes.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the puzzle whose words are searched for
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/animals.txt")
    )]
    puzzle: String,

    /// Number of repeats per case (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,

    /// Seed for the generated grids
    #[arg(short, long, default_value_t = 0x5EED)]
    seed: u64,
}

/// Side lengths of the generated square grids.
const GENERATED_SIZES: [usize; 3] = [32, 128, 512];

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

/// Square grid of lowercase letters from a 64-bit LCG (Knuth's MMIX constants).
fn generated_grid(side: usize, seed: u64) -> Result<Grid, wordfind::SearchError> {
    let mut state = seed;
    let rows = (0..side)
        .map(|_| {
            (0..side)
                .map(|_| {
                    state = state
                        .wrapping_mul(6_364_136_223_846_793_005)
                        .wrapping_add(1_442_695_040_888_963_407);
                    // high bits are the most random ones
                    let letter = ((state >> 33) % 26) as u8;
                    char::from(b'a' + letter)
                })
                .collect()
        })
        .collect();
    Grid::new(rows)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    eprintln!("Loading puzzle from: {}", cli.puzzle);
    let puzzle = Puzzle::load_from_path(&cli.puzzle, &[])?;
    eprintln!("Loaded {} words", puzzle.words.len());

    let mut cases: Vec<(String, Grid)> = vec![(
        format!("puzzle {}x{}", puzzle.grid.width(), puzzle.grid.height()),
        puzzle.grid.clone(),
    )];
    for side in GENERATED_SIZES {
        cases.push((format!("random {side}x{side}"), generated_grid(side, cli.seed)?));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<20} | {:>10} | {:>7}", "grid", "median (s)", "found");
    eprintln!("{:-<20}-+-{:-<10}-+-{:-<7}", "", "", "");

    for (name, grid) in &cases {
        let _warmup = searcher::search(&puzzle.words, grid)?;

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut found = 0;
        for _ in 0..cli.num_repeats {
            let t_search = Instant::now();
            let results = searcher::search(black_box(&puzzle.words), grid)?;
            times.push(t_search.elapsed().as_secs_f64());
            found = black_box(results.found_count());
        }

        eprintln!(
            "{name:<20} | {:>10.6} | {:>3}/{:<3}",
            median(times),
            found,
            puzzle.words.len()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 2.0, 3.0]), 2.5);
    }

    #[test]
    fn test_generated_grid_is_deterministic() {
        let a = generated_grid(8, 42).unwrap();
        let b = generated_grid(8, 42).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.width(), 8);
        assert_eq!(a.height(), 8);
        assert!(a.to_string().chars().all(|c| c == '\n' || c.is_ascii_lowercase()));
    }
}
