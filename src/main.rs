use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use wordfind::errors::{PuzzleError, SearchError};
use wordfind::grid::Grid;
use wordfind::puzzle::Puzzle;
use wordfind::searcher::{self, SearchResults};

/// Word-search puzzle solver
#[derive(Parser, Debug)]
#[command(author, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"), about, long_about = None)]
struct Cli {
    /// Path to the puzzle file (grid rows, a blank line, then the words)
    puzzle: PathBuf,

    /// Word to search for instead of the puzzle's own list (repeatable)
    #[arg(short, long = "word")]
    words: Vec<String>,

    /// Lowercase the grid and the words before searching
    #[arg(short = 'i', long)]
    ignore_case: bool,

    /// Re-read every found word off the grid and warn on mismatch
    #[arg(long)]
    verify: bool,

    /// Only print words that were found
    #[arg(long)]
    only_found: bool,
}

/// Entry point of the wordfind CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    wordfind::log::init_logger(wordfind::log::debug_requested());

    if let Err(e) = try_main() {
        if let Some(puzzle_err) = e.downcast_ref::<PuzzleError>() {
            eprintln!("Error: {}", puzzle_err.display_detailed());
        } else if let Some(search_err) = e.downcast_ref::<SearchError>() {
            eprintln!("Error: {}", search_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the wordfind CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the puzzle, optionally overriding its words and lowercasing it.
/// 3. Search for every word.
/// 4. Print one line per word on stdout, and a summary on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // 1. Load the puzzle from disk
    let mut puzzle = Puzzle::load_from_path(&cli.puzzle, &cli.words)?;
    if cli.ignore_case {
        puzzle = puzzle.normalized_lowercase();
    }
    log::info!(
        "Loaded {}x{} grid with {} word(s) from {}",
        puzzle.grid.width(),
        puzzle.grid.height(),
        puzzle.words.len(),
        cli.puzzle.display()
    );

    // 2. Search
    let t_search = Instant::now();
    let results = searcher::search(&puzzle.words, &puzzle.grid)?;
    let search_secs = t_search.elapsed().as_secs_f64();

    // 3. Print results, sorted by word
    if cli.verify {
        for word in misread_words(&results, &puzzle.grid) {
            log::warn!("'{word}' does not read back from the grid");
        }
    }
    for line in render(&results, cli.only_found) {
        println!("{line}");
    }

    // 4. Diagnostics to stderr
    eprintln!(
        "Found {}/{} words in {:.3}s.",
        results.found_count(),
        results.len(),
        search_secs
    );

    Ok(())
}

/// One output line per word, in word order: `word: (x,y) -> (x,y)` or
/// `word: not found` (omitted when `only_found` is set).
fn render(results: &SearchResults, only_found: bool) -> Vec<String> {
    results
        .iter()
        .filter_map(|(word, location)| match location {
            Some(loc) => Some(format!("{word}: {loc}")),
            None if only_found => None,
            None => Some(format!("{word}: not found")),
        })
        .collect()
}

/// Found words whose location does not spell them on `grid`.
fn misread_words<'r>(results: &'r SearchResults, grid: &Grid) -> Vec<&'r str> {
    results
        .iter()
        .filter_map(|(word, location)| {
            let loc = location.as_ref()?;
            (loc.spell(grid).as_deref() != Some(word.as_str())).then_some(word.as_str())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use wordfind::grid::Coordinate;
    use wordfind::searcher::WordLocation;

    fn coffee_results() -> (Grid, SearchResults) {
        let grid = Grid::from_rows(&["xcoffeezlp"]).unwrap();
        let results = searcher::search(["zlp", "tea", "coffee"], &grid).unwrap();
        (grid, results)
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_repeated_words() {
        let cli = Cli::try_parse_from(["wordfind", "p.txt", "-w", "coffee", "--word", "tea", "-i"]).unwrap();
        assert_eq!(cli.puzzle, PathBuf::from("p.txt"));
        assert_eq!(cli.words, vec!["coffee", "tea"]);
        assert!(cli.ignore_case);
        assert!(!cli.verify);
        assert!(!cli.only_found);
    }

    #[test]
    fn test_render_lines_sorted_by_word() {
        let (_, results) = coffee_results();
        assert_eq!(
            render(&results, false),
            ["coffee: (2,1) -> (7,1)", "tea: not found", "zlp: (8,1) -> (10,1)"]
        );
    }

    #[test]
    fn test_render_only_found_drops_absent_words() {
        let (_, results) = coffee_results();
        assert_eq!(
            render(&results, true),
            ["coffee: (2,1) -> (7,1)", "zlp: (8,1) -> (10,1)"]
        );

        let grid = Grid::from_rows(&["abc"]).unwrap();
        let none_found = searcher::search(["xyz"], &grid).unwrap();
        assert!(render(&none_found, true).is_empty());
        assert_eq!(render(&none_found, false), ["xyz: not found"]);
    }

    #[test]
    fn test_misread_words() {
        let (grid, results) = coffee_results();
        assert!(misread_words(&results, &grid).is_empty());

        let shifted = WordLocation { start: Coordinate::new(1, 1), end: Coordinate::new(6, 1) };
        let bogus: SearchResults = [
            ("coffee".to_string(), Some(shifted)),
            ("tea".to_string(), None),
        ]
        .into_iter()
        .collect();
        assert_eq!(misread_words(&bogus, &grid), ["coffee"]);
    }
}
