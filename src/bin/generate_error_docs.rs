//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `SearchError` and `PuzzleError` implementations via their
//! `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::io;
use std::path::PathBuf;

use wordfind::errors::{PuzzleError, SearchError};

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

/// One example of every `SearchError` variant
fn all_search_error_variants() -> Vec<SearchError> {
    vec![
        SearchError::EmptyGrid,
        SearchError::RaggedGrid { row: 3, expected: 10, found: 9 },
        SearchError::EmptyWord,
    ]
}

/// One example of every `PuzzleError` variant
fn all_puzzle_error_variants() -> Vec<PuzzleError> {
    vec![
        PuzzleError::Io {
            path: PathBuf::from("puzzles/missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        },
        PuzzleError::MissingGrid,
        PuzzleError::MissingWords,
        PuzzleError::InvalidGrid(SearchError::RaggedGrid { row: 2, expected: 5, found: 4 }),
        PuzzleError::InvalidWordLine { line: 7, text: ", ,".to_string() },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Search Errors (W001–W003)](#search-errors)");
    println!("- [Puzzle Errors (P001–P005)](#puzzle-errors)\n");

    println!("## Search Errors\n");
    println!("Precondition violations rejected before any searching happens. A word that is simply not in the grid is not an error.\n");
    generate_error_docs!(all_search_error_variants());

    println!("## Puzzle Errors\n");
    println!("Errors that occur when reading a puzzle file.\n");
    generate_error_docs!(all_puzzle_error_variants());

    println!("## Error Display Formats\n");
    println!("### Simple Format");
    println!("```");
    println!("Error: <message>");
    println!("```\n");
    println!("### Detailed Format (via `display_detailed()`)");
    println!("```");
    println!("<message> (<code>)");
    println!("<help text if available>");
    println!("```");
}
