//! Error types for grid construction, searching and puzzle loading.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - W001: `EmptyGrid` (Grid has no rows or no columns)
//! - W002: `RaggedGrid` (Grid rows differ in length)
//! - W003: `EmptyWord` (Empty search word)
//! - P001: `Io` (Puzzle file could not be read)
//! - P002: `MissingGrid` (Puzzle text has no grid block)
//! - P003: `MissingWords` (Puzzle text has no words)
//! - P004: `InvalidGrid` (Puzzle grid block failed validation (wraps [`SearchError`]))
//! - P005: `InvalidWordLine` (A word line could not be parsed)
//!
//! "Word not found" is never an error: it is reported as an absent location.
//!
//! # Examples
//!
//! ```
//! use wordfind::errors::SearchError;
//! use wordfind::grid::Grid;
//!
//! match Grid::new(vec![vec!['a', 'b'], vec!['c']]) {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!         assert!(matches!(e, SearchError::RaggedGrid { row: 2, .. }));
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use std::io;
use std::path::PathBuf;

/// Precondition violations detected at the boundary of the searcher.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Grid is empty")]
    EmptyGrid,

    #[error("Grid is not rectangular: row {row} has {found} columns, expected {expected}")]
    RaggedGrid { row: usize, expected: usize, found: usize },

    #[error("Empty search word")]
    EmptyWord,
}

impl SearchError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SearchError::EmptyGrid => "W001",
            SearchError::RaggedGrid { .. } => "W002",
            SearchError::EmptyWord => "W003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SearchError::EmptyGrid => "Grid has no rows or no columns",
            SearchError::RaggedGrid { .. } => "Grid rows differ in length",
            SearchError::EmptyWord => "Empty search word",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SearchError::EmptyGrid => "A word-search grid needs at least one row containing at least one cell.",
            SearchError::RaggedGrid { .. } => "Every row of the grid must have exactly as many cells as the first row. Cell positions are (column, row) pairs, so a short or long row leaves positions undefined.",
            SearchError::EmptyWord => "Every search word must contain at least one character. A word is matched starting from its first letter, which an empty word does not have.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SearchError::EmptyGrid => Some("Provide at least one non-empty row of letters, e.g. 'xcoffeezlp'"),
            SearchError::RaggedGrid { .. } => Some("Pad or trim rows so that every row has the same number of letters"),
            SearchError::EmptyWord => Some("Remove empty entries from the word list"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Errors raised while reading or parsing a puzzle file.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("failed to read puzzle from '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("puzzle has no grid")]
    MissingGrid,

    #[error("puzzle has no words to search for")]
    MissingWords,

    #[error("invalid puzzle grid: {0}")]
    InvalidGrid(#[from] SearchError),

    #[error("cannot parse word list at line {line}: \"{text}\"")]
    InvalidWordLine { line: usize, text: String },
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::Io { .. } => "P001",
            PuzzleError::MissingGrid => "P002",
            PuzzleError::MissingWords => "P003",
            PuzzleError::InvalidGrid(_) => "P004",
            PuzzleError::InvalidWordLine { .. } => "P005",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            PuzzleError::Io { .. } => "Puzzle file could not be read",
            PuzzleError::MissingGrid => "Puzzle text has no grid block",
            PuzzleError::MissingWords => "Puzzle text has no words",
            PuzzleError::InvalidGrid(_) => "Puzzle grid block failed validation",
            PuzzleError::InvalidWordLine { .. } => "A word line could not be parsed",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            PuzzleError::Io { .. } => "The puzzle file does not exist, is not readable, or is not valid UTF-8.",
            PuzzleError::MissingGrid => "A puzzle starts with a block of grid rows (one row per line), terminated by a blank line.",
            PuzzleError::MissingWords => "After the grid block and a blank line, a puzzle lists the words to find, separated by whitespace or commas.",
            PuzzleError::InvalidGrid(_) => "The grid block was found but is not a valid grid. This wraps an underlying SearchError (see Search Errors section for specific error codes).",
            PuzzleError::InvalidWordLine { .. } => "Word lines hold words separated by commas and/or whitespace. A line made only of separators cannot be read as a word list.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::Io { .. } => Some("Check the path passed on the command line"),
            PuzzleError::MissingGrid => Some("Example:\nxcoffeezlp\n\ncoffee"),
            PuzzleError::MissingWords => Some("Add a blank line after the grid, then the words (or pass them with --word)"),
            PuzzleError::InvalidWordLine { .. } => Some("Example word line: 'coffee, tea zlp'"),
            PuzzleError::InvalidGrid(_) => None, // SearchError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            PuzzleError::InvalidGrid(se) => {
                // delegate to SearchError's detailed display
                format!("{}\n  caused by: {}", self.code(), se.display_detailed())
            }
            _ => format_error_with_code_and_help(&self.to_string(), self.code(), self.help()),
        }
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
