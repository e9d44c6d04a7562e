//! `puzzle` — reading a word-search puzzle (grid plus word list) from text.
//!
//! The format is line-based:
//!
//! ```text
//! # lines starting with '#' are comments
//! x c o f f e e z l p
//! a b c d e f g h i j
//!
//! coffee
//! tea, zlp
//! ```
//!
//! - The grid block is the first run of non-blank lines. Whitespace inside a
//!   row is dropped, so `x c o f` and `xcof` are the same row.
//! - A blank line ends the grid block.
//! - Every following non-blank, non-comment line holds one or more words,
//!   separated by commas and/or whitespace.
//!
//! Parsing never touches the filesystem (`parse_from_str`), so it works in
//! WASM builds; `load_from_path` is the native-only convenience wrapper.

use nom::{
    bytes::complete::{is_a, is_not},
    combinator::{all_consuming, opt},
    multi::separated_list1,
    sequence::delimited,
    IResult,
    Parser,
};
use std::str::FromStr;

use crate::errors::PuzzleError;
use crate::grid::{single_lowercase, Grid};

const COMMENT_PREFIX: char = '#';
const WORD_SEPARATORS: &str = ", \t";

/// A grid and the words to look for in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub grid: Grid,
    /// Words in the order they were listed (duplicates kept).
    pub words: Vec<String>,
}

impl Puzzle {
    /// Parse a puzzle from an in-memory string.
    ///
    /// # Errors
    ///
    /// - [`PuzzleError::MissingGrid`] if there is no grid block.
    /// - [`PuzzleError::InvalidGrid`] if the grid block is not rectangular.
    /// - [`PuzzleError::InvalidWordLine`] if a word line holds only separators.
    /// - [`PuzzleError::MissingWords`] if no words follow the grid.
    pub fn parse_from_str(contents: &str) -> Result<Puzzle, PuzzleError> {
        Self::parse_with_words(contents, &[])
    }

    /// Parse a puzzle, replacing its word list with `words` when `words` is
    /// non-empty. The file's own word lines are still checked.
    ///
    /// # Errors
    ///
    /// Same as [`Puzzle::parse_from_str`], except that `MissingWords` is only
    /// returned when both the text and `words` are empty.
    pub fn parse_with_words(contents: &str, words: &[String]) -> Result<Puzzle, PuzzleError> {
        let mut lines = contents.lines().enumerate().map(|(idx, l)| (idx + 1, l.trim()));

        // Steps 1–2: skip leading blank/comment lines, then collect grid rows up to
        // the first blank line.
        let mut rows: Vec<String> = Vec::new();
        for (_, line) in lines.by_ref() {
            if line.is_empty() {
                if rows.is_empty() {
                    continue;
                }
                break;
            }
            if line.starts_with(COMMENT_PREFIX) {
                continue;
            }
            rows.push(line.chars().filter(|c| !c.is_whitespace()).collect());
        }

        if rows.is_empty() {
            return Err(PuzzleError::MissingGrid);
        }
        let grid = Grid::from_rows(&rows)?;

        // Step 3: word lines
        let mut listed: Vec<String> = Vec::new();
        for (line_no, line) in lines {
            if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                continue;
            }
            let (_, line_words) = all_consuming(word_line).parse(line).map_err(|_| {
                PuzzleError::InvalidWordLine { line: line_no, text: line.to_string() }
            })?;
            listed.extend(line_words.into_iter().map(str::to_string));
        }

        let words = if words.is_empty() { listed } else { words.to_vec() };
        if words.is_empty() {
            return Err(PuzzleError::MissingWords);
        }

        log::debug!(
            "Parsed puzzle: {}x{} grid, {} word(s)",
            grid.width(),
            grid.height(),
            words.len()
        );

        Ok(Puzzle { grid, words })
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// [`PuzzleError::Io`] if the file cannot be read, otherwise the errors of
    /// [`Puzzle::parse_with_words`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(
        path: P,
        words: &[String],
    ) -> Result<Puzzle, PuzzleError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|source| PuzzleError::Io {
            path: path_ref.to_path_buf(),
            source,
        })?;

        Self::parse_with_words(&data, words)
    }

    /// A copy with grid and words lowercased.
    ///
    /// Searching itself is case-sensitive; this is how callers opt into
    /// case-insensitive matching.
    #[must_use]
    pub fn normalized_lowercase(&self) -> Puzzle {
        Puzzle {
            grid: self.grid.to_lowercase(),
            words: self.words.iter().map(|w| w.chars().map(single_lowercase).collect()).collect(),
        }
    }
}

impl FromStr for Puzzle {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Puzzle::parse_from_str(s)
    }
}

// === Word-line parsers ===

fn separator(input: &str) -> IResult<&str, &str> {
    is_a(WORD_SEPARATORS).parse(input)
}

fn word(input: &str) -> IResult<&str, &str> {
    is_not(WORD_SEPARATORS).parse(input)
}

/// One or more words, with optional leading/trailing separators.
fn word_line(input: &str) -> IResult<&str, Vec<&str>> {
    delimited(opt(separator), separated_list1(separator, word), opt(separator)).parse(input)
}
