//! The word searcher: finds where each word starts and ends in a [`Grid`].
//!
//! For every word the grid is scanned row-major for the word's first letter.
//! From each such candidate cell, the 3×3 neighborhood is scanned row-major for
//! the second letter; each hit fixes a [`Direction`], and the rest of the word
//! is checked by stepping straight on in that direction. The first placement
//! that verifies wins, so when a word fits in several places the result is
//! deterministic: earliest start cell in row-major order, then earliest
//! neighbor in row-major order around it.
//!
//! # Examples
//!
//! ```
//! use wordfind::grid::{Coordinate, Grid};
//! use wordfind::searcher::{search, WordLocation};
//!
//! let grid = Grid::from_rows(&["xcoffeezlp"])?;
//! let results = search(["coffee", "tea"], &grid)?;
//!
//! assert_eq!(
//!     results.location("coffee"),
//!     Some(WordLocation { start: Coordinate::new(2, 1), end: Coordinate::new(7, 1) })
//! );
//! assert_eq!(results.location("tea"), None);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use log::{debug, trace};
use serde::Serialize;

use crate::direction::Direction;
use crate::errors::SearchError;
use crate::grid::{Coordinate, Grid};

/// First and last letter positions of a found word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WordLocation {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl WordLocation {
    /// Direction from `start` to `end`.
    ///
    /// `None` when `start == end` (single-letter words), or when the two
    /// positions are not on a common row, column or diagonal.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        let (dx, dy) = self.displacement();
        if dx != 0 && dy != 0 && dx.abs() != dy.abs() {
            return None;
        }
        Direction::from_displacement(dx.signum(), dy.signum())
    }

    /// Number of cells from `start` to `end` inclusive, walking straight.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        let (dx, dy) = self.displacement();
        dx.unsigned_abs().max(dy.unsigned_abs()) + 1
    }

    /// Read the letters from `start` to `end` off `grid`.
    ///
    /// `None` if the location is not a straight line or leaves the grid.
    #[must_use]
    pub fn spell(&self, grid: &Grid) -> Option<String> {
        let mut pos = self.start;
        let mut spelled = String::with_capacity(self.cell_count());
        spelled.push(grid.at(pos)?);

        if self.start == self.end {
            return Some(spelled);
        }

        let dir = self.direction()?;
        while pos != self.end {
            pos = pos.offset(dir.dx(), dir.dy())?;
            spelled.push(grid.at(pos)?);
        }
        Some(spelled)
    }

    fn displacement(&self) -> (isize, isize) {
        // grid coordinates are far below isize::MAX
        let dx = self.end.x as isize - self.start.x as isize;
        let dy = self.end.y as isize - self.start.y as isize;
        (dx, dy)
    }
}

impl fmt::Display for WordLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// Result of a search: every requested word, mapped to where it was found
/// (`None` if it was not found). Iterates in word order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchResults(BTreeMap<String, Option<WordLocation>>);

impl SearchResults {
    /// The entry for `word`: `None` if `word` was not searched for,
    /// `Some(None)` if it was searched for but not found.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Option<WordLocation>> {
        self.0.get(word)
    }

    /// Where `word` was found, if it was searched for and found.
    #[must_use]
    pub fn location(&self, word: &str) -> Option<WordLocation> {
        self.0.get(word).copied().flatten()
    }

    /// Number of distinct words searched for.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of words that were found.
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.0.values().filter(|loc| loc.is_some()).count()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Option<WordLocation>> {
        self.0.iter()
    }

    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, Option<WordLocation>> {
        self.0
    }
}

impl IntoIterator for SearchResults {
    type Item = (String, Option<WordLocation>);
    type IntoIter = btree_map::IntoIter<String, Option<WordLocation>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SearchResults {
    type Item = (&'a String, &'a Option<WordLocation>);
    type IntoIter = btree_map::Iter<'a, String, Option<WordLocation>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Option<WordLocation>)> for SearchResults {
    fn from_iter<I: IntoIterator<Item = (String, Option<WordLocation>)>>(iter: I) -> Self {
        SearchResults(iter.into_iter().collect())
    }
}

/// Searches one grid for any number of words.
#[derive(Debug, Clone, Copy)]
pub struct Searcher<'g> {
    grid: &'g Grid,
}

impl<'g> Searcher<'g> {
    #[must_use]
    pub fn new(grid: &'g Grid) -> Self {
        Self { grid }
    }

    /// Locate a single word.
    ///
    /// # Errors
    ///
    /// [`SearchError::EmptyWord`] if `word` is empty.
    pub fn find(&self, word: &str) -> Result<Option<WordLocation>, SearchError> {
        if word.is_empty() {
            return Err(SearchError::EmptyWord);
        }
        Ok(self.locate(word))
    }

    /// Locate every word in `words`. Duplicate words collapse to one entry.
    ///
    /// All words are validated before any searching starts.
    ///
    /// # Errors
    ///
    /// [`SearchError::EmptyWord`] if any word is empty.
    pub fn search_all<I, S>(&self, words: I) -> Result<SearchResults, SearchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: BTreeSet<String> = words.into_iter().map(|w| w.as_ref().to_owned()).collect();
        if words.iter().any(String::is_empty) {
            return Err(SearchError::EmptyWord);
        }

        debug!(
            "Searching {} word(s) in a {}x{} grid",
            words.len(),
            self.grid.width(),
            self.grid.height()
        );

        Ok(self.locate_each(words.into_iter().collect()))
    }

    #[cfg(not(feature = "parallel"))]
    fn locate_each(&self, words: Vec<String>) -> SearchResults {
        words
            .into_iter()
            .map(|word| {
                let loc = self.locate(&word);
                (word, loc)
            })
            .collect()
    }

    // one task per word; the grid is only ever read
    #[cfg(feature = "parallel")]
    fn locate_each(&self, words: Vec<String>) -> SearchResults {
        use rayon::prelude::*;

        let located: Vec<(String, Option<WordLocation>)> = words
            .into_par_iter()
            .map(|word| {
                let loc = self.locate(&word);
                (word, loc)
            })
            .collect();
        located.into_iter().collect()
    }

    /// Scan phase: try every cell holding the first letter, row-major.
    fn locate(&self, word: &str) -> Option<WordLocation> {
        let letters: Vec<char> = word.chars().collect();
        let &first = letters.first()?;

        let found = self
            .grid
            .coordinates()
            .filter(|pos| self.grid.get(pos.y, pos.x) == first)
            .find_map(|start| self.search_from(start, &letters));

        match found {
            Some(loc) => debug!("'{word}' found at {loc}"),
            None => debug!("'{word}' not found"),
        }
        found
    }

    /// Candidate confirmation from a first-letter cell.
    ///
    /// Neighbors are visited row-major over the 3×3 block; the first direction
    /// that verifies wins.
    fn search_from(&self, start: Coordinate, letters: &[char]) -> Option<WordLocation> {
        let Some(&second) = letters.get(1) else {
            return Some(WordLocation { start, end: start });
        };

        for dy in -1..=1 {
            for dx in -1..=1 {
                let Some(neighbor) = start.offset(dx, dy) else {
                    continue;
                };
                if self.grid.at(neighbor) != Some(second) {
                    continue;
                }
                // the center cell has no direction
                let Some(dir) = Direction::from_displacement(dx, dy) else {
                    continue;
                };

                trace!("probing {dir} from {start}");
                if let Some(end) = self.verify_direction(neighbor, dir, &letters[2..]) {
                    return Some(WordLocation { start, end });
                }
            }
        }
        None
    }

    /// Step from the second-letter cell through `rest`, one cell per letter.
    /// Returns the position of the last letter.
    fn verify_direction(&self, second: Coordinate, dir: Direction, rest: &[char]) -> Option<Coordinate> {
        let mut pos = second;
        for &expected in rest {
            pos = pos.offset(dir.dx(), dir.dy())?;
            if self.grid.at(pos) != Some(expected) {
                return None;
            }
        }
        Some(pos)
    }
}

/// Locate every word of `words` in `grid`.
///
/// Equivalent to `Searcher::new(grid).search_all(words)`.
///
/// # Errors
///
/// [`SearchError::EmptyWord`] if any word is empty. Grid invariants are
/// enforced when the [`Grid`] is built.
pub fn search<I, S>(words: I, grid: &Grid) -> Result<SearchResults, SearchError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Searcher::new(grid).search_all(words)
}
