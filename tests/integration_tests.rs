//! Integration tests for the wordfind solver.
//!
//! These tests go through the public API: puzzle parsing, grid construction,
//! searching, and reading found words back off the grid.

use std::collections::HashSet;
use std::fs;

use wordfind::direction::Direction;
use wordfind::errors::{PuzzleError, SearchError};
use wordfind::grid::{Coordinate, Grid};
use wordfind::puzzle::Puzzle;
use wordfind::searcher::{search, SearchResults, Searcher, WordLocation};

/// Load a puzzle from `tests/fixtures`
fn load_fixture(name: &str) -> Puzzle {
    let content = fs::read_to_string(format!("tests/fixtures/{name}"))
        .expect("Failed to read fixture");
    Puzzle::parse_from_str(&content).expect("Fixture should be a valid puzzle")
}

fn loc(x1: usize, y1: usize, x2: usize, y2: usize) -> WordLocation {
    WordLocation { start: Coordinate::new(x1, y1), end: Coordinate::new(x2, y2) }
}

/// Straightforward reference: every start cell row-major, every direction in
/// 3×3 row-major neighbor order, compare letters by index.
fn reference_locate(grid: &Grid, word: &str) -> Option<WordLocation> {
    let letters: Vec<char> = word.chars().collect();
    let h = grid.height() as isize;
    let w = grid.width() as isize;
    for y in 1..=h {
        for x in 1..=w {
            if grid.get(y as usize, x as usize) != letters[0] {
                continue;
            }
            if letters.len() == 1 {
                return Some(loc(x as usize, y as usize, x as usize, y as usize));
            }
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if (dx, dy) == (0, 0) {
                        continue;
                    }
                    let fits = letters.iter().enumerate().all(|(i, &c)| {
                        let (px, py) = (x + dx * i as isize, y + dy * i as isize);
                        (1..=w).contains(&px) && (1..=h).contains(&py) && grid.get(py as usize, px as usize) == c
                    });
                    if fits {
                        let n = letters.len() as isize - 1;
                        return Some(loc(x as usize, y as usize, (x + dx * n) as usize, (y + dy * n) as usize));
                    }
                }
            }
        }
    }
    None
}

mod examples {
    use super::*;

    #[test]
    fn test_coffee_fixture() {
        let puzzle = load_fixture("coffee.txt");
        let results = search(&puzzle.words, &puzzle.grid).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results.location("coffee"), Some(loc(2, 1, 7, 1)));
    }

    #[test]
    fn test_abc_diagonal() {
        let grid = Grid::from_rows(&["abz", "zbz", "zzc"]).unwrap();
        let results = search(["abc"], &grid).unwrap();
        assert_eq!(results.location("abc"), Some(loc(1, 1, 3, 3)));
    }

    #[test]
    fn test_xyz_absent_without_x() {
        let grid = Grid::from_rows(&["abc", "def", "ghi"]).unwrap();
        let results = search(["xyz"], &grid).unwrap();
        assert_eq!(results.get("xyz"), Some(&None));
    }
}

mod animals {
    use super::*;

    fn results() -> (Puzzle, SearchResults) {
        let puzzle = load_fixture("animals.txt");
        let results = search(&puzzle.words, &puzzle.grid).unwrap();
        (puzzle, results)
    }

    #[test]
    fn test_every_direction() {
        let (_, results) = results();
        let expected = [
            ("horse", loc(1, 1, 5, 1), Direction::East),
            ("tiger", loc(10, 2, 6, 2), Direction::West),
            ("goat", loc(1, 3, 1, 6), Direction::South),
            ("llama", loc(10, 10, 10, 6), Direction::North),
            ("owl", loc(3, 3, 5, 5), Direction::SouthEast),
            ("yak", loc(9, 9, 7, 7), Direction::NorthWest),
            ("fox", loc(2, 10, 4, 8), Direction::NorthEast),
            ("emu", loc(8, 4, 6, 6), Direction::SouthWest),
        ];
        for (word, location, direction) in expected {
            assert_eq!(results.location(word), Some(location), "wrong location for '{word}'");
            assert_eq!(location.direction(), Some(direction), "wrong direction for '{word}'");
        }

        let directions: HashSet<Direction> = expected.iter().map(|(_, _, d)| *d).collect();
        assert_eq!(directions.len(), 8);
    }

    #[test]
    fn test_extras_and_absent_words() {
        let (puzzle, results) = results();
        assert_eq!(puzzle.words.len(), 12);
        assert_eq!(results.location("zebra"), Some(loc(6, 1, 10, 1)));
        assert_eq!(results.location("cat"), Some(loc(3, 8, 5, 6)));
        assert_eq!(results.get("dog"), Some(&None));
        assert_eq!(results.get("lion"), Some(&None));
        assert_eq!(results.found_count(), 10);
    }

    #[test]
    fn test_found_words_read_back() {
        let (puzzle, results) = results();
        for (word, location) in &results {
            if let Some(location) = location {
                assert_eq!(location.spell(&puzzle.grid).as_deref(), Some(word.as_str()));
                assert_eq!(location.cell_count(), word.chars().count());
            }
        }
    }

    #[test]
    fn test_load_from_path() {
        let puzzle = Puzzle::load_from_path("tests/fixtures/animals.txt", &[]).unwrap();
        assert_eq!(puzzle, load_fixture("animals.txt"));
    }

    #[test]
    fn test_word_override_and_case_normalization() {
        let words = vec!["HORSE".to_string(), "Yak".to_string()];
        let puzzle = Puzzle::load_from_path("tests/fixtures/animals.txt", &words).unwrap();
        assert_eq!(puzzle.words, words);

        // case-sensitive as given
        let results = search(&puzzle.words, &puzzle.grid).unwrap();
        assert_eq!(results.found_count(), 0);

        let lower = puzzle.normalized_lowercase();
        let results = search(&lower.words, &lower.grid).unwrap();
        assert_eq!(results.location("horse"), Some(loc(1, 1, 5, 1)));
        assert_eq!(results.location("yak"), Some(loc(9, 9, 7, 7)));
    }
}

mod properties {
    use super::*;

    fn sample_grid() -> Grid {
        Grid::from_rows(&[
            "tacocatxqz",
            "abbaxyabcd",
            "noonmadama",
            "racecarxxb",
            "levelxzzzc",
            "aaaaabbbbb",
        ])
        .unwrap()
    }

    #[test]
    fn test_matches_reference_search() {
        let grid = sample_grid();
        let words = [
            "taco", "cat", "tacocat", "abba", "noon", "madam", "racecar", "level",
            "tan", "oar", "aaaaa", "ab", "ba", "bca", "dab", "cbx", "xyz", "nope", "a", "q",
        ];
        let results = search(words, &grid).unwrap();
        for word in words {
            assert_eq!(results.location(word), reference_locate(&grid, word), "mismatch for '{word}'");
        }
    }

    #[test]
    fn test_absent_words() {
        let grid = sample_grid();
        for word in ["tacos", "zebra", "racecars", "levels", "w"] {
            assert_eq!(reference_locate(&grid, word), None);
            assert_eq!(search([word], &grid).unwrap().location(word), None, "'{word}' should be absent");
        }
    }

    #[test]
    fn test_single_characters() {
        let grid = sample_grid();
        let present: HashSet<char> = grid.rows().flatten().copied().collect();
        for c in 'a'..='z' {
            let word = c.to_string();
            let found = Searcher::new(&grid).find(&word).unwrap();
            assert_eq!(found.is_some(), present.contains(&c), "presence of '{c}'");
            if let Some(found) = found {
                assert_eq!(found.start, found.end);
                assert_eq!(grid.at(found.start), Some(c));
            }
        }
    }

    #[test]
    fn test_two_letter_words_end_on_neighbor() {
        let grid = sample_grid();
        let letters: Vec<char> = ('a'..='z').collect();
        for &a in &letters {
            for &b in &letters {
                let word: String = [a, b].iter().collect();
                if let Some(found) = Searcher::new(&grid).find(&word).unwrap() {
                    let dx = found.end.x.abs_diff(found.start.x);
                    let dy = found.end.y.abs_diff(found.start.y);
                    assert!(dx <= 1 && dy <= 1 && (dx, dy) != (0, 0), "'{word}' at {found}");
                    assert!(found.direction().is_some());
                }
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let grid = sample_grid();
        let words = ["taco", "cat", "level", "nope", "b"];
        assert_eq!(search(words, &grid).unwrap(), search(words, &grid).unwrap());
    }

    #[test]
    fn test_off_edge_everywhere_is_absent() {
        // 'a' everywhere, but the grid is too small for five of them in a row
        let grid = Grid::from_rows(&["aaaa", "aaaa", "aaaa"]).unwrap();
        assert_eq!(search(["aaaaa"], &grid).unwrap().location("aaaaa"), None);
        assert_eq!(search(["aaaa"], &grid).unwrap().location("aaaa"), Some(loc(1, 1, 4, 1)));
    }

    #[test]
    fn test_large_grid_matches_reference() {
        // deterministic filler with a few planted words
        let mut rows: Vec<Vec<char>> = (0..40)
            .map(|y| (0..40).map(|x| char::from(b'a' + ((x * 7 + y * 13) % 26) as u8)).collect())
            .collect();
        for (i, c) in "wordsearch".chars().enumerate() {
            rows[5 + i][30 - i] = c;
        }
        let grid = Grid::new(rows).unwrap();

        let words = ["wordsearch", "hcraes", "abc", "hov", "ahov", "zzz", "nah", "q"];
        let results = search(words, &grid).unwrap();
        for word in words {
            assert_eq!(results.location(word), reference_locate(&grid, word), "mismatch for '{word}'");
        }
        assert_eq!(results.location("wordsearch"), Some(loc(31, 6, 22, 15)));
    }
}

mod errors {
    use super::*;

    #[test]
    fn test_ragged_grid_rejected() {
        let err = Grid::from_rows(&["abc", "ab"]).unwrap_err();
        assert_eq!(err, SearchError::RaggedGrid { row: 2, expected: 3, found: 2 });
        assert_eq!(err.code(), "W002");
    }

    #[test]
    fn test_empty_grid_rejected() {
        let rows: [&str; 0] = [];
        assert_eq!(Grid::from_rows(&rows).unwrap_err(), SearchError::EmptyGrid);
    }

    #[test]
    fn test_empty_word_rejected_before_searching() {
        let grid = Grid::from_rows(&["abc"]).unwrap();
        let err = search(["abc", ""], &grid).unwrap_err();
        assert_eq!(err, SearchError::EmptyWord);
        assert!(err.display_detailed().contains("W003"));
    }

    #[test]
    fn test_puzzle_errors() {
        assert!(matches!(Puzzle::parse_from_str("\n\n"), Err(PuzzleError::MissingGrid)));
        assert!(matches!(Puzzle::parse_from_str("abc\n"), Err(PuzzleError::MissingWords)));
        assert!(matches!(
            Puzzle::parse_from_str("abc\nabcd\n\nabc"),
            Err(PuzzleError::InvalidGrid(SearchError::RaggedGrid { .. }))
        ));

        let err = Puzzle::load_from_path("tests/fixtures/does_not_exist.txt", &[]).unwrap_err();
        assert!(matches!(err, PuzzleError::Io { .. }));
        assert!(err.display_detailed().contains("P001"));
    }
}
