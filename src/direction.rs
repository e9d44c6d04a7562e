//! The eight straight-line directions a word can run in.
//!
//! Each direction is a unit step `(dy, dx)` on the grid: rows grow downward,
//! columns grow to the right.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    East,
    West,
    North,
    South,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::West,
        Direction::North,
        Direction::South,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// The unit step as `(dy, dx)`.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
        }
    }

    #[must_use]
    pub const fn dx(self) -> isize {
        self.delta().1
    }

    #[must_use]
    pub const fn dy(self) -> isize {
        self.delta().0
    }

    /// Reverse lookup from a column/row displacement.
    ///
    /// Returns `None` for `(0, 0)` and for anything that is not a unit step.
    #[must_use]
    pub const fn from_displacement(dx: isize, dy: isize) -> Option<Direction> {
        match (dx, dy) {
            (1, 0) => Some(Direction::East),
            (-1, 0) => Some(Direction::West),
            (0, -1) => Some(Direction::North),
            (0, 1) => Some(Direction::South),
            (1, -1) => Some(Direction::NorthEast),
            (-1, -1) => Some(Direction::NorthWest),
            (1, 1) => Some(Direction::SouthEast),
            (-1, 1) => Some(Direction::SouthWest),
            _ => None,
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::NorthEast => Direction::SouthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
        }
    }

    /// Compass abbreviation (`N`, `NE`, ...).
    #[must_use]
    pub const fn abbrev(self) -> &'static str {
        match self {
            Direction::East => "E",
            Direction::West => "W",
            Direction::North => "N",
            Direction::South => "S",
            Direction::NorthEast => "NE",
            Direction::NorthWest => "NW",
            Direction::SouthEast => "SE",
            Direction::SouthWest => "SW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_deltas_are_distinct_unit_steps() {
        let deltas: HashSet<(isize, isize)> = Direction::ALL.iter().map(|d| d.delta()).collect();
        assert_eq!(deltas.len(), 8);
        for (dy, dx) in deltas {
            assert!((-1..=1).contains(&dy) && (-1..=1).contains(&dx));
            assert!((dy, dx) != (0, 0));
        }
    }

    #[test]
    fn test_from_displacement_inverts_delta() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_displacement(d.dx(), d.dy()), Some(d));
        }
    }

    #[test]
    fn test_from_displacement_rejects_non_steps() {
        assert_eq!(Direction::from_displacement(0, 0), None);
        assert_eq!(Direction::from_displacement(2, 0), None);
        assert_eq!(Direction::from_displacement(-1, 2), None);
        assert_eq!(Direction::from_displacement(3, 3), None);
    }

    #[test]
    fn test_screen_orientation() {
        // rows grow downward
        assert_eq!(Direction::North.dy(), -1);
        assert_eq!(Direction::SouthEast.delta(), (1, 1));
        assert_eq!(Direction::from_displacement(1, 0), Some(Direction::East));
    }

    #[test]
    fn test_opposite() {
        for d in Direction::ALL {
            let o = d.opposite();
            assert_eq!((o.dx(), o.dy()), (-d.dx(), -d.dy()));
            assert_eq!(o.opposite(), d);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Direction::NorthWest.to_string(), "NW");
        assert_eq!(Direction::South.to_string(), "S");
    }
}
