use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two board slots a player occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// Line-sum contribution of this seat's marks.
    pub fn sign(self) -> i32 {
        match self {
            Seat::First => 1,
            Seat::Second => -1,
        }
    }

    pub fn mark(self) -> Cell {
        match self {
            Seat::First => Cell::X,
            Seat::Second => Cell::O,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Blank,
    X,
    O,
}

impl Cell {
    pub fn value(self) -> i32 {
        match self {
            Cell::Blank => 0,
            Cell::X => 1,
            Cell::O => -1,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Blank => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// A `(row, column)` coordinate, zero-indexed.
///
/// Coordinates are signed so that whatever a strategy hands back can be
/// represented and adjudicated, including off-board values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl From<(i32, i32)> for Move {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl From<Move> for (i32, i32) {
    fn from(mv: Move) -> Self {
        (mv.row, mv.col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Player identity. Two players are the same player iff their names match,
/// so names must be unique within one tournament.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PlayerId {
    fn from(name: String) -> Self {
        Self(name)
    }
}
