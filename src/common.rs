//! Core domain types: marks, positions, moves and game status.

use core::fmt;

/// A player's symbol. An unfilled cell is `Option<Mark>::None`, not a
/// variant of this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Nought,
    Cross,
}

impl Mark {
    /// The mark that moves after this one.
    pub fn next(self) -> Mark {
        match self {
            Mark::Nought => Mark::Cross,
            Mark::Cross => Mark::Nought,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Nought => write!(f, "O"),
            Mark::Cross => write!(f, "X"),
        }
    }
}

/// A board cell, identified by zero-based row and column in `[0,2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: usize,
    column: usize,
}

impl Position {
    /// Create a position. Panics if either coordinate is out of range;
    /// out-of-range coordinates are a caller bug, not a game event.
    pub const fn new(row: usize, column: usize) -> Self {
        assert!(row <= 2, "row out of range");
        assert!(column <= 2, "column out of range");
        Position { row, column }
    }

    pub const fn row(self) -> usize {
        self.row
    }

    pub const fn column(self) -> usize {
        self.column
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// One placement: a position and the mark put there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    position: Position,
    mark: Mark,
}

impl Move {
    pub const fn new(position: Position, mark: Mark) -> Self {
        Move { position, mark }
    }

    pub const fn position(self) -> Position {
        self.position
    }

    pub const fn mark(self) -> Mark {
        self.mark
    }
}

/// Outcome of a game as derived from the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The board still accepts moves.
    Ongoing,
    /// `mark` covers `line`, one of the eight fixed winning lines in
    /// row-major order.
    Won { mark: Mark, line: [Position; 3] },
    /// All nine cells filled with no winner.
    Drawn,
}
