use crate::common::Position;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = 9;

/// Bounds of the randomized robot reply delay, in milliseconds.
pub const REPLY_DELAY_MIN_MS: u64 = 800;
pub const REPLY_DELAY_MAX_MS: u64 = 1300;

const fn p(row: usize, column: usize) -> Position {
    Position::new(row, column)
}

/// Every cell of the board, row-major.
pub const ALL_POSITIONS: [Position; CELL_COUNT] = [
    p(0, 0),
    p(0, 1),
    p(0, 2),
    p(1, 0),
    p(1, 1),
    p(1, 2),
    p(2, 0),
    p(2, 1),
    p(2, 2),
];

/// The eight winning lines: three rows, three columns, two diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    [p(0, 0), p(0, 1), p(0, 2)],
    [p(1, 0), p(1, 1), p(1, 2)],
    [p(2, 0), p(2, 1), p(2, 2)],
    [p(0, 0), p(1, 0), p(2, 0)],
    [p(0, 1), p(1, 1), p(2, 1)],
    [p(0, 2), p(1, 2), p(2, 2)],
    [p(0, 0), p(1, 1), p(2, 2)],
    [p(0, 2), p(1, 1), p(2, 0)],
];
