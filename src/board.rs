//! Board state: an append-only move history with everything else derived.

use crate::common::{Mark, Move, Position, Status};
use crate::config::{ALL_POSITIONS, BOARD_SIZE, CELL_COUNT, WINNING_LINES};
use core::fmt;
use std::collections::HashSet;
use tokio::sync::watch;

/// Main game state. The ordered move history is authoritative; turn,
/// cell contents and status are recomputed from it on every read.
pub struct Board {
    moves: Vec<Move>,
    move_tx: watch::Sender<Option<Move>>,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        let (move_tx, _) = watch::channel(None);
        Board {
            moves: Vec::new(),
            move_tx,
        }
    }

    /// Observe the most recent move. The channel is stateful: a new
    /// subscriber immediately sees the current value, `None` after a clear.
    pub fn subscribe(&self) -> watch::Receiver<Option<Move>> {
        self.move_tx.subscribe()
    }

    /// Move history in the order the moves were accepted.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The mark expected to move next, or `None` until the first move
    /// fixes the alternation.
    pub fn turn(&self) -> Option<Mark> {
        self.moves.last().map(|m| m.mark().next())
    }

    /// Attempt a move. Returns `false` without touching the board when the
    /// game is over, the cell is occupied, or the mark is out of turn.
    pub fn submit(&mut self, mv: Move) -> bool {
        if self.status() != Status::Ongoing {
            log::debug!("rejected {:?}: game over", mv);
            return false;
        }
        if self.cell(mv.position()).is_some() {
            log::debug!("rejected {:?}: cell occupied", mv);
            return false;
        }
        if self.turn().is_some_and(|expected| mv.mark() != expected) {
            log::debug!("rejected {:?}: out of turn", mv);
            return false;
        }
        self.moves.push(mv);
        self.move_tx.send_replace(Some(mv));
        true
    }

    /// Discard all history, returning to the empty ongoing state.
    /// Observers receive `None` rather than a move.
    pub fn clear(&mut self) {
        self.moves.clear();
        self.move_tx.send_replace(None);
    }

    /// Contents of the cell at `position`, `None` when unfilled.
    pub fn cell(&self, position: Position) -> Option<Mark> {
        self.moves
            .iter()
            .find(|m| m.position() == position)
            .map(|m| m.mark())
    }

    /// One row of cell contents. Panics on an out-of-range index.
    pub fn row(&self, index: usize) -> [Option<Mark>; BOARD_SIZE] {
        assert!(index < BOARD_SIZE, "row index out of range");
        let mut row = [None; BOARD_SIZE];
        for m in self.moves.iter().filter(|m| m.position().row() == index) {
            row[m.position().column()] = Some(m.mark());
        }
        row
    }

    /// Full 3x3 cell contents, row-major.
    pub fn cells(&self) -> [[Option<Mark>; BOARD_SIZE]; BOARD_SIZE] {
        core::array::from_fn(|r| self.row(r))
    }

    /// All positions holding `mark`.
    pub fn positions(&self, mark: Mark) -> HashSet<Position> {
        self.moves
            .iter()
            .filter(|m| m.mark() == mark)
            .map(|m| m.position())
            .collect()
    }

    /// All unfilled positions.
    pub fn vacant(&self) -> HashSet<Position> {
        let taken: HashSet<Position> = self.moves.iter().map(|m| m.position()).collect();
        ALL_POSITIONS
            .iter()
            .copied()
            .filter(|p| !taken.contains(p))
            .collect()
    }

    /// Evaluate the game outcome from the full history. A superset check
    /// against each line handles a mark holding more cells than the line.
    pub fn status(&self) -> Status {
        for mark in [Mark::Nought, Mark::Cross] {
            let held = self.positions(mark);
            if let Some(line) = WINNING_LINES
                .iter()
                .find(|line| line.iter().all(|p| held.contains(p)))
            {
                return Status::Won { mark, line: *line };
            }
        }
        if self.moves.len() == CELL_COUNT {
            Status::Drawn
        } else {
            Status::Ongoing
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for r in 0..BOARD_SIZE {
            let row = self.row(r);
            let cells: Vec<String> = row
                .iter()
                .map(|c| c.map_or(".".to_string(), |m| m.to_string()))
                .collect();
            writeln!(f, "  {}", cells.join(" "))?;
        }
        write!(f, "}}")
    }
}
