use crate::board::Board;
use crate::common::Position;
use rand::rngs::SmallRng;
use rand::Rng;

/// Interface implemented by opponent move selectors.
pub trait Opponent {
    /// Choose the next target cell given the current board, or `None` to
    /// decline. Called only while the game is ongoing.
    fn choose_move(&mut self, rng: &mut SmallRng, board: &Board) -> Option<Position>;
}

/// Opponent that picks a uniformly random vacant cell.
pub struct RandomOpponent;

impl RandomOpponent {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for RandomOpponent {
    fn choose_move(&mut self, rng: &mut SmallRng, board: &Board) -> Option<Position> {
        let mut vacant: Vec<Position> = board.vacant().into_iter().collect();
        if vacant.is_empty() {
            return None;
        }
        // sorted so a fixed seed replays the same game
        vacant.sort();
        Some(vacant[rng.random_range(0..vacant.len())])
    }
}
