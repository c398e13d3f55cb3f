use proptest::prelude::*;
use std::collections::HashSet;
use tictactoe::{Board, Mark, Move, Position, Status};

/// Drive a board through a sequence of attempted placements, always using
/// the mark the board expects (or `first` for the opening move). Illegal
/// attempts are simply rejected, as a front end would experience them.
fn apply(board: &mut Board, first: Mark, cells: &[(usize, usize)]) {
    for &(r, c) in cells {
        let mark = board.turn().unwrap_or(first);
        let _ = board.submit(Move::new(Position::new(r, c), mark));
    }
}

fn first_mark(cross: bool) -> Mark {
    if cross {
        Mark::Cross
    } else {
        Mark::Nought
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn occupied_set_matches_history(
        cross_first in any::<bool>(),
        cells in proptest::collection::vec((0usize..3, 0usize..3), 0..20),
    ) {
        let mut board = Board::new();
        apply(&mut board, first_mark(cross_first), &cells);

        let from_history: HashSet<Position> =
            board.moves().iter().map(|m| m.position()).collect();
        // no duplicate positions in history
        prop_assert_eq!(from_history.len(), board.moves().len());
        prop_assert!(board.moves().len() <= 9);

        let occupied: HashSet<Position> = board
            .positions(Mark::Nought)
            .union(&board.positions(Mark::Cross))
            .copied()
            .collect();
        prop_assert_eq!(occupied, from_history);
    }

    #[test]
    fn accepted_moves_alternate(
        cross_first in any::<bool>(),
        cells in proptest::collection::vec((0usize..3, 0usize..3), 0..20),
    ) {
        let mut board = Board::new();
        apply(&mut board, first_mark(cross_first), &cells);
        for pair in board.moves().windows(2) {
            prop_assert_eq!(pair[1].mark(), pair[0].mark().next());
        }
    }

    #[test]
    fn submit_is_all_or_nothing(
        cross_first in any::<bool>(),
        cells in proptest::collection::vec((0usize..3, 0usize..3), 0..20),
        probe_row in 0usize..3,
        probe_col in 0usize..3,
    ) {
        let mut board = Board::new();
        let first = first_mark(cross_first);
        apply(&mut board, first, &cells);

        let position = Position::new(probe_row, probe_col);
        let legal = board.status() == Status::Ongoing && board.cell(position).is_none();
        let before = board.moves().to_vec();
        let mark = board.turn().unwrap_or(first);
        let accepted = board.submit(Move::new(position, mark));

        prop_assert_eq!(accepted, legal);
        if accepted {
            prop_assert_eq!(board.moves().len(), before.len() + 1);
            prop_assert_eq!(&board.moves()[..before.len()], before.as_slice());
        } else {
            prop_assert_eq!(board.moves(), before.as_slice());
        }
    }

    #[test]
    fn winner_covers_its_line(
        cross_first in any::<bool>(),
        cells in proptest::collection::vec((0usize..3, 0usize..3), 0..20),
    ) {
        let mut board = Board::new();
        apply(&mut board, first_mark(cross_first), &cells);
        if let Status::Won { mark, line } = board.status() {
            let held = board.positions(mark);
            prop_assert!(line.iter().all(|p| held.contains(p)));
            // the loser never also holds a line
            let other = board.positions(mark.next());
            prop_assert!(!tictactoe::WINNING_LINES
                .iter()
                .any(|l| l.iter().all(|p| other.contains(p))));
        }
    }
}
