//! Game controller: turn policy, round resets and the delayed robot reply.

use crate::board::Board;
use crate::common::{Mark, Move, Position, Status};
use crate::config::{REPLY_DELAY_MAX_MS, REPLY_DELAY_MIN_MS};
use crate::player::Opponent;
use rand::rngs::SmallRng;
use rand::Rng;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Duration;

struct Inner {
    board: Board,
    opponent: Box<dyn Opponent + Send>,
    rng: SmallRng,
    /// Mark of whoever opens the current round.
    first: Mark,
    robot_first: bool,
    /// Bumped on every reset; a scheduled reply compares its snapshot
    /// against this under the lock before touching the board.
    epoch: u64,
    pending: Option<JoinHandle<()>>,
    move_tx: watch::Sender<Option<Move>>,
    status_tx: watch::Sender<Status>,
}

impl Inner {
    fn your_mark(&self) -> Mark {
        if self.robot_first {
            self.first.next()
        } else {
            self.first
        }
    }

    fn your_turn(&self) -> bool {
        match self.board.turn() {
            None => !self.robot_first,
            Some(turn) => turn == self.your_mark(),
        }
    }
}

/// Mediates between human input, the board and the opponent. Requires a
/// tokio runtime: the opponent's reply is a spawned, cancellable task.
pub struct GameController {
    inner: Arc<Mutex<Inner>>,
}

impl GameController {
    pub fn new(opponent: Box<dyn Opponent + Send>, rng: SmallRng) -> Self {
        let (move_tx, _) = watch::channel(None);
        let (status_tx, _) = watch::channel(Status::Ongoing);
        let inner = Inner {
            board: Board::new(),
            opponent,
            rng,
            first: Mark::Nought,
            robot_first: false,
            epoch: 0,
            pending: None,
            move_tx,
            status_tx,
        };
        GameController {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Observe the most recent move, `None` after a reset.
    pub fn subscribe_moves(&self) -> watch::Receiver<Option<Move>> {
        self.inner.lock().unwrap().move_tx.subscribe()
    }

    /// Observe the game status as of the latest move.
    pub fn subscribe_status(&self) -> watch::Receiver<Status> {
        self.inner.lock().unwrap().status_tx.subscribe()
    }

    /// The human's mark for the current round.
    pub fn your_mark(&self) -> Mark {
        self.inner.lock().unwrap().your_mark()
    }

    pub fn is_your_turn(&self) -> bool {
        self.inner.lock().unwrap().your_turn()
    }

    pub fn cells(&self) -> [[Option<Mark>; 3]; 3] {
        self.inner.lock().unwrap().board.cells()
    }

    pub fn status_now(&self) -> Status {
        self.inner.lock().unwrap().board.status()
    }

    pub fn move_history(&self) -> Vec<Move> {
        self.inner.lock().unwrap().board.moves().to_vec()
    }

    /// Play at `position` for the human. Ignored unless it is the human's
    /// turn; an illegal cell is rejected by the board without any effect.
    pub fn attempt_human_move(&self, position: Position) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if !inner.your_turn() {
            return false;
        }
        let mark = inner.board.turn().unwrap_or(inner.first);
        let mv = Move::new(position, mark);
        let accepted = inner.board.submit(mv);
        if accepted {
            react(&mut inner, &self.inner, Some(mv));
        }
        accepted
    }

    /// Start a fresh round: cancel any pending reply, clear the board and
    /// flip who opens. The base mark advances only when the robot is about
    /// to open again, so each side gets each mark in alternation.
    pub fn reset_round(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.epoch += 1;
        if let Some(task) = inner.pending.take() {
            task.abort();
            log::debug!("pending reply cancelled by reset");
        }
        inner.board.clear();
        if inner.robot_first {
            inner.first = inner.first.next();
        }
        inner.robot_first = !inner.robot_first;
        react(&mut inner, &self.inner, None);
    }
}

/// Reaction to a board change: republish the move and status, then let the
/// robot reply after a randomized delay when it is its turn.
fn react(inner: &mut Inner, shared: &Arc<Mutex<Inner>>, mv: Option<Move>) {
    inner.move_tx.send_replace(mv);
    let status = inner.board.status();
    inner.status_tx.send_replace(status);

    if status != Status::Ongoing || inner.your_turn() {
        return;
    }

    let Inner {
        ref mut opponent,
        ref mut rng,
        ref board,
        ..
    } = *inner;
    let Some(position) = opponent.choose_move(rng, board) else {
        return;
    };

    let delay = Duration::from_millis(
        inner
            .rng
            .random_range(REPLY_DELAY_MIN_MS..=REPLY_DELAY_MAX_MS),
    );
    let epoch = inner.epoch;
    let shared = Arc::clone(shared);
    log::debug!("robot replies at {} in {:?}", position, delay);
    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let mut inner = shared.lock().unwrap();
        if inner.epoch != epoch {
            // board was reset while the timer ran
            return;
        }
        let mark = inner.board.turn().unwrap_or(inner.first);
        let mv = Move::new(position, mark);
        if inner.board.submit(mv) {
            react(&mut inner, &shared, Some(mv));
        }
    });
    // single outstanding reply; a new schedule replaces the old one
    if let Some(prev) = inner.pending.replace(task) {
        prev.abort();
    }
}
