//! Local two-player session: turns, scores and round history.

use crate::input::InputEvent;
use derive_getters::Getters;
use derive_new::new;
use oddtoe_rules::{
    BoardSize, Coordinate, InvalidSizeError, Mark, Outcome, PlacementResult, Rejection,
    RulesEngine,
};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// A seat at the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
pub struct PlayerSlot {
    /// Display name.
    name: String,
    /// Mark this player places.
    mark: Mark,
}

/// Running totals across rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Getters)]
pub struct Scoreboard {
    /// Rounds won by X.
    x_wins: u32,
    /// Rounds won by O.
    o_wins: u32,
    /// Drawn rounds.
    draws: u32,
}

impl Scoreboard {
    /// Wins for a given mark.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Total finished rounds.
    pub fn rounds(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Mark::X) => self.x_wins += 1,
            Outcome::Won(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }
}

/// A finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct RoundRecord {
    /// 1-based round number within the session.
    round: u32,
    /// Board size the round was played on.
    size: BoardSize,
    /// How it ended.
    outcome: Outcome,
    /// Name of the winner, if any.
    winner_name: Option<String>,
    /// Marks placed in the round.
    moves: usize,
}

impl std::fmt::Display for RoundRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round {} ({}): ", self.round, self.size)?;
        match (&self.outcome, &self.winner_name) {
            (Outcome::Won(mark), Some(name)) => {
                write!(f, "{} ({}) won in {} moves", name, mark, self.moves)
            }
            _ => write!(f, "{} after {} moves", self.outcome, self.moves),
        }
    }
}

/// Notifications emitted by the session, in the order they happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A mark was accepted.
    MovePlaced {
        /// Row of the new mark.
        row: usize,
        /// Column of the new mark.
        col: usize,
        /// The mark placed.
        mark: Mark,
    },
    /// A pick was refused; the board is unchanged.
    MoveRejected(Rejection),
    /// The round ended with a win or a draw.
    RoundFinished(RoundRecord),
    /// A fresh board of the same size is ready.
    BoardReset,
    /// A fresh board of a new size is ready.
    BoardResized(BoardSize),
    /// Scores and history were cleared.
    ScoresCleared,
}

type Subscriber = Box<dyn FnMut(&SessionEvent)>;

/// Drives one [`RulesEngine`] for two local players.
///
/// X always opens a round; afterwards the turn goes to the opposite of
/// the last accepted mark.
pub struct SessionCoordinator {
    engine: RulesEngine,
    players: [PlayerSlot; 2],
    last_mark: Option<Mark>,
    moves: usize,
    scores: Scoreboard,
    history: Vec<RoundRecord>,
    subscribers: Vec<Subscriber>,
}

impl SessionCoordinator {
    /// Creates a session on a fresh board.
    #[instrument(skip(player_x, player_o), fields(size = size.get()))]
    pub fn new(size: BoardSize, player_x: impl Into<String>, player_o: impl Into<String>) -> Self {
        info!("Creating session");
        Self {
            engine: RulesEngine::from_size(size),
            players: [
                PlayerSlot::new(player_x.into(), Mark::X),
                PlayerSlot::new(player_o.into(), Mark::O),
            ],
            last_mark: None,
            moves: 0,
            scores: Scoreboard::default(),
            history: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    /// Registers a callback for every [`SessionEvent`].
    ///
    /// Callbacks run synchronously, in registration order.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&SessionEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
        debug!(count = self.subscribers.len(), "Subscriber added");
    }

    /// Routes an input event to the matching operation.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSizeError`] when a size change is refused.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: InputEvent) -> Result<(), InvalidSizeError> {
        match event {
            InputEvent::LengthChanged(size) => self.resize(size.as_str()).map(|_| ()),
            InputEvent::CellSelected { row, col } => {
                self.select_cell(row, col);
                Ok(())
            }
            InputEvent::NextRound => {
                self.next_round();
                Ok(())
            }
            InputEvent::ClearScores => {
                self.clear_scores();
                Ok(())
            }
        }
    }

    /// Places the current player's mark at `(row, col)`.
    #[instrument(skip(self, row, col), fields(mark = %self.current_mark()))]
    pub fn select_cell(
        &mut self,
        row: impl Into<Coordinate>,
        col: impl Into<Coordinate>,
    ) -> PlacementResult {
        let mark = self.current_mark();
        let result = self.engine.place(mark, row, col);

        match &result {
            PlacementResult::Placed(placement) => {
                self.last_mark = Some(placement.mark);
                self.moves += 1;
                self.emit(SessionEvent::MovePlaced {
                    row: placement.row,
                    col: placement.col,
                    mark: placement.mark,
                });
                if placement.is_over() {
                    self.finish_round(placement.outcome);
                }
            }
            PlacementResult::Rejected(reason) => {
                debug!(%reason, "Move refused");
                self.emit(SessionEvent::MoveRejected(reason.clone()));
            }
        }

        result
    }

    /// Clears the board for another round at the same size.
    #[instrument(skip(self))]
    pub fn next_round(&mut self) {
        self.engine.reset();
        self.start_round();
        self.emit(SessionEvent::BoardReset);
    }

    /// Switches to a new board size. Scores and history are kept.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSizeError`] and leaves the session untouched when
    /// the size is not an odd number from 3 to 99.
    #[instrument(skip(self))]
    pub fn resize<S>(&mut self, size: S) -> Result<BoardSize, InvalidSizeError>
    where
        S: TryInto<BoardSize, Error = InvalidSizeError> + std::fmt::Debug,
    {
        let size = match self.engine.create_board(size) {
            Ok(board) => board.size(),
            Err(e) => {
                warn!(error = %e, "Resize refused");
                return Err(e);
            }
        };
        self.start_round();
        self.emit(SessionEvent::BoardResized(size));
        Ok(size)
    }

    /// Zeroes the scoreboard and drops the history.
    #[instrument(skip(self))]
    pub fn clear_scores(&mut self) {
        self.scores = Scoreboard::default();
        self.history.clear();
        self.emit(SessionEvent::ScoresCleared);
    }

    /// Mark whose turn it is.
    pub fn current_mark(&self) -> Mark {
        self.last_mark.map_or(Mark::X, Mark::opponent)
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> &PlayerSlot {
        self.player(self.current_mark())
    }

    /// The player holding `mark`.
    pub fn player(&self, mark: Mark) -> &PlayerSlot {
        match mark {
            Mark::X => &self.players[0],
            Mark::O => &self.players[1],
        }
    }

    /// The underlying rules engine.
    pub fn engine(&self) -> &RulesEngine {
        &self.engine
    }

    /// Running totals.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Finished rounds, oldest first.
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Marks placed in the current round.
    pub fn moves(&self) -> usize {
        self.moves
    }

    fn start_round(&mut self) {
        self.last_mark = None;
        self.moves = 0;
    }

    fn finish_round(&mut self, outcome: Outcome) {
        self.scores.record(outcome);
        let record = RoundRecord {
            round: self.scores.rounds(),
            size: self.engine.size(),
            outcome,
            winner_name: outcome.winner().map(|mark| self.player(mark).name().clone()),
            moves: self.moves,
        };
        info!(
            round = record.round,
            outcome = %outcome,
            moves = record.moves,
            "Round finished"
        );
        self.history.push(record.clone());
        self.emit(SessionEvent::RoundFinished(record));
    }

    fn emit(&mut self, event: SessionEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(&event);
        }
    }
}

impl std::fmt::Debug for SessionCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCoordinator")
            .field("engine", &self.engine)
            .field("players", &self.players)
            .field("last_mark", &self.last_mark)
            .field("moves", &self.moves)
            .field("scores", &self.scores)
            .field("history", &self.history)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Default for SessionCoordinator {
    fn default() -> Self {
        Self::new(BoardSize::default(), "Player X", "Player O")
    }
}
