//! Presenter state: the session, the cursor and the status line.

use super::cursor::Cursor;
use crate::config::AppConfig;
use crate::input::InputEvent;
use crate::session::{SessionCoordinator, SessionEvent};
use crossterm::event::KeyCode;
use oddtoe_rules::{BoardSize, Outcome};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::{debug, instrument, warn};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Navigate(KeyCode),
    /// Mark the cell under the cursor.
    Place,
    /// Next larger board.
    Grow,
    /// Next smaller board.
    Shrink,
    /// Start another round.
    NextRound,
    /// Zero the scoreboard.
    ClearScores,
    /// Leave the game.
    Quit,
}

impl Action {
    /// Maps a key to an action, if it has one.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Char('h' | 'j' | 'k' | 'l') => Some(Action::Navigate(key)),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Place),
            KeyCode::Char('+' | '=') => Some(Action::Grow),
            KeyCode::Char('-' | '_') => Some(Action::Shrink),
            KeyCode::Char('n') => Some(Action::NextRound),
            KeyCode::Char('c') => Some(Action::ClearScores),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: SessionCoordinator,
    cursor: Cursor,
    max_size: BoardSize,
    status: String,
    pending: Rc<RefCell<VecDeque<SessionEvent>>>,
}

impl App {
    /// Creates the presenter and subscribes it to session events.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        let mut session =
            SessionCoordinator::new(*config.size(), config.player_x(), config.player_o());

        let pending = Rc::new(RefCell::new(VecDeque::new()));
        let sink = Rc::clone(&pending);
        session.subscribe(move |event| sink.borrow_mut().push_back(event.clone()));

        let mut app = Self {
            cursor: Cursor::centre(config.size().get()),
            max_size: *config.max_size(),
            status: String::new(),
            session,
            pending,
        };
        app.status = app.turn_prompt();
        app
    }

    /// The session being presented.
    pub fn session(&self) -> &SessionCoordinator {
        &self.session
    }

    /// Current cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Handles a key press. Returns `false` when the user quits.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        let Some(action) = Action::from_key(key) else {
            return true;
        };
        debug!(?action, "Key action");

        let size = self.session.engine().size();
        let input = match action {
            Action::Quit => return false,
            Action::Navigate(key) => {
                self.cursor = self.cursor.step(key, size.get());
                return true;
            }
            Action::Place => InputEvent::cell(self.cursor.row, self.cursor.col),
            Action::Grow | Action::Shrink => {
                let Some(input) = self.size_request(action) else {
                    debug!(size = size.get(), "Size already at limit");
                    return true;
                };
                input
            }
            Action::NextRound => InputEvent::NextRound,
            Action::ClearScores => InputEvent::ClearScores,
        };

        if let Err(e) = self.session.handle(input) {
            warn!(error = %e, "Input refused");
            self.status = format!("Cannot resize: {}", e.violation);
        }
        self.drain_events();
        true
    }

    /// The resize a grow or shrink asks for, or `None` when the size is
    /// already at that end of `[3, max_size]`.
    fn size_request(&self, action: Action) -> Option<InputEvent> {
        let current = self.session.engine().size();
        let wanted = match action {
            Action::Grow => current.grow().min(self.max_size),
            _ => current.shrink(),
        };
        (wanted != current).then(|| InputEvent::length(wanted.get()))
    }

    /// Applies queued session events to the status line and cursor.
    fn drain_events(&mut self) {
        loop {
            let Some(event) = self.pending.borrow_mut().pop_front() else {
                break;
            };
            self.apply(event);
        }
    }

    fn apply(&mut self, event: SessionEvent) {
        self.status = match event {
            SessionEvent::MovePlaced { .. } => self.turn_prompt(),
            SessionEvent::MoveRejected(reason) => format!("{}. Try again.", reason),
            SessionEvent::RoundFinished(record) => match record.outcome() {
                Outcome::Won(mark) => format!(
                    "{} ({}) wins! Press 'n' for the next round.",
                    self.session.player(*mark).name(),
                    mark
                ),
                _ => "Draw! Press 'n' for the next round.".to_string(),
            },
            SessionEvent::BoardReset => self.turn_prompt(),
            SessionEvent::BoardResized(size) => {
                self.cursor = self.cursor.clamp(size.get());
                format!("Board is now {}. {}", size, self.turn_prompt())
            }
            SessionEvent::ScoresCleared => format!("Scores cleared. {}", self.turn_prompt()),
        };
    }

    fn turn_prompt(&self) -> String {
        let player = self.session.current_player();
        format!("{} ({}) to move", player.name(), player.mark())
    }
}
