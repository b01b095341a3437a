//! Two-player terminal tic-tac-toe on odd-sized boards.
//!
//! The rules live in [`oddtoe_rules`]. This crate adds what a local game
//! needs around them:
//!
//! - **Session**: turn order, scores and round history
//! - **Input**: typed events a presenter sends to the session
//! - **Config**: TOML settings with command-line overrides
//! - **Tui**: a ratatui presenter
//!
//! # Example
//!
//! ```
//! use oddtoe::{InputEvent, SessionCoordinator};
//! use oddtoe_rules::{BoardSize, Mark};
//!
//! let mut session = SessionCoordinator::new(BoardSize::CLASSIC, "Ada", "Bo");
//! session.handle(InputEvent::cell(1, 1)).unwrap();
//! assert_eq!(session.current_mark(), Mark::O);
//!
//! session.handle(InputEvent::length(5)).unwrap();
//! assert_eq!(session.engine().size().get(), 5);
//! assert!(session.handle(InputEvent::length(6)).is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod input;
mod session;
pub mod tui;

pub use config::{AppConfig, ConfigError};
pub use input::InputEvent;
pub use session::{PlayerSlot, RoundRecord, Scoreboard, SessionCoordinator, SessionEvent};
