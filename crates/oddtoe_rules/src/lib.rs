//! Rules engine for tic-tac-toe on odd-sized boards.
//!
//! The engine owns one N×N board (N odd, at least 3), validates
//! placements, and detects wins and draws. It never enforces turn order;
//! that belongs to whoever drives it.
//!
//! # Example
//!
//! ```
//! use oddtoe_rules::{Mark, Outcome, RulesEngine};
//!
//! let mut engine = RulesEngine::with_size(5)?;
//! for col in 0..5 {
//!     engine.place(Mark::X, 0, col);
//! }
//! assert_eq!(engine.outcome(), Outcome::Won(Mark::X));
//!
//! // Finished games refuse further marks until reset.
//! assert!(!engine.place(Mark::O, 4, 4).is_valid());
//! engine.reset();
//! assert!(engine.place(Mark::O, "4", "4").is_valid());
//! # Ok::<(), oddtoe_rules::InvalidSizeError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod coordinate;
mod engine;
pub mod invariants;
mod placement;
pub mod rules;
mod size;
mod types;

pub use board::Board;
pub use coordinate::Coordinate;
pub use engine::RulesEngine;
pub use placement::{Placement, PlacementResult, Rejection};
pub use size::{BoardSize, InvalidSizeError, MAX_SIZE, MIN_SIZE, SizeViolation};
pub use types::{Cell, Mark, Outcome, UnknownMark};
