//! Board size validation.
//!
//! Boards are square with an odd side of at least three. Sizes arrive
//! as integers from code and as text from settings and sliders, so both
//! paths converge on [`BoardSize`].

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Smallest playable side length.
pub const MIN_SIZE: usize = 3;

/// Largest playable side length.
pub const MAX_SIZE: usize = 99;

/// Why a requested size was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum SizeViolation {
    /// Input is not an integer (NaN, empty, garbage text).
    #[strum(to_string = "not a number")]
    NotANumber,
    /// Input is two or less.
    #[strum(to_string = "must be greater than 2")]
    TooSmall,
    /// Input is even.
    #[strum(to_string = "must be odd")]
    Even,
    /// Input is above [`MAX_SIZE`].
    #[strum(to_string = "must be at most 99")]
    TooLarge,
}

/// A board size that failed validation.
#[derive(Debug, Clone, Display, Error)]
#[display(
    "Invalid board size {:?}: {} (expected an odd number from 3 to 99) at {}:{}",
    requested,
    violation,
    file,
    line
)]
pub struct InvalidSizeError {
    /// The size as it was supplied.
    pub requested: String,
    /// Which rule it broke.
    pub violation: SizeViolation,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl InvalidSizeError {
    /// Creates a new size error with caller location tracking.
    #[track_caller]
    #[instrument(skip(requested))]
    pub fn new(requested: impl Into<String>, violation: SizeViolation) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            requested: requested.into(),
            violation,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Side length of a board: odd, from [`MIN_SIZE`] to [`MAX_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    /// The classic 3×3 board.
    pub const CLASSIC: BoardSize = BoardSize(MIN_SIZE);

    /// Validates an integer side length.
    #[track_caller]
    #[instrument]
    pub fn new(size: i64) -> Result<Self, InvalidSizeError> {
        if size <= 2 {
            return Err(InvalidSizeError::new(size.to_string(), SizeViolation::TooSmall));
        }
        if size % 2 != 1 {
            return Err(InvalidSizeError::new(size.to_string(), SizeViolation::Even));
        }
        match usize::try_from(size) {
            Ok(side) if side <= MAX_SIZE => Ok(Self(side)),
            _ => Err(InvalidSizeError::new(size.to_string(), SizeViolation::TooLarge)),
        }
    }

    /// Side length.
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of cells on a board of this size.
    pub fn cell_count(self) -> usize {
        self.0 * self.0
    }

    /// Next size up (side + 2), never above [`MAX_SIZE`].
    pub fn grow(self) -> Self {
        Self((self.0 + 2).min(MAX_SIZE))
    }

    /// Next size down (side - 2), never below [`MIN_SIZE`].
    pub fn shrink(self) -> Self {
        Self(self.0.saturating_sub(2).max(MIN_SIZE))
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.0, self.0)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> usize {
        size.0
    }
}

impl TryFrom<i64> for BoardSize {
    type Error = InvalidSizeError;

    #[track_caller]
    fn try_from(size: i64) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl TryFrom<i32> for BoardSize {
    type Error = InvalidSizeError;

    #[track_caller]
    fn try_from(size: i32) -> Result<Self, Self::Error> {
        Self::new(i64::from(size))
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = InvalidSizeError;

    #[track_caller]
    fn try_from(size: usize) -> Result<Self, Self::Error> {
        match i64::try_from(size) {
            Ok(size) => Self::new(size),
            Err(_) => Err(InvalidSizeError::new(
                size.to_string(),
                SizeViolation::TooLarge,
            )),
        }
    }
}

impl TryFrom<u32> for BoardSize {
    type Error = InvalidSizeError;

    #[track_caller]
    fn try_from(size: u32) -> Result<Self, Self::Error> {
        Self::new(i64::from(size))
    }
}

impl TryFrom<&str> for BoardSize {
    type Error = InvalidSizeError;

    #[track_caller]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().parse::<i64>() {
            Ok(size) => Self::new(size),
            Err(_) => Err(InvalidSizeError::new(s, SizeViolation::NotANumber)),
        }
    }
}

impl TryFrom<Option<i64>> for BoardSize {
    type Error = InvalidSizeError;

    /// `None` stands for a missing value and is refused like NaN.
    #[track_caller]
    fn try_from(size: Option<i64>) -> Result<Self, Self::Error> {
        match size {
            Some(size) => Self::new(size),
            None => Err(InvalidSizeError::new("none", SizeViolation::NotANumber)),
        }
    }
}

impl FromStr for BoardSize {
    type Err = InvalidSizeError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
