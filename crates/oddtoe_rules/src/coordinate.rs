//! Row and column inputs for placements.
//!
//! Click handlers hand over coordinates as text read from cell
//! attributes, while code passes integers. Text is only accepted in
//! plain decimal form, exactly as an integer would print.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A row or column as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    /// Integer input, possibly negative.
    Index(i64),
    /// Text input such as `"2"`.
    Text(String),
}

impl Coordinate {
    /// Coerces the input to an integer.
    ///
    /// Text must be the canonical decimal form of an integer. Padding,
    /// signs on non-negative values and leading zeros yield `None`.
    #[instrument]
    pub fn coerce(&self) -> Option<i64> {
        match self {
            Coordinate::Index(i) => Some(*i),
            Coordinate::Text(s) => s
                .parse::<i64>()
                .ok()
                .filter(|i| i.to_string() == *s),
        }
    }

    /// Resolves to an index in `[0, side)`.
    pub fn resolve(&self, side: usize) -> Option<usize> {
        self.coerce()
            .and_then(|i| usize::try_from(i).ok())
            .filter(|&i| i < side)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Coordinate::Index(i) => write!(f, "{}", i),
            Coordinate::Text(s) => write!(f, "{:?}", s),
        }
    }
}

macro_rules! coordinate_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Coordinate {
                fn from(i: $t) -> Self {
                    Coordinate::Index(i64::from(i))
                }
            }
        )*
    };
}

coordinate_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for Coordinate {
    fn from(i: usize) -> Self {
        // Anything past i64::MAX is out of bounds for every board anyway.
        Coordinate::Index(i64::try_from(i).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Coordinate {
    fn from(s: &str) -> Self {
        Coordinate::Text(s.to_string())
    }
}

impl From<String> for Coordinate {
    fn from(s: String) -> Self {
        Coordinate::Text(s)
    }
}

impl From<&String> for Coordinate {
    fn from(s: &String) -> Self {
        Coordinate::Text(s.clone())
    }
}
