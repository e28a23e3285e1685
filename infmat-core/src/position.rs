//! Cell positions
//!
//! A [`Position`] keys the matrix storage. Its ordering is row-major, which
//! is also the iteration order of the matrix.

use crate::{InfmatError, Result};

/// Position of a cell in the matrix
///
/// Field order matters: the derived `Ord` compares `row` first, then `col`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i64,
    pub col: i64,
}

impl Position {
    /// The top-left cell
    pub const ORIGIN: Position = Position { row: 0, col: 0 };

    /// Create a new position; negative coordinates are accepted
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Create a position, rejecting negative coordinates
    pub const fn checked(row: i64, col: i64) -> Result<Self> {
        let pos = Self::new(row, col);
        if pos.is_valid() {
            Ok(pos)
        } else {
            Err(InfmatError::NegativeCoordinate)
        }
    }

    /// Whether both coordinates are non-negative.
    ///
    /// This is a convention only; the matrix never consults it.
    pub const fn is_valid(&self) -> bool {
        self.row >= 0 && self.col >= 0
    }
}

impl From<(i64, i64)> for Position {
    fn from((row, col): (i64, i64)) -> Self {
        Self { row, col }
    }
}

impl From<Position> for (i64, i64) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}
