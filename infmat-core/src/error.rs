//! Error types for infmat operations

/// Errors that can occur around the matrix.
///
/// The container itself accepts every coordinate, so these only come from
/// the checked constructors, the text parsers and stale cell handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfmatError {
    /// A coordinate was negative where a valid position was required
    NegativeCoordinate,
    /// A cell line did not have the expected number of tab separators
    InvalidTabCount { expected: usize, found: usize },
    /// Malformed `row:col` text
    InvalidPosition,
    /// Malformed `start:end` text
    InvalidRange,
    /// A numeric field could not be parsed
    InvalidNumber,
    /// A cell handle was issued before a cell was erased
    StaleHandle,
}

impl core::fmt::Display for InfmatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InfmatError::NegativeCoordinate => write!(f, "Negative coordinate"),
            InfmatError::InvalidTabCount { expected, found } => {
                write!(f, "invalid \\t count, expected {expected}, line has {found}")
            }
            InfmatError::InvalidPosition => write!(f, "Invalid position"),
            InfmatError::InvalidRange => write!(f, "Invalid range"),
            InfmatError::InvalidNumber => write!(f, "Invalid number"),
            InfmatError::StaleHandle => write!(f, "Stale cell handle"),
        }
    }
}

impl core::error::Error for InfmatError {}

/// Result type for infmat operations
pub type Result<T> = core::result::Result<T, InfmatError>;
