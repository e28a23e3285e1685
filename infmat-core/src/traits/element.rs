//! Cell value constraints
//!
//! This module defines the trait that constrains what types can be
//! stored in the matrix.

/// Trait for types that can be stored as matrix cells
///
/// Cells are compared against the matrix default to decide whether they
/// are significant, and the default is handed out by value in a few
/// places, so the only requirements are:
/// - Clone: the default can be copied into a fresh slot
/// - PartialEq: a cell can be compared with the default
pub trait CellValue: Clone + PartialEq {
    /// Whether this value must be stored, given the matrix default
    fn is_significant(&self, default: &Self) -> bool {
        self != default
    }
}

impl<T: Clone + PartialEq> CellValue for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_significant() {
        assert!(1i64.is_significant(&0));
        assert!(!(-1i64).is_significant(&-1));
        assert!(0.5f64.is_significant(&0.0));
        assert!(!"x".is_significant(&"x"));
    }
}
