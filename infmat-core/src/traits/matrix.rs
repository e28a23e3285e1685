//! Grid abstraction traits
//!
//! These describe the matrix surface independently of how it is stored.
//! Aggregate queries take `&mut self` because an implementation may have
//! deferred work to finish before it can answer.

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::element::CellValue;
use crate::Position;

/// Core trait for a sparse grid of unbounded extent
pub trait SparseGrid {
    /// The element type stored in this grid
    type Element: CellValue;

    /// Get the element at the specified position
    ///
    /// Unstored positions answer with the default element.
    fn get_element(&self, pos: Position) -> &Self::Element;

    /// The value every unstored position holds
    fn default_element(&self) -> &Self::Element;

    /// Get dimensions as (rows, cols)
    fn dimensions(&mut self) -> (usize, usize);

    /// Get the number of significant elements stored
    fn nnz(&mut self) -> usize;
}

/// Extension trait for row/column operations (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait GridOperations: SparseGrid {
    /// Get all stored elements in a row, as (col, value), in column order
    fn get_row(&self, row: i64) -> Vec<(i64, Self::Element)>;

    /// Get all stored elements in a column, as (row, value), in row order
    fn get_col(&self, col: i64) -> Vec<(i64, Self::Element)>;
}
