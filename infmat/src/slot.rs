//! Read and write proxies
//!
//! Writing through the matrix materializes a default-valued cell before the
//! caller has supplied anything, and marks it pending. Whether the cell
//! survives is decided at the next compaction.
//!
//! Two kinds of write handle exist:
//!
//! * [`Slot`] and [`RowMut`] borrow the matrix, so they cannot outlive a
//!   mutating call.
//! * [`CellHandle`] is a plain token that outlives borrows. It is checked
//!   against the matrix generation, which moves on every erasure; a stale
//!   handle reads as the default and refuses writes.

use crate::Matrix;
use core::ops::{Deref, DerefMut, Index, IndexMut};
use infmat_core::{CellValue, Position};

/// Borrowed handle to a live storage slot
pub struct Slot<'a, T> {
    value: &'a mut T,
}

impl<'a, T> Slot<'a, T> {
    pub(crate) fn new(value: &'a mut T) -> Self {
        Self { value }
    }

    /// Current value of the slot
    pub fn get(&self) -> &T {
        self.value
    }

    /// Replace the slot's value, returning the previous one
    pub fn set(&mut self, value: T) -> T {
        core::mem::replace(self.value, value)
    }

    /// Consume the slot and keep the mutable reference
    pub fn into_mut(self) -> &'a mut T {
        self.value
    }
}

impl<T> Deref for Slot<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.value
    }
}

impl<T> DerefMut for Slot<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.value
    }
}

/// Read-only view of one row, indexed by column
pub struct Row<'a, T> {
    matrix: &'a Matrix<T>,
    row: i64,
}

impl<'a, T: CellValue> Row<'a, T> {
    pub(crate) fn new(matrix: &'a Matrix<T>, row: i64) -> Self {
        Self { matrix, row }
    }

    /// Value at `col`, or the default
    pub fn at(&self, col: i64) -> &'a T {
        self.matrix.at(self.row, col)
    }

    /// Stored cells of this row as (col, value)
    pub fn cells(&self) -> impl Iterator<Item = (i64, &'a T)> + 'a {
        self.matrix.row_cells(self.row)
    }
}

impl<T: CellValue> Index<i64> for Row<'_, T> {
    type Output = T;

    fn index(&self, col: i64) -> &T {
        self.matrix.at(self.row, col)
    }
}

/// Writable view of one row, so that `m.row_mut(r)[c] = v` works.
///
/// Reads through `Index` never materialize; writes through `IndexMut` do.
pub struct RowMut<'a, T> {
    matrix: &'a mut Matrix<T>,
    row: i64,
}

impl<'a, T: CellValue> RowMut<'a, T> {
    pub(crate) fn new(matrix: &'a mut Matrix<T>, row: i64) -> Self {
        Self { matrix, row }
    }

    /// Write-proxy access to `col` within this row
    pub fn slot(&mut self, col: i64) -> Slot<'_, T> {
        self.matrix.slot(self.row, col)
    }
}

impl<T: CellValue> Index<i64> for RowMut<'_, T> {
    type Output = T;

    fn index(&self, col: i64) -> &T {
        self.matrix.at(self.row, col)
    }
}

impl<T: CellValue> IndexMut<i64> for RowMut<'_, T> {
    fn index_mut(&mut self, col: i64) -> &mut T {
        self.matrix.materialize(Position::new(self.row, col))
    }
}

/// Generation-checked token for a materialized cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellHandle {
    pos: Position,
    generation: u64,
}

impl CellHandle {
    pub(crate) fn new(pos: Position, generation: u64) -> Self {
        Self { pos, generation }
    }

    /// Position the handle was issued for
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Matrix generation at the time of issue
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
