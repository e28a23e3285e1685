//! The sparse infinite matrix
//!
//! Cells equal to the default value are not stored. Write-style access has
//! to hand out a live slot before the caller supplies a value, so it stores
//! a default-valued cell and queues its position in `pending`; the next
//! aggregate query drops whatever is still default.
//!
//! Extents are cached per axis. Growth folds in with `max`; anything that
//! may shrink an axis marks it unknown and the next query rescans storage.

use crate::config::MatrixConfig;
use crate::iter::{Iter, IterMut};
use crate::slot::{CellHandle, Row, RowMut, Slot};
use hashbrown::HashSet;
use infmat_core::{
    scan_extents, CellValue, DimensionCache, GridOperations, InfmatError, Position, Result,
    SparseGrid,
};
use log::{debug, trace};
use std::collections::BTreeMap;
use std::ops::{Index, IndexMut};

/// Sparse, logically infinite two-dimensional matrix
#[derive(Clone)]
pub struct Matrix<T> {
    cells: BTreeMap<Position, T>,
    default: T,
    pending: HashSet<Position>,
    dims: DimensionCache,
    /// Bumped on every erasure; see [`CellHandle`]
    generation: u64,
    config: MatrixConfig,
}

impl<T: CellValue + Default> Matrix<T> {
    /// Create an empty matrix whose default is `T::default()`
    pub fn new() -> Self {
        Self::with_default(T::default())
    }
}

impl<T: CellValue + Default> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CellValue> Matrix<T> {
    /// Create an empty matrix with the given default value
    pub fn with_default(default: T) -> Self {
        Self::with_config(default, MatrixConfig::default())
    }

    /// Create an empty matrix with the given default value and config
    pub fn with_config(default: T, config: MatrixConfig) -> Self {
        Self {
            cells: BTreeMap::new(),
            default,
            pending: HashSet::with_capacity(config.pending_capacity),
            dims: DimensionCache::new(),
            generation: 0,
            config,
        }
    }

    /// The value every unstored position holds
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// The config this matrix was built with
    pub fn config(&self) -> &MatrixConfig {
        &self.config
    }

    /// Insert a value, replacing any previous one.
    ///
    /// Inserting the default erases the cell. Returns the previously stored
    /// value, if any.
    pub fn insert(&mut self, row: i64, col: i64, value: T) -> Option<T> {
        self.insert_at(Position::new(row, col), value)
    }

    /// Position-keyed form of [`insert`](Self::insert)
    pub fn insert_at(&mut self, pos: Position, value: T) -> Option<T> {
        if value.is_significant(&self.default) {
            self.dims.grow(pos);
            return self.cells.insert(pos, value);
        }

        let removed = self.cells.remove(&pos)?;
        self.bump_generation();
        // The removed cell may have been the only one on either boundary.
        self.dims.invalidate();
        trace!("erased {pos}, extents invalidated");
        Some(removed)
    }

    /// Erase the cell at a position, returning its value
    pub fn remove(&mut self, row: i64, col: i64) -> Option<T> {
        let default = self.default.clone();
        self.insert(row, col, default)
    }

    /// Value at a position, or the default. Never materializes.
    pub fn at(&self, row: i64, col: i64) -> &T {
        self.at_pos(Position::new(row, col))
    }

    /// Position-keyed form of [`at`](Self::at)
    pub fn at_pos(&self, pos: Position) -> &T {
        self.cells.get(&pos).unwrap_or(&self.default)
    }

    /// Stored value at a position, including unresolved pending cells
    pub fn get(&self, row: i64, col: i64) -> Option<&T> {
        self.cells.get(&Position::new(row, col))
    }

    /// Whether a cell is stored at a position
    pub fn contains(&self, row: i64, col: i64) -> bool {
        self.cells.contains_key(&Position::new(row, col))
    }

    /// Read-only view of a row
    pub fn row(&self, row: i64) -> Row<'_, T> {
        Row::new(self, row)
    }

    /// Writable view of a row; `m.row_mut(r)[c] = v`
    pub fn row_mut(&mut self, row: i64) -> RowMut<'_, T> {
        RowMut::new(self, row)
    }

    /// Write-proxy access: materialize the cell and return its live slot
    pub fn slot(&mut self, row: i64, col: i64) -> Slot<'_, T> {
        Slot::new(self.materialize(Position::new(row, col)))
    }

    /// Write-proxy access that returns a token instead of a borrow
    pub fn handle(&mut self, row: i64, col: i64) -> CellHandle {
        let pos = Position::new(row, col);
        self.materialize(pos);
        CellHandle::new(pos, self.generation)
    }

    /// Current value behind a handle, or the default if the handle is stale
    pub fn value(&self, handle: &CellHandle) -> &T {
        if handle.generation() == self.generation {
            self.at_pos(handle.position())
        } else {
            &self.default
        }
    }

    /// Write through a handle, returning the previous value
    pub fn write(&mut self, handle: &CellHandle, value: T) -> Result<T> {
        if handle.generation() != self.generation {
            return Err(InfmatError::StaleHandle);
        }
        let pos = handle.position();
        let slot = self.cells.get_mut(&pos).ok_or(InfmatError::StaleHandle)?;
        let previous = std::mem::replace(slot, value);
        // A compaction may have run since the handle was issued.
        self.pending.insert(pos);
        Ok(previous)
    }

    /// Store a default-valued cell if needed and mark it pending
    pub(crate) fn materialize(&mut self, pos: Position) -> &mut T {
        if self.config.should_compact(self.pending.len()) {
            self.compact();
        }
        self.pending.insert(pos);
        let default = &self.default;
        self.cells.entry(pos).or_insert_with(|| default.clone())
    }

    /// Resolve all pending cells.
    ///
    /// Pending cells that still hold the default are erased; the rest have
    /// their coordinates folded into the extent cache.
    pub fn compact(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        trace!("resolving {} pending cells", self.pending.len());

        let mut erased = 0usize;
        for pos in self.pending.drain() {
            let significant = match self.cells.get(&pos) {
                Some(value) => value.is_significant(&self.default),
                None => continue,
            };

            if significant {
                self.dims.grow(pos);
                continue;
            }

            self.cells.remove(&pos);
            erased += 1;
            debug!("removing speculative cell at {pos}");
            // The write proxy may have stored the default over a boundary cell.
            if self.dims.invalidate_boundary(pos) {
                trace!("{pos} was on a cached boundary, extents invalidated");
            }
        }

        if erased > 0 {
            self.bump_generation();
        }
    }

    /// Number of pending cells awaiting compaction
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Whether there is no pending work
    pub fn is_compacted(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of stored cells without compacting first
    pub fn stored_len(&self) -> usize {
        self.cells.len()
    }

    /// Number of significant cells
    pub fn size(&mut self) -> usize {
        self.compact();
        self.cells.len()
    }

    /// Whether no significant cell is stored
    pub fn is_empty(&mut self) -> bool {
        self.size() == 0
    }

    /// Row extent: 1 + the largest row holding a significant cell
    pub fn rows(&mut self) -> usize {
        self.compact();
        match self.dims.rows.get() {
            Some(rows) => rows,
            None => self.rescan().0,
        }
    }

    /// Column extent: 1 + the largest column holding a significant cell
    pub fn cols(&mut self) -> usize {
        self.compact();
        match self.dims.cols.get() {
            Some(cols) => cols,
            None => self.rescan().1,
        }
    }

    /// (rows, cols)
    pub fn dimensions(&mut self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    fn rescan(&mut self) -> (usize, usize) {
        let (rows, cols) = scan_extents(self.cells.keys().copied());
        debug!("rescanned {} cells: {rows} rows, {cols} cols", self.cells.len());
        self.dims = DimensionCache::known(rows, cols);
        (rows, cols)
    }

    fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Erase every cell
    pub fn clear(&mut self) {
        self.cells.clear();
        self.pending.clear();
        self.dims = DimensionCache::new();
        self.bump_generation();
    }

    /// Stored cells in row-major order. Does not compact.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.cells.iter())
    }

    /// Mutable row-major iteration; every visited cell becomes pending
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.cells.iter_mut(), &mut self.pending)
    }

    /// Stored cells of one row as (col, value), in column order
    pub fn row_cells(&self, row: i64) -> impl Iterator<Item = (i64, &T)> + '_ {
        self.cells
            .range(Position::new(row, i64::MIN)..=Position::new(row, i64::MAX))
            .map(|(pos, value)| (pos.col, value))
    }

    /// Stored cells of one column as (row, value), in row order
    pub fn col_cells(&self, col: i64) -> impl Iterator<Item = (i64, &T)> + '_ {
        self.cells
            .iter()
            .filter(move |(pos, _)| pos.col == col)
            .map(|(pos, value)| (pos.row, value))
    }
}

impl<T: CellValue> Index<(i64, i64)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (i64, i64)) -> &T {
        self.at(row, col)
    }
}

impl<T: CellValue> IndexMut<(i64, i64)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (i64, i64)) -> &mut T {
        self.materialize(Position::new(row, col))
    }
}

impl<T: CellValue> Index<Position> for Matrix<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &T {
        self.at_pos(pos)
    }
}

impl<T: CellValue> IndexMut<Position> for Matrix<T> {
    fn index_mut(&mut self, pos: Position) -> &mut T {
        self.materialize(pos)
    }
}

impl<'a, T: CellValue> IntoIterator for &'a Matrix<T> {
    type Item = (Position, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: CellValue> IntoIterator for &'a mut Matrix<T> {
    type Item = (Position, &'a mut T);
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: CellValue> Extend<(Position, T)> for Matrix<T> {
    fn extend<I: IntoIterator<Item = (Position, T)>>(&mut self, iter: I) {
        for (pos, value) in iter {
            self.insert_at(pos, value);
        }
    }
}

impl<T: CellValue> SparseGrid for Matrix<T> {
    type Element = T;

    fn get_element(&self, pos: Position) -> &T {
        self.at_pos(pos)
    }

    fn default_element(&self) -> &T {
        &self.default
    }

    fn dimensions(&mut self) -> (usize, usize) {
        Matrix::dimensions(self)
    }

    fn nnz(&mut self) -> usize {
        self.size()
    }
}

impl<T: CellValue> GridOperations for Matrix<T> {
    fn get_row(&self, row: i64) -> Vec<(i64, T)> {
        self.row_cells(row)
            .map(|(col, value)| (col, value.clone()))
            .collect()
    }

    fn get_col(&self, col: i64) -> Vec<(i64, T)> {
        self.col_cells(col)
            .map(|(row, value)| (row, value.clone()))
            .collect()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Matrix<T> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt.debug_struct("Matrix")
            .field("default", &self.default)
            .field("cells", &self.cells)
            .field("pending", &self.pending.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompactionPolicy;
    use crate::testing::init_test;

    #[test]
    fn test_empty() {
        let mut m = Matrix::with_default(-1i64);
        assert_eq!(m.size(), 0);
        assert_eq!(m.rows(), 0);
        assert_eq!(m.cols(), 0);
        assert!(m.is_empty());
        assert_eq!(*m.at(100, 100), -1);
    }

    #[test]
    fn test_insert_and_shrink() {
        init_test();
        let mut m = Matrix::with_default(-1i64);

        m.insert(40, 40, -1);
        assert_eq!(m.size(), 0);
        assert_eq!(m.rows(), 0);

        m.insert(40, 40, 1);
        assert_eq!(m.size(), 1);
        assert_eq!(m.cols(), 41);
        assert_eq!(m.rows(), 41);

        m.insert(10, 45, 2);
        assert_eq!(m.size(), 2);
        assert_eq!(m.cols(), 46);
        assert_eq!(m.rows(), 41);

        m.insert(45, 1, -1);
        assert_eq!(m.size(), 2);
        assert_eq!(m.cols(), 46);
        assert_eq!(m.rows(), 41);

        m.insert(45, 1, -2);
        assert_eq!(m.size(), 3);
        assert_eq!(m.cols(), 46);
        assert_eq!(m.rows(), 46);

        m.insert(45, 1, -1);
        assert_eq!(m.size(), 2);
        assert_eq!(m.cols(), 46);
        assert_eq!(m.rows(), 41);

        m.insert(10, 45, -1);
        assert_eq!(m.size(), 1);
        assert_eq!(m.cols(), 41);
        assert_eq!(m.rows(), 41);
    }

    #[test]
    fn test_insert_returns_previous() {
        let mut m = Matrix::<i64>::new();
        assert_eq!(m.insert(1, 2, 3), None);
        assert_eq!(m.insert(1, 2, 4), Some(3));
        assert_eq!(m.remove(1, 2), Some(4));
        assert_eq!(m.remove(1, 2), None);
        assert_eq!(m.insert(1, 2, 0), None);
    }

    #[test]
    fn test_growth_does_not_rescan_unknown() {
        let mut m = Matrix::<i64>::new();
        m.insert(5, 5, 1);
        m.insert(9, 9, 1);
        m.insert(9, 9, 0);
        assert_eq!(m.dims.rows.get(), None);

        // Growing an unknown axis keeps it unknown
        m.insert(2, 2, 1);
        assert_eq!(m.dims.rows.get(), None);
        assert_eq!(m.rows(), 6);
        assert_eq!(m.dims.rows.get(), Some(6));
    }

    #[test]
    fn test_index_write_proxy() {
        init_test();
        let mut m = Matrix::<i64>::new();
        m[(3, 4)] = 12;
        let _ = &mut m[(7, 7)];
        m[Position::new(1, 9)] = 0;

        assert_eq!(m.pending_len(), 3);
        assert_eq!(m.stored_len(), 3);

        assert_eq!(m.size(), 1);
        assert_eq!(m.size(), 1);
        assert!(m.is_compacted());
        assert_eq!(m.dimensions(), (4, 5));
        assert_eq!(m[(3, 4)], 12);
        assert_eq!(m[Position::new(7, 7)], 0);
    }

    #[test]
    fn test_proxy_overwrite_with_default_shrinks() {
        let mut m = Matrix::<i64>::new();
        m.insert(2, 2, 1);
        m.insert(8, 3, 1);
        m.insert(4, 9, 1);
        assert_eq!(m.dimensions(), (9, 10));

        m[(8, 3)] = 0;
        assert_eq!(m.size(), 2);
        assert_eq!(m.rows(), 5);
        assert_eq!(m.cols(), 10);

        // Interior cell: extents stay cached
        m[(2, 2)] = 0;
        assert_eq!(m.size(), 1);
        assert!(m.dims.is_known());
        assert_eq!(m.dimensions(), (5, 10));
    }

    #[test]
    fn test_pending_cell_erased_by_insert() {
        let mut m = Matrix::<i64>::new();
        m.insert(0, 0, 1);
        m[(5, 5)] = 3;
        m.insert(5, 5, 0);
        assert_eq!(m.pending_len(), 1);
        assert_eq!(m.size(), 1);
        assert_eq!(m.dimensions(), (1, 1));
    }

    #[test]
    fn test_eager_compaction() {
        let mut m = Matrix::with_config(0i64, MatrixConfig::eager());
        let _ = &mut m[(1, 1)];
        let _ = &mut m[(2, 2)];
        let _ = &mut m[(3, 3)];
        // Each access resolved the one before it
        assert_eq!(m.pending_len(), 1);
        assert_eq!(m.stored_len(), 1);

        let mut batched = Matrix::with_config(
            0i64,
            MatrixConfig::default().with_compaction(CompactionPolicy::Eager { threshold: 3 }),
        );
        for i in 0..3 {
            let _ = &mut batched[(i, i)];
        }
        assert_eq!(batched.stored_len(), 3);
        let _ = &mut batched[(9, 9)];
        assert_eq!(batched.stored_len(), 1);
    }

    #[test]
    fn test_negative_coordinates() {
        let mut m = Matrix::<i64>::new();
        m.insert(-3, -4, 1);
        assert_eq!(m.size(), 1);
        assert_eq!(m.dimensions(), (0, 0));

        m.insert(2, -1, 1);
        assert_eq!(m.dimensions(), (3, 0));
        assert_eq!(m.iter().next().map(|(pos, _)| pos), Some(Position::new(-3, -4)));
    }

    #[test]
    fn test_row_and_col_cells() {
        let mut m = Matrix::<i64>::new();
        m.extend([
            (Position::new(0, 0), 1),
            (Position::new(0, 5), 2),
            (Position::new(1, 0), 3),
            (Position::new(2, 5), 4),
        ]);

        assert_eq!(m.get_row(0), vec![(0, 1), (5, 2)]);
        assert_eq!(m.get_col(5), vec![(0, 2), (2, 4)]);
        assert!(m.get_row(7).is_empty());
        assert_eq!(m.nnz(), 4);
        assert_eq!(SparseGrid::dimensions(&mut m), (3, 6));
    }

    #[test]
    fn test_clear() {
        let mut m = Matrix::<i64>::new();
        m.insert(3, 3, 3);
        let handle = m.handle(1, 1);
        m.clear();
        assert_eq!(m.size(), 0);
        assert_eq!(m.dimensions(), (0, 0));
        assert_eq!(m.write(&handle, 1), Err(InfmatError::StaleHandle));
    }

    #[test]
    fn test_non_copy_values() {
        let mut m = Matrix::<String>::new();
        m.insert(0, 1, "a".to_string());
        m[(2, 0)].push_str("bc");
        m[(4, 4)].clear();

        assert_eq!(m.size(), 2);
        assert_eq!(m.at(2, 0), "bc");
        assert_eq!(m.at(4, 4), "");
        assert_eq!(m.dimensions(), (3, 2));
    }
}
