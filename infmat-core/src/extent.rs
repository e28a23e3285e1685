//! Memoized row/column extents
//!
//! An extent along one axis is `1 + max coordinate` over the significant
//! cells, or 0 when there are none. The cache only ever grows in place;
//! anything that might shrink an extent turns it into [`Extent::Unknown`]
//! and the owner rescans on the next query.

use crate::Position;

/// Cached extent of one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    /// The cached value is the true extent
    Known(usize),
    /// Needs a full rescan before it can be answered
    Unknown,
}

impl Default for Extent {
    fn default() -> Self {
        Extent::Known(0)
    }
}

impl Extent {
    /// Get the cached value, if known
    pub fn get(self) -> Option<usize> {
        match self {
            Extent::Known(n) => Some(n),
            Extent::Unknown => None,
        }
    }

    /// Fold in a cell at `coord`. An unknown extent stays unknown.
    pub fn grow(&mut self, coord: i64) {
        if let Extent::Known(n) = self {
            *n = (*n).max(extent_of(coord));
        }
    }

    /// Forget the cached value
    pub fn invalidate(&mut self) {
        *self = Extent::Unknown;
    }

    /// Whether a cell at `coord` lies on the cached boundary, i.e. removing
    /// it could shrink the extent.
    pub fn is_boundary(self, coord: i64) -> bool {
        match self {
            Extent::Known(0) => false,
            Extent::Known(n) => extent_of(coord) == n,
            Extent::Unknown => false,
        }
    }
}

/// Extent contributed by a single coordinate.
///
/// Negative coordinates contribute nothing; `i64::MAX` saturates.
pub fn extent_of(coord: i64) -> usize {
    usize::try_from(coord.saturating_add(1)).unwrap_or(0)
}

/// Row and column extent caches of one matrix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DimensionCache {
    pub rows: Extent,
    pub cols: Extent,
}

impl DimensionCache {
    /// Create a cache for an empty matrix
    pub const fn new() -> Self {
        Self::known(0, 0)
    }

    /// Grow both axes to cover `pos`
    pub fn grow(&mut self, pos: Position) {
        self.rows.grow(pos.row);
        self.cols.grow(pos.col);
    }

    /// Invalidate both axes
    pub fn invalidate(&mut self) {
        self.rows.invalidate();
        self.cols.invalidate();
    }

    /// Invalidate only the axes on whose boundary `pos` sits.
    ///
    /// Returns true if anything was invalidated.
    pub fn invalidate_boundary(&mut self, pos: Position) -> bool {
        let mut invalidated = false;
        if self.rows.is_boundary(pos.row) {
            self.rows.invalidate();
            invalidated = true;
        }
        if self.cols.is_boundary(pos.col) {
            self.cols.invalidate();
            invalidated = true;
        }
        invalidated
    }

    /// Whether both axes are known
    pub fn is_known(&self) -> bool {
        self.rows.get().is_some() && self.cols.get().is_some()
    }

    /// Cache holding two known extents
    pub const fn known(rows: usize, cols: usize) -> Self {
        Self {
            rows: Extent::Known(rows),
            cols: Extent::Known(cols),
        }
    }

    /// Compute both extents from scratch over a set of positions
    pub fn scan<I: IntoIterator<Item = Position>>(positions: I) -> Self {
        let (rows, cols) = scan_extents(positions);
        Self::known(rows, cols)
    }
}

/// Walk a set of positions and return the (rows, cols) extents
pub fn scan_extents<I: IntoIterator<Item = Position>>(positions: I) -> (usize, usize) {
    positions.into_iter().fold((0, 0), |(rows, cols), pos| {
        (rows.max(extent_of(pos.row)), cols.max(extent_of(pos.col)))
    })
}
