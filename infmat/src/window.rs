//! Dense rendering of a rectangular window
//!
//! Reads go through [`SparseGrid::get_element`], so rendering never
//! materializes cells.

use core::fmt::{Display, Formatter};
use core::ops::Range;
use infmat_core::SparseGrid;

/// A rectangular window over a grid, displayed as space-separated rows
pub struct Window<'a, G> {
    grid: &'a G,
    rows: Range<i64>,
    cols: Range<i64>,
}

impl<'a, G: SparseGrid> Window<'a, G> {
    /// Window over `rows` x `cols` (half-open ranges)
    pub fn new(grid: &'a G, rows: Range<i64>, cols: Range<i64>) -> Self {
        Self { grid, rows, cols }
    }
}

impl<G> Display for Window<'_, G>
where
    G: SparseGrid,
    G::Element: Display,
{
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        for row in self.rows.clone() {
            for (i, col) in self.cols.clone().enumerate() {
                if i > 0 {
                    write!(fmt, " ")?;
                }
                let value = self.grid.get_element((row, col).into());
                write!(fmt, "{value}")?;
            }
            writeln!(fmt)?;
        }
        Ok(())
    }
}
