//! infmat - sparse, logically infinite two-dimensional matrix
//!
//! A [`Matrix`] stores only cells whose value differs from its default, yet
//! reads like a dense matrix of unbounded extent: every unstored position
//! holds the default.
//!
//! ## Architecture
//!
//! - **infmat-core**: positions, extent cache, errors, traits and text
//!   parsers (no I/O, `no_std`)
//! - **infmat**: the container, its write proxies, iteration and the CLI
//!
//! ## Quick Start
//!
//! ```rust
//! use infmat::Matrix;
//!
//! let mut m = Matrix::with_default(-1i64);
//! m.insert(40, 40, 1);
//! m[(10, 45)] = 2;       // write proxy, resolved lazily
//! let _ = &mut m[(3, 3)]; // touched but never written
//!
//! assert_eq!(m.size(), 2);
//! assert_eq!((m.rows(), m.cols()), (41, 46));
//! assert_eq!(*m.at(3, 3), -1);
//! ```
//!
//! ## Deferred resolution
//!
//! Write access (`IndexMut`, [`Matrix::slot`], [`Matrix::row_mut`],
//! [`Matrix::handle`], [`Matrix::iter_mut`]) stores a default-valued cell
//! right away and marks it pending. `size`, `rows` and `cols` compact first;
//! [`Matrix::iter`] does not, so speculative cells are visible to it until
//! the next compaction.

// Re-export core abstractions
pub use infmat_core::{
    // Core traits
    CellValue, GridOperations, SparseGrid,
    // Positions and extents
    DimensionCache, Extent, Position,
    // Error handling
    InfmatError, Result,
    // Text parsing
    normalize_line, parse_cell_line, parse_position, parse_range,
};

// Implementation modules
pub mod config;
pub mod iter;
pub mod matrix;
pub mod slot;
pub mod window;

#[cfg(test)]
mod testing;

// Public exports
pub use config::{CompactionPolicy, MatrixConfig};
pub use iter::{Iter, IterMut};
pub use matrix::Matrix;
pub use slot::{CellHandle, Row, RowMut, Slot};
pub use window::Window;
