//! Abstract interfaces for the matrix

pub mod element;
pub mod matrix;

pub use element::CellValue;
#[cfg(feature = "alloc")]
pub use matrix::GridOperations;
pub use matrix::SparseGrid;
