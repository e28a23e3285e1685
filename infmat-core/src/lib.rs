#![no_std]

//! infmat core - definitions for the sparse infinite matrix
//!
//! This crate provides the position key, the extent cache, the error type
//! and the traits shared by matrix implementations, plus pure parsers for
//! the cell text format. It does no I/O and holds no cells itself.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod extent;
pub mod position;
pub mod traits;
pub mod validation;

pub use error::*;
pub use extent::{extent_of, scan_extents, DimensionCache, Extent};
pub use position::Position;
pub use traits::*;
pub use validation::{parse_cell_line, parse_position, parse_range};

#[cfg(feature = "alloc")]
pub use validation::normalize_line;
