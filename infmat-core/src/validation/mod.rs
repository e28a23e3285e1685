//! Text validation and parsing utilities
//!
//! Pure functions with no I/O dependencies, used by the CLI to turn cell
//! files into positions and values.

pub mod line;
pub mod parsing;

#[cfg(feature = "alloc")]
pub use line::normalize_line;
pub use line::{count_tabs, TABS_PER_LINE};
pub use parsing::{parse_cell_line, parse_i64, parse_position, parse_range};
