//! Parsing utilities for matrix text formats
//!
//! This module provides pure parsing functions with no I/O dependencies.

use crate::{InfmatError, Position};
use core::ops::Range;
use core::str::FromStr;

/// Parse a range string in the format "start:end"
///
/// Both ends may be negative. Returns a half-open `Range<i64>`.
pub fn parse_range(range_str: &str) -> Result<Range<i64>, InfmatError> {
    let (start_str, end_str) = range_str
        .split_once(':')
        .ok_or(InfmatError::InvalidRange)?;

    let start = parse_i64(start_str).map_err(|_| InfmatError::InvalidRange)?;
    let end = parse_i64(end_str).map_err(|_| InfmatError::InvalidRange)?;

    if start > end {
        return Err(InfmatError::InvalidRange);
    }

    Ok(start..end)
}

/// Parse a position string in the format "row:col"
pub fn parse_position(pos_str: &str) -> Result<Position, InfmatError> {
    let (row_str, col_str) = pos_str
        .split_once(':')
        .ok_or(InfmatError::InvalidPosition)?;

    let row = parse_i64(row_str).map_err(|_| InfmatError::InvalidPosition)?;
    let col = parse_i64(col_str).map_err(|_| InfmatError::InvalidPosition)?;

    Ok(Position::new(row, col))
}

/// Parse a signed integer, ignoring surrounding whitespace
pub fn parse_i64(s: &str) -> Result<i64, InfmatError> {
    s.trim().parse().map_err(|_| InfmatError::InvalidNumber)
}

/// Split a normalized cell line into its position and value
///
/// The line must already have exactly two tabs, see
/// [`normalize_line`](crate::validation::line::normalize_line).
pub fn parse_cell_line<T: FromStr>(line: &str) -> Result<(Position, T), InfmatError> {
    let mut fields = line.split('\t');
    let (Some(row), Some(col), Some(value), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(InfmatError::InvalidTabCount {
            expected: super::line::TABS_PER_LINE,
            found: super::line::count_tabs(line),
        });
    };

    let pos = Position::new(parse_i64(row)?, parse_i64(col)?);
    let value = value
        .trim()
        .parse()
        .map_err(|_| InfmatError::InvalidNumber)?;

    Ok((pos, value))
}
