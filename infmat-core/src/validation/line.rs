//! Cell line normalization
//!
//! Cell files carry one cell per line as `row<TAB>col<TAB>value`.

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
use alloc::{borrow::Cow, string::String};

#[cfg(feature = "alloc")]
use crate::InfmatError;

/// Number of tab separators in a well-formed cell line
pub const TABS_PER_LINE: usize = 2;

#[cfg(feature = "alloc")]
fn is_line_break(ch: char) -> bool {
    ch == '\r' || ch == '\n'
}

/// Count the tab separators in a line
pub fn count_tabs(line: &str) -> usize {
    line.bytes().filter(|&b| b == b'\t').count()
}

/// Strip every `\r`/`\n` from a line and check its tab count
///
/// Borrows the input unless a line break has to be removed.
#[cfg(feature = "alloc")]
pub fn normalize_line(line: &str) -> Result<Cow<'_, str>, InfmatError> {
    let line = if line.contains(is_line_break) {
        Cow::Owned(line.chars().filter(|&ch| !is_line_break(ch)).collect::<String>())
    } else {
        Cow::Borrowed(line)
    };

    let found = count_tabs(&line);
    if found != TABS_PER_LINE {
        return Err(InfmatError::InvalidTabCount {
            expected: TABS_PER_LINE,
            found,
        });
    }

    Ok(line)
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_line() {
        assert_eq!(normalize_line("1\t2\t3").as_deref(), Ok("1\t2\t3"));
        assert_eq!(normalize_line("1\t2\t3\r\n").as_deref(), Ok("1\t2\t3"));
        assert_eq!(normalize_line("1\t2\r\t3").as_deref(), Ok("1\t2\t3"));

        assert!(matches!(normalize_line("1\t2\t3"), Ok(Cow::Borrowed(_))));
    }

    #[test]
    fn test_normalize_line_tab_count() {
        assert_eq!(
            normalize_line("1\t2").map(|_| ()),
            Err(InfmatError::InvalidTabCount {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            normalize_line("1\t2\t3\t4").map(|_| ()),
            Err(InfmatError::InvalidTabCount {
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            normalize_line("").map(|_| ()),
            Err(InfmatError::InvalidTabCount {
                expected: 2,
                found: 0
            })
        );
    }
}
