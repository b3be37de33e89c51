//! Block-span resolution
//!
//!     Finds the line that closes a `{ }` block or a `( )` list. The scan keeps a running open
//!     count of one delimiter pair; delimiters of the other pair are ignored, so a list nested
//!     in a block does not disturb the block's count and vice versa.
//!
//!     The count starts at 1 when the opener sits on the triggering line and at 0 when it is
//!     expected on a later line. Scanning from the line after the trigger:
//!         - count 0 and the line is exactly the opener: the count becomes 1, nothing else on
//!           the line is counted.
//!         - count 0 and the line starts with the opener: the count becomes 1 and then every
//!           delimiter on the line is counted, that leading opener included.
//!         - otherwise openers add one and closers subtract one. The count may go negative.
//!
//!     The first line on which the count comes back to exactly zero is the closing line. A
//!     construct that never closes extends to the last line of the document.

use crate::foam::document::{Line, LineSource};

/// An opener/closer character pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub open: char,
    pub close: char,
}

impl Delimiters {
    pub const BRACES: Delimiters = Delimiters {
        open: '{',
        close: '}',
    };

    pub const PARENS: Delimiters = Delimiters {
        open: '(',
        close: ')',
    };

    /// Openers minus closers in `text`.
    pub fn net_count(&self, text: &str) -> i64 {
        text.chars().fold(0, |count, ch| {
            if ch == self.open {
                count + 1
            } else if ch == self.close {
                count - 1
            } else {
                count
            }
        })
    }
}

/// Index of the line closing a construct, scanning from line `from` with `initial` delimiters
/// already open.
pub fn resolve_block_end<D>(doc: &D, from: usize, delimiters: Delimiters, initial: i64) -> usize
where
    D: LineSource + ?Sized,
{
    let last = doc.line_count().saturating_sub(1);
    let mut count = initial;

    for index in from..doc.line_count() {
        let Some(line) = doc.line(index) else {
            break;
        };
        let trimmed = line.trimmed();

        if count == 0 && trimmed.starts_with(delimiters.open) {
            count = 1;
            if trimmed.len() == delimiters.open.len_utf8() {
                continue;
            }
        }

        let before = count;
        count += delimiters.net_count(trimmed);
        if count == 0 && before != 0 {
            return index;
        }
    }

    last
}

/// Index of the line closing the construct introduced by `line`.
///
/// The scan always starts on the following line, with one delimiter open when `line` itself
/// contains the opener.
pub fn block_end<D>(doc: &D, line: &Line<'_>, delimiters: Delimiters) -> usize
where
    D: LineSource + ?Sized,
{
    let initial = if line.trimmed().contains(delimiters.open) {
        1
    } else {
        0
    };
    resolve_block_end(doc, line.index + 1, delimiters, initial)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn end(lines: &[&str], from: usize, initial: i64) -> usize {
        resolve_block_end(lines, from, Delimiters::BRACES, initial)
    }

    #[test]
    fn test_opener_on_next_line() {
        let lines = ["name", "{", "    key value;", "}"];
        assert_eq!(end(&lines, 1, 0), 3);
    }

    #[test]
    fn test_nested_blocks() {
        let lines = ["solvers", "{", "    p", "    {", "        solver PCG;", "    }", "}", "after 1;"];
        assert_eq!(end(&lines, 1, 0), 6);
        assert_eq!(end(&lines, 3, 0), 5);
    }

    #[test]
    fn test_initial_count_from_opening_line() {
        let lines = ["boundary {", "    inlet { type patch; }", "}"];
        assert_eq!(end(&lines, 1, 1), 2);
    }

    #[test]
    fn test_opener_line_counts_its_own_delimiters() {
        // `{` raises the count to 1, then the whole line is counted: 1 + 1 - 1
        let lines = ["name", "{ a 1; }", "b 2;", "}"];
        assert_eq!(end(&lines, 1, 0), 3);

        // `{ a 1;` leaves 2 open, so a single `}` never balances it
        let open = ["name", "{ a 1;", "  b 2;", "}", "c 3;"];
        assert_eq!(end(&open, 1, 0), 4);
    }

    #[test]
    fn test_unbalanced_falls_back_to_last_line() {
        let lines = ["name", "{", "  a 1;", "  b 2;"];
        assert_eq!(end(&lines, 1, 0), 3);
    }

    #[test]
    fn test_stray_closer_before_opener_goes_negative() {
        // `}` takes the count to -1, the `{` brings it back to 0
        let lines = ["name", "}", "{", "}"];
        assert_eq!(end(&lines, 1, 0), 2);
    }

    #[test]
    fn test_lines_without_delimiters_never_match_at_zero() {
        let lines = ["FoamFile", "", "// header", "{", "}"];
        assert_eq!(end(&lines, 1, 0), 4);
    }

    #[test]
    fn test_overshooting_line_does_not_close() {
        // `}}}` jumps from 2 to -1, only the later `{` brings the count back to 0
        let lines = ["a {", "  b {", "  }}}", "{", "c 1;"];
        assert_eq!(end(&lines, 1, 1), 3);
    }

    #[test]
    fn test_parens_ignore_braces() {
        let lines = ["blocks(", "    hex (0 1 2 3 4 5 6 7) { }", ");"];
        assert_eq!(resolve_block_end(&lines[..], 1, Delimiters::PARENS, 1), 2);
    }

    #[test]
    fn test_from_past_end() {
        let lines = ["boundary {"];
        assert_eq!(end(&lines, 1, 1), 0);
    }

    #[test]
    fn test_block_end_with_opener_on_line_scans_forward() {
        // the balanced line still leaves one open, so the next `}` closes it
        let lines = ["a { b 1; }", "c 2;", "}", "d 3;"];
        let line = Line::new(0, lines[0]);
        assert_eq!(block_end(&lines[..], &line, Delimiters::BRACES), 2);
    }

    #[test]
    fn test_block_end_on_last_line_without_closer() {
        let lines = ["a { b 1; }", "c 2;"];
        let line = Line::new(0, lines[0]);
        assert_eq!(block_end(&lines[..], &line, Delimiters::BRACES), 1);
    }

    #[test]
    fn test_block_end_without_opener_on_line() {
        let lines = ["FoamFile", "", "{", "    version 2.0;", "}"];
        let line = Line::new(0, lines[0]);
        assert_eq!(block_end(&lines[..], &line, Delimiters::BRACES), 4);
    }
}
