//! Bounded forward peeks
//!
//!     Both peeks skip blank and comment lines and never move the engine's cursor; they only
//!     report what lies ahead.

use super::comments::is_skippable;
use crate::foam::document::LineSource;

/// Index of the first non-blank, non-comment line at or after `from`.
pub fn next_content_line<D>(doc: &D, from: usize) -> Option<usize>
where
    D: LineSource + ?Sized,
{
    (from..doc.line_count()).find(|&index| {
        doc.line(index)
            .map(|line| !is_skippable(line.trimmed()))
            .unwrap_or(false)
    })
}

/// Whether one of the next `window` content lines starting at `from` begins with `opener`.
fn opener_follows<D>(doc: &D, from: usize, window: usize, opener: char) -> bool
where
    D: LineSource + ?Sized,
{
    let mut seen = 0;
    let mut cursor = from;
    while seen < window {
        let Some(index) = next_content_line(doc, cursor) else {
            return false;
        };
        let starts = doc
            .line(index)
            .map(|line| line.trimmed().starts_with(opener))
            .unwrap_or(false);
        if starts {
            return true;
        }
        seen += 1;
        cursor = index + 1;
    }
    false
}

/// Whether an opening brace begins one of the next `window` content lines.
pub fn brace_follows<D>(doc: &D, from: usize, window: usize) -> bool
where
    D: LineSource + ?Sized,
{
    opener_follows(doc, from, window, '{')
}
