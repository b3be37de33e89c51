//! The document view consumed by the outline engine
//!
//!     The engine never owns text. It reads lines through [`LineSource`], which is what an editor
//!     buffer, a language server's document store or a file on disk expose to it. Each line
//!     comes with its index, its raw text, its range and the column of its first non-whitespace
//!     character.
//!
//!     [`TextDocument`] is the implementation used by the bundled hosts: an owned snapshot of a
//!     string, split on `\n` with a trailing `\r` dropped. Like editors do, a final newline
//!     produces a last, empty line.

use crate::foam::ast::{Position, Range};

/// One physical line of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub index: usize,
    pub text: &'a str,
    /// Column 0 through the end of the text.
    pub range: Range,
    /// Column of the first non-whitespace character; the text length for blank lines.
    pub indent: usize,
}

impl<'a> Line<'a> {
    pub fn new(index: usize, text: &'a str) -> Self {
        let length = text.chars().count();
        let indent = text.chars().take_while(|c| c.is_whitespace()).count();
        Self {
            index,
            text,
            range: Range::new(Position::new(index, 0), Position::new(index, length)),
            indent,
        }
    }

    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Read-only access to the lines of a document.
pub trait LineSource {
    fn line_count(&self) -> usize;

    /// The line at `index`, or `None` past the end of the document.
    fn line(&self, index: usize) -> Option<Line<'_>>;
}

/// An owned text snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    text: String,
    /// Byte range of each line, newline excluded
    lines: Vec<(usize, usize)>,
}

impl TextDocument {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut lines = Vec::new();
        let mut start = 0;
        for (idx, ch) in text.char_indices() {
            if ch == '\n' {
                lines.push((start, idx));
                start = idx + 1;
            }
        }
        lines.push((start, text.len()));
        for (start, end) in lines.iter_mut() {
            if text[*start..*end].ends_with('\r') {
                *end -= 1;
            }
        }
        Self { text, lines }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = Line<'_>> {
        (0..self.lines.len()).filter_map(|index| self.line(index))
    }
}

impl LineSource for TextDocument {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Option<Line<'_>> {
        let (start, end) = *self.lines.get(index)?;
        Some(Line::new(index, &self.text[start..end]))
    }
}

impl From<&str> for TextDocument {
    fn from(text: &str) -> Self {
        TextDocument::new(text)
    }
}

impl From<String> for TextDocument {
    fn from(text: String) -> Self {
        TextDocument::new(text)
    }
}

/// A borrowed slice of lines works as a document too.
impl<S: AsRef<str>> LineSource for [S] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Option<Line<'_>> {
        self.get(index).map(|text| Line::new(index, text.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_newline_yields_empty_last_line() {
        let doc = TextDocument::new("a\nb\n");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line(2).unwrap().text, "");
        assert!(doc.line(3).is_none());
    }

    #[test]
    fn test_empty_text_has_one_line() {
        let doc = TextDocument::new("");
        assert_eq!(doc.line_count(), 1);
        assert!(doc.line(0).unwrap().is_blank());
    }

    #[test]
    fn test_crlf_is_stripped() {
        let doc = TextDocument::new("FoamFile\r\n{\r\n}");
        let texts: Vec<_> = doc.lines().map(|line| line.text).collect();
        assert_eq!(texts, vec!["FoamFile", "{", "}"]);
    }

    #[test]
    fn test_indent_and_range() {
        let doc = TextDocument::new("a\n    nu 1e-05;");
        let line = doc.line(1).unwrap();
        assert_eq!(line.indent, 4);
        assert_eq!(line.trimmed(), "nu 1e-05;");
        assert_eq!(line.range, Range::new(Position::new(1, 0), Position::new(1, 13)));
    }

    #[test]
    fn test_tab_counts_as_one_column() {
        let line = Line::new(0, "\tkey value;");
        assert_eq!(line.indent, 1);
    }

    #[test]
    fn test_slice_source() {
        let lines = ["a", "  b"];
        let source: &[&str] = &lines;
        assert_eq!(source.line_count(), 2);
        assert_eq!(source.line(1).unwrap().indent, 2);
    }
}
