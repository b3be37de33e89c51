//! Outline extraction for OpenFOAM dictionaries
//!
//!     A dictionary is turned into an outline in a single forward pass over its lines:
//!         1. Classification: each content line is matched against the ordered line shapes. See
//!            [line_classification](crate::foam::lexing::line_classification).
//!         2. Span resolution: a line opening a `{ }` block or a `( )` list is followed to the
//!            line holding its matching closer. See [block_span](block_span).
//!         3. Tree assembly: the node is folded into the tree by the indentation of its line.
//!            See [tree_builder](tree_builder).
//!
//!     The [engine](engine) drives the three steps. The cursor only moves forward; span
//!     resolution peeks ahead but never consumes lines, so the lines inside a block are visited
//!     and classified like any other.
//!
//! Nesting
//!
//!     Nesting comes from indentation, not from brace depth. A node is a child of the closest
//!     preceding node opened at a smaller indent column. Dictionaries written by the OpenFOAM
//!     tools indent consistently, so on real files both views agree; on oddly indented input
//!     the indentation wins.
//!
//! Failure
//!
//!     There is none. Unbalanced delimiters stretch a span to the end of the document,
//!     unrecognised lines are dropped, and the worst outcome is a coarse outline.

pub mod block_span;
pub mod engine;
pub mod tree_builder;

pub use block_span::{resolve_block_end, Delimiters};
pub use engine::parse_outline_with;
pub use tree_builder::TreeBuilder;

use crate::foam::ast::SymbolNode;
use crate::foam::document::{LineSource, TextDocument};

/// Number of content lines searched for the `{` of a bare identifier.
pub const DEFAULT_BRACE_LOOKAHEAD: usize = 4;

/// Knobs for the outline engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// How many non-blank, non-comment lines after a bare identifier may hold its `{`.
    pub brace_lookahead: usize,
    /// Also skip the body lines of multi-line `/* ... */` comments.
    pub skip_block_comments: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            brace_lookahead: DEFAULT_BRACE_LOOKAHEAD,
            skip_block_comments: false,
        }
    }
}

/// Build the outline of a document with the default options.
///
/// # Example
///
/// ```rust,ignore
/// use foam_parser::{parse_outline, TextDocument};
///
/// let doc = TextDocument::new("solvers\n{\n    p { solver PCG; }\n}\n");
/// let outline = parse_outline(&doc);
/// assert_eq!(outline[0].name, "solvers");
/// ```
pub fn parse_outline<D>(doc: &D) -> Vec<SymbolNode>
where
    D: LineSource + ?Sized,
{
    parse_outline_with(doc, &ParseOptions::default())
}

/// Build the outline of a string with the default options.
pub fn outline_from_str(source: &str) -> Vec<SymbolNode> {
    parse_outline(&TextDocument::new(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foam::ast::SymbolKind;

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.brace_lookahead, 4);
        assert!(!options.skip_block_comments);
    }

    #[test]
    fn test_outline_from_str_matches_parse_outline() {
        let source = "a\n{\n    b 1;\n}\n";
        assert_eq!(outline_from_str(source), parse_outline(&TextDocument::new(source)));
    }

    #[test]
    fn test_slice_and_document_agree() {
        let lines = ["nu [0 2 -1 0 0 0 0] 1e-05;", "application icoFoam;"];
        let from_slice = parse_outline(&lines[..]);
        let from_doc = outline_from_str(&lines.join("\n"));
        assert_eq!(from_slice, from_doc);
        assert_eq!(from_slice[0].kind, SymbolKind::ConstantUnit);
    }
}
