//! Fluent assertion API for outlines
//!
//!     Each assertion panics with the path of the node it was checking (`roots[2].children[0]`)
//!     so a failure in a deep tree points straight at the offending node.

use crate::foam::ast::{SymbolKind, SymbolNode};

/// Start asserting on a root sequence
pub fn assert_outline(roots: &[SymbolNode]) -> OutlineAssertion<'_> {
    OutlineAssertion {
        nodes: roots,
        context: "roots".to_string(),
    }
}

/// Assertions over a sequence of sibling nodes
pub struct OutlineAssertion<'a> {
    nodes: &'a [SymbolNode],
    context: String,
}

impl<'a> OutlineAssertion<'a> {
    pub fn item_count(self, expected: usize) -> Self {
        assert_eq!(
            self.nodes.len(),
            expected,
            "{}: Expected {} items, found {} ({:?})",
            self.context,
            expected,
            self.nodes.len(),
            self.nodes.iter().map(|n| n.name.as_str()).collect::<Vec<_>>()
        );
        self
    }

    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(SymbolAssertion<'a>) -> SymbolAssertion<'a>,
    {
        let context = format!("{}[{}]", self.context, index);
        let node = self.nodes.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Item index {} out of bounds ({} items)",
                context,
                index,
                self.nodes.len()
            )
        });
        assertion(SymbolAssertion { node, context });
        self
    }

    /// Names of the nodes, in order
    pub fn names(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(actual, expected, "{}: Unexpected names", self.context);
        self
    }
}

/// Assertions on a single node
pub struct SymbolAssertion<'a> {
    node: &'a SymbolNode,
    context: String,
}

impl<'a> SymbolAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.node.name, expected,
            "{}: Expected name '{}', found '{}'",
            self.context, expected, self.node.name
        );
        self
    }

    pub fn detail(self, expected: &str) -> Self {
        assert_eq!(
            self.node.detail, expected,
            "{}: Expected detail '{}', found '{}'",
            self.context, expected, self.node.detail
        );
        self
    }

    pub fn kind(self, expected: SymbolKind) -> Self {
        assert_eq!(
            self.node.kind, expected,
            "{}: Expected kind {:?}, found {:?}",
            self.context, expected, self.node.kind
        );
        self
    }

    /// Zero based first and last line of the span
    pub fn spans_lines(self, start: usize, end: usize) -> Self {
        let span = self.node.span;
        assert_eq!(
            (span.start.line, span.end.line),
            (start, end),
            "{}: Expected span over lines {}..{}, found {}..{}",
            self.context,
            start,
            end,
            span.start.line,
            span.end.line
        );
        self
    }

    /// Zero based line of the selection anchor
    pub fn anchored_at(self, line: usize) -> Self {
        assert_eq!(
            self.node.selection_anchor.start.line, line,
            "{}: Expected anchor on line {}, found {}",
            self.context, line, self.node.selection_anchor.start.line
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.node.children.len(),
            expected,
            "{}: Expected {} children, found {} ({:?})",
            self.context,
            expected,
            self.node.children.len(),
            self.node
                .children
                .iter()
                .map(|n| n.name.as_str())
                .collect::<Vec<_>>()
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(SymbolAssertion<'a>) -> SymbolAssertion<'a>,
    {
        let context = format!("{}.children[{}]", self.context, index);
        let node = self.node.children.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Child index {} out of bounds ({} children)",
                context,
                index,
                self.node.children.len()
            )
        });
        assertion(SymbolAssertion { node, context });
        self
    }

    /// Assertions over all children at once
    pub fn children<F>(self, assertion: F) -> Self
    where
        F: FnOnce(OutlineAssertion<'a>) -> OutlineAssertion<'a>,
    {
        assertion(OutlineAssertion {
            nodes: &self.node.children,
            context: format!("{}.children", self.context),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foam::parsing::outline_from_str;

    #[test]
    fn test_passing_chain() {
        let outline = outline_from_str("a\n{\n    b 1;\n}\n");
        assert_outline(&outline).item_count(1).item(0, |node| {
            node.name("a")
                .kind(SymbolKind::ObjectBlock)
                .detail("block")
                .spans_lines(0, 3)
                .anchored_at(0)
                .child_count(1)
                .child(0, |child| child.name("b").detail("1"))
        });
    }

    #[test]
    #[should_panic(expected = "roots[0].children[0]: Expected name 'c', found 'b'")]
    fn test_failure_reports_path() {
        let outline = outline_from_str("a\n{\n    b 1;\n}\n");
        assert_outline(&outline).item(0, |node| node.child(0, |child| child.name("c")));
    }

    #[test]
    #[should_panic(expected = "roots: Expected 2 items, found 1")]
    fn test_item_count_failure() {
        let outline = outline_from_str("a 1;\n");
        assert_outline(&outline).item_count(2);
    }
}
