//! Symbol nodes

use super::range::Range;
use serde::Serialize;
use std::fmt;

/// Semantic role of an outline node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolKind {
    /// Mesh and field structure blocks: `boundary`, `faces`, `points`, `edges`, `internalField`.
    Struct,
    /// Any other named `{ ... }` block.
    ObjectBlock,
    /// Named patches such as `inlet` or `walls`.
    InterfaceBlock,
    /// A named `( ... )` list.
    ArrayList,
    /// The `FoamFile` header block, and `location` entries.
    FileHeader,
    /// A dimensioned assignment, `nu [0 2 -1 0 0 0 0] 1e-05;`.
    ConstantUnit,
    /// A plain `key value;` entry.
    Property,
    /// The `class` and `object` entries of a header.
    ClassLike,
    /// The `version` and `format` entries of a header.
    ConstantLiteral,
}

impl SymbolKind {
    /// Short label used when rendering outlines as text
    pub fn label(&self) -> &'static str {
        match self {
            SymbolKind::Struct => "struct",
            SymbolKind::ObjectBlock => "block",
            SymbolKind::InterfaceBlock => "patch",
            SymbolKind::ArrayList => "list",
            SymbolKind::FileHeader => "file",
            SymbolKind::ConstantUnit => "unit",
            SymbolKind::Property => "prop",
            SymbolKind::ClassLike => "class",
            SymbolKind::ConstantLiteral => "const",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single node in the outline tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolNode {
    pub name: String,
    pub detail: String,
    pub kind: SymbolKind,
    pub span: Range,
    pub selection_anchor: Range,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SymbolNode>,
}

impl SymbolNode {
    pub fn new(
        name: impl Into<String>,
        detail: impl Into<String>,
        kind: SymbolKind,
        span: Range,
        selection_anchor: Range,
    ) -> Self {
        Self {
            name: name.into(),
            detail: detail.into(),
            kind,
            span,
            selection_anchor,
            children: Vec::new(),
        }
    }

    /// Whether this node has children (can be expanded/collapsed)
    pub fn is_collapsible(&self) -> bool {
        !self.children.is_empty()
    }

    /// Attach a nested node, widening this node's span to cover it.
    pub fn push_child(&mut self, child: SymbolNode) {
        self.span.extend_to(&child.span);
        self.children.push(child);
    }

    /// Depth-first, document-order walk over this node and its descendants.
    pub fn walk(&self) -> impl Iterator<Item = &SymbolNode> {
        let mut pending = vec![self];
        std::iter::from_fn(move || {
            let node = pending.pop()?;
            pending.extend(node.children.iter().rev());
            Some(node)
        })
    }
}

/// Walk every node of an outline in document order.
pub fn flatten(roots: &[SymbolNode]) -> impl Iterator<Item = &SymbolNode> {
    roots.iter().flat_map(SymbolNode::walk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foam::ast::range::Position;

    fn line_range(line: usize) -> Range {
        Range::new(Position::new(line, 0), Position::new(line, 8))
    }

    #[test]
    fn test_push_child_widens_span() {
        let mut parent = SymbolNode::new(
            "key",
            "value",
            SymbolKind::Property,
            line_range(0),
            line_range(0),
        );
        let child = SymbolNode::new(
            "inner",
            "block",
            SymbolKind::ObjectBlock,
            Range::new(Position::new(1, 0), Position::new(3, 5)),
            line_range(1),
        );
        parent.push_child(child);
        assert_eq!(parent.span.end, Position::new(3, 5));
        assert_eq!(parent.selection_anchor, line_range(0));
        assert!(parent.is_collapsible());
    }

    #[test]
    fn test_walk_is_document_order() {
        let mut a = SymbolNode::new("a", "", SymbolKind::ObjectBlock, line_range(0), line_range(0));
        let mut b = SymbolNode::new("b", "", SymbolKind::ObjectBlock, line_range(1), line_range(1));
        b.push_child(SymbolNode::new("c", "", SymbolKind::Property, line_range(2), line_range(2)));
        a.push_child(b);
        a.push_child(SymbolNode::new("d", "", SymbolKind::Property, line_range(3), line_range(3)));
        let roots = vec![a];
        let names: Vec<_> = flatten(&roots).map(|node| node.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&SymbolKind::ConstantUnit).unwrap();
        assert_eq!(json, "\"constant-unit\"");
    }
}
