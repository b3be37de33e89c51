//! Indentation driven tree assembly
//!
//!     The builder keeps a stack of the nodes that may still receive children, each with the
//!     indent column of the line that opened it. When a node arrives, every open node whose
//!     indent is at least as deep is closed first; the node then becomes a child of whatever is
//!     left on top, or a root when nothing is.
//!
//!     Nodes are owned by the stack while open. A node is moved into its parent when it is
//!     closed, which is also when the parent's span is widened to cover it. Closing happens in
//!     stack order, so children still end up in document order.

use crate::foam::ast::SymbolNode;

#[derive(Debug)]
struct StackEntry {
    node: SymbolNode,
    indent: usize,
}

/// Incremental builder for an outline tree.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    stack: Vec<StackEntry>,
    roots: Vec<SymbolNode>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node opened at `indent`.
    pub fn insert(&mut self, node: SymbolNode, indent: usize) {
        while self
            .stack
            .last()
            .map_or(false, |entry| entry.indent >= indent)
        {
            self.close_top();
        }
        self.stack.push(StackEntry { node, indent });
    }

    /// Number of nodes currently open.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Close everything still open and return the roots.
    pub fn finish(mut self) -> Vec<SymbolNode> {
        while !self.stack.is_empty() {
            self.close_top();
        }
        self.roots
    }

    fn close_top(&mut self) {
        let Some(entry) = self.stack.pop() else {
            return;
        };
        match self.stack.last_mut() {
            Some(parent) => parent.node.push_child(entry.node),
            None => self.roots.push(entry.node),
        }
    }
}
