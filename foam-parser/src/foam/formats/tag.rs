//! XML-like outline tag serialization
//!
//! ## Format
//!
//! - Symbol kind → tag name (kebab-case)
//! - Name, detail and covered lines → attributes
//! - Children → nested tags
//!
//! ## Example
//!
//! ```text
//! <outline>
//!   <object-block name="PISO" detail="block" lines="1-4">
//!     <property name="nCorrectors" detail="2" lines="3-3"/>
//!   </object-block>
//! </outline>
//! ```

use super::registry::{FormatError, Formatter};
use crate::foam::ast::{SymbolKind, SymbolNode};

/// Tag serializer that converts an outline to XML-like format
struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
        }
    }

    fn indent(&self) -> String {
        "  ".repeat(self.indent_level)
    }

    fn push_indent(&mut self, s: &str) {
        self.output.push_str(&self.indent());
        self.output.push_str(s);
    }

    fn serialize_node(&mut self, node: &SymbolNode) {
        let tag = to_tag_name(node.kind);
        let attributes = format!(
            "name=\"{}\" detail=\"{}\" lines=\"{}-{}\"",
            escape_xml(&node.name),
            escape_xml(&node.detail),
            node.span.start.line + 1,
            node.span.end.line + 1
        );

        if node.children.is_empty() {
            self.push_indent(&format!("<{} {}/>\n", tag, attributes));
        } else {
            self.push_indent(&format!("<{} {}>\n", tag, attributes));
            self.indent_level += 1;
            for child in &node.children {
                self.serialize_node(child);
            }
            self.indent_level -= 1;
            self.push_indent(&format!("</{}>\n", tag));
        }
    }
}

/// Tag name of a symbol kind (e.g., `ObjectBlock` → "object-block")
pub fn to_tag_name(kind: SymbolKind) -> &'static str {
    match kind {
        SymbolKind::Struct => "struct",
        SymbolKind::ObjectBlock => "object-block",
        SymbolKind::InterfaceBlock => "interface-block",
        SymbolKind::ArrayList => "array-list",
        SymbolKind::FileHeader => "file-header",
        SymbolKind::ConstantUnit => "constant-unit",
        SymbolKind::Property => "property",
        SymbolKind::ClassLike => "class-like",
        SymbolKind::ConstantLiteral => "constant-literal",
    }
}

/// Serialize an outline to tag format
pub fn serialize_outline(outline: &[SymbolNode]) -> String {
    let mut serializer = TagSerializer::new();
    serializer.indent_level = 1;
    for node in outline {
        serializer.serialize_node(node);
    }

    let mut result = String::from("<outline>\n");
    result.push_str(&serializer.output);
    result.push_str("</outline>");
    result
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
}

/// Formatter implementation for XML-like tag format
pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, outline: &[SymbolNode]) -> Result<String, FormatError> {
        Ok(serialize_outline(outline))
    }

    fn description(&self) -> &str {
        "XML-like tag format with hierarchical structure"
    }
}
