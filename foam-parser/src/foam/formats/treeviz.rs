//! Treeviz formatter for outlines
//!
//! Treeviz prints one line per node, which makes an outline quick to scan. Nesting is drawn
//! with box connectors, two columns per level.
//!
//! So the format is :
//! <line number (optional)><connectors><icon><space><name>[: <detail>] (detail truncated to 30 characters)
//!
//! Example:
//!
//!   ├─ ⧉ FoamFile: header
//!   │ ├─ ◦ version: 2.0
//!   │ └─ ◆ object: controlDict
//!   ├─ ≔ application: icoFoam
//!   └─ § PISO: block
//!     └─ ≔ nCorrectors: 2
//!
//! Icons
//!     Struct: ▦
//!     ObjectBlock: §
//!     InterfaceBlock: ⇄
//!     ArrayList: ☰
//!     FileHeader: ⧉
//!     ConstantUnit: ⊡
//!     Property: ≔
//!     ClassLike: ◆
//!     ConstantLiteral: ◦

use super::registry::{FormatError, Formatter};
use crate::foam::ast::{SymbolKind, SymbolNode};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Get the icon for a symbol kind
pub fn get_icon(kind: SymbolKind) -> &'static str {
    match kind {
        SymbolKind::Struct => "▦",
        SymbolKind::ObjectBlock => "§",
        SymbolKind::InterfaceBlock => "⇄",
        SymbolKind::ArrayList => "☰",
        SymbolKind::FileHeader => "⧉",
        SymbolKind::ConstantUnit => "⊡",
        SymbolKind::Property => "≔",
        SymbolKind::ClassLike => "◆",
        SymbolKind::ConstantLiteral => "◦",
    }
}

fn label(node: &SymbolNode) -> String {
    if node.detail.is_empty() {
        node.name.clone()
    } else {
        format!("{}: {}", node.name, truncate(&node.detail, 30))
    }
}

fn format_node(
    node: &SymbolNode,
    prefix: &str,
    child_index: usize,
    child_count: usize,
    show_linum: bool,
    output: &mut String,
) {
    let is_last = child_index + 1 == child_count;
    let connector = if is_last { "└─" } else { "├─" };

    if show_linum {
        output.push_str(&format!("{:02} ", node.selection_anchor.start.line + 1));
    }
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(node.kind),
        label(node)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        format_node(child, &child_prefix, i, child_count, show_linum, output);
    }
}

pub fn to_treeviz_str(outline: &[SymbolNode]) -> String {
    to_treeviz_str_with_params(outline, false)
}

pub fn to_treeviz_str_with_params(outline: &[SymbolNode], show_linum: bool) -> String {
    let mut output = String::new();
    let count = outline.len();
    for (i, node) in outline.iter().enumerate() {
        format_node(node, "", i, count, show_linum, &mut output);
    }
    output
}

/// Formatter implementation for treeviz format
#[derive(Debug, Clone, Copy, Default)]
pub struct TreevizFormatter {
    pub show_line_numbers: bool,
}

impl TreevizFormatter {
    pub fn with_line_numbers() -> Self {
        Self {
            show_line_numbers: true,
        }
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, outline: &[SymbolNode]) -> Result<String, FormatError> {
        Ok(to_treeviz_str_with_params(outline, self.show_line_numbers))
    }

    fn description(&self) -> &str {
        "Visual tree representation with box connectors and Unicode icons"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foam::parsing::outline_from_str;

    #[test]
    fn test_nested_connectors() {
        let outline = outline_from_str("PISO\n{\n    nCorrectors 2;\n    pRefCell 0;\n}\nend 1;\n");
        let expected = "├─ § PISO: block\n│ ├─ ≔ nCorrectors: 2\n│ └─ ≔ pRefCell: 0\n└─ ≔ end: 1\n";
        assert_eq!(to_treeviz_str(&outline), expected);
    }

    #[test]
    fn test_line_numbers() {
        let outline = outline_from_str("\n\napplication icoFoam;\n");
        let rendered = to_treeviz_str_with_params(&outline, true);
        insta::assert_snapshot!(rendered.trim_end(), @"03 └─ ≔ application: icoFoam");
    }

    #[test]
    fn test_long_detail_is_truncated() {
        let outline = outline_from_str("notes aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa;\n");
        let rendered = to_treeviz_str(&outline);
        assert!(rendered.ends_with("aaa...\n"));
    }

    #[test]
    fn test_empty_outline() {
        assert_eq!(to_treeviz_str(&[]), "");
    }
}
