use foam_parser::foam::ast::{Range, SymbolKind as FoamSymbolKind, SymbolNode};
use foam_parser::foam::document::TextDocument;
use foam_parser::foam::parsing::{parse_outline_with, ParseOptions};
use lsp_types::SymbolKind;

#[derive(Debug, Clone, PartialEq)]
pub struct FoamDocumentSymbol {
    pub name: String,
    pub detail: Option<String>,
    pub kind: SymbolKind,
    pub range: Range,
    pub selection_range: Range,
    pub children: Vec<FoamDocumentSymbol>,
}

pub fn collect_document_symbols(
    document: &TextDocument,
    options: &ParseOptions,
) -> Vec<FoamDocumentSymbol> {
    parse_outline_with(document, options)
        .iter()
        .map(to_foam_symbol)
        .collect()
}

pub fn lsp_symbol_kind(kind: FoamSymbolKind) -> SymbolKind {
    match kind {
        FoamSymbolKind::Struct => SymbolKind::STRUCT,
        FoamSymbolKind::ObjectBlock => SymbolKind::OBJECT,
        FoamSymbolKind::InterfaceBlock => SymbolKind::INTERFACE,
        FoamSymbolKind::ArrayList => SymbolKind::ARRAY,
        FoamSymbolKind::FileHeader => SymbolKind::FILE,
        FoamSymbolKind::ConstantUnit => SymbolKind::CONSTANT,
        FoamSymbolKind::Property => SymbolKind::PROPERTY,
        FoamSymbolKind::ClassLike => SymbolKind::CLASS,
        FoamSymbolKind::ConstantLiteral => SymbolKind::STRING,
    }
}

fn to_foam_symbol(node: &SymbolNode) -> FoamDocumentSymbol {
    FoamDocumentSymbol {
        name: node.name.clone(),
        detail: if node.detail.is_empty() {
            None
        } else {
            Some(node.detail.clone())
        },
        kind: lsp_symbol_kind(node.kind),
        range: node.span,
        selection_range: node.selection_anchor,
        children: node.children.iter().map(to_foam_symbol).collect(),
    }
}
