use foam_parser::foam::ast::{flatten, SymbolNode};
use foam_parser::foam::document::TextDocument;
use foam_parser::foam::parsing::{parse_outline_with, ParseOptions};
use lsp_types::FoldingRangeKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoamFoldingRange {
    pub start_line: u32,
    pub start_character: Option<u32>,
    pub end_line: u32,
    pub end_character: Option<u32>,
    pub kind: Option<FoldingRangeKind>,
}

pub fn folding_ranges(document: &TextDocument, options: &ParseOptions) -> Vec<FoamFoldingRange> {
    outline_folding_ranges(&parse_outline_with(document, options))
}

/// One region per node whose span covers more than one line, in document order.
pub fn outline_folding_ranges(outline: &[SymbolNode]) -> Vec<FoamFoldingRange> {
    flatten(outline)
        .filter(|node| node.span.end.line > node.span.start.line)
        .map(|node| FoamFoldingRange {
            start_line: node.span.start.line as u32,
            start_character: Some(node.span.start.column as u32),
            end_line: node.span.end.line as u32,
            end_character: Some(node.span.end.column as u32),
            kind: Some(FoldingRangeKind::Region),
        })
        .collect()
}
