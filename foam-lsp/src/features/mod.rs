pub mod document_symbols;
pub mod folding_ranges;
