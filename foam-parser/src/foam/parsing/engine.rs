//! Outline engine
//!
//!     Walks the document once, line by line. Each content line is classified; a line that
//!     starts a construct becomes a node whose span is resolved on the spot and which is then
//!     handed to the [TreeBuilder](super::TreeBuilder) together with the line's indent.
//!
//!     Span resolution per class:
//!         - reserved and named blocks: matching `}`.
//!         - named block without `{` on its line: only a block if a `{` starts one of the next
//!           [brace_lookahead](super::ParseOptions::brace_lookahead) content lines.
//!         - list: matching `)`.
//!         - header: matching `}`, the brace may sit on a following line after blanks or
//!           comments. With no brace ahead the header covers its own line.
//!         - everything else: the line itself.
//!
//!     A construct whose opener is on its own line starts the scan with one delimiter open,
//!     even when the line also closes it, so `p { solver PCG; }` extends to the next unmatched
//!     `}` or to the end of the document.

use super::block_span::{block_end, resolve_block_end, Delimiters};
use super::tree_builder::TreeBuilder;
use super::ParseOptions;
use crate::foam::ast::{Range, SymbolNode};
use crate::foam::document::{Line, LineSource};
use crate::foam::lexing::comments::{is_skippable, BlockCommentState};
use crate::foam::lexing::line_classification::{classify_line, LineClass};
use crate::foam::lexing::lookahead::{brace_follows, next_content_line};

/// Build the outline of a document.
pub fn parse_outline_with<D>(doc: &D, options: &ParseOptions) -> Vec<SymbolNode>
where
    D: LineSource + ?Sized,
{
    let mut builder = TreeBuilder::new();
    let mut comments = BlockCommentState::new();
    let mut produced = 0usize;

    for index in 0..doc.line_count() {
        let Some(line) = doc.line(index) else {
            break;
        };
        let trimmed = line.trimmed();

        if options.skip_block_comments && comments.consume(trimmed) {
            continue;
        }
        if is_skippable(trimmed) {
            continue;
        }
        let Some(class) = classify_line(trimmed) else {
            continue;
        };
        let Some(end) = construct_end(doc, &line, &class, options) else {
            continue;
        };

        let span = match doc.line(end) {
            Some(end_line) => Range::new(line.range.start, end_line.range.end),
            None => line.range,
        };
        let node = SymbolNode::new(class.name(), class.detail(), class.kind(), span, line.range);
        tracing::trace!(
            line = index,
            kind = %node.kind,
            name = %node.name,
            end,
            "outline node"
        );
        builder.insert(node, line.indent);
        produced += 1;
    }

    let roots = builder.finish();
    tracing::debug!(
        lines = doc.line_count(),
        nodes = produced,
        roots = roots.len(),
        "outline built"
    );
    roots
}

/// Line index where the construct started by `line` ends, or `None` when the line turns out
/// not to start one.
fn construct_end<D>(
    doc: &D,
    line: &Line<'_>,
    class: &LineClass<'_>,
    options: &ParseOptions,
) -> Option<usize>
where
    D: LineSource + ?Sized,
{
    let trimmed = line.trimmed();
    match class {
        LineClass::ReservedBlock { .. } => Some(block_end(doc, line, Delimiters::BRACES)),
        LineClass::NamedBlock { .. } => {
            let lookahead = options.brace_lookahead;
            if !trimmed.contains('{') && !brace_follows(doc, line.index + 1, lookahead) {
                return None;
            }
            Some(block_end(doc, line, Delimiters::BRACES))
        }
        LineClass::List { .. } => Some(block_end(doc, line, Delimiters::PARENS)),
        LineClass::Header => {
            if trimmed.contains('{') {
                return Some(block_end(doc, line, Delimiters::BRACES));
            }
            match next_content_line(doc, line.index + 1) {
                Some(next) if starts_with(doc, next, '{') => {
                    Some(resolve_block_end(doc, next, Delimiters::BRACES, 0))
                }
                _ => Some(line.index),
            }
        }
        LineClass::UnitAssignment { .. } | LineClass::Attribute { .. } => Some(line.index),
    }
}

fn starts_with<D>(doc: &D, index: usize, opener: char) -> bool
where
    D: LineSource + ?Sized,
{
    doc.line(index)
        .map_or(false, |line| line.trimmed().starts_with(opener))
}
