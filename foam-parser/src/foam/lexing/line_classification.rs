//! Line Classification
//!
//!     Decides which construct, if any, a trimmed line starts. The shapes are tried in a fixed
//!     order and the first one that matches wins:
//!
//!         1. reserved-block: `boundary`, `faces`, `points`, `edges`, `internalField` (any case)
//!            followed by `{`, `;` or the end of the line. A line ending in `;` without a `{` is
//!            a plain statement and is left to the later shapes.
//!         2. named-block: an identifier followed by `{` or the end of the line.
//!         3. list: an identifier immediately followed by `(` closing the line.
//!         4. header: the `FoamFile` keyword.
//!         5. unit-assignment: `name [dimensions] value;`
//!         6. attribute: `name value;`
//!
//!     Anything else (stray braces, list rows, `#include` directives, macro expansions) yields
//!     no class. Classification never fails.
//!
//!     Whether a named-block line really opens a block is only known once the following lines
//!     are inspected; that is the engine's job, see [lookahead](crate::foam::lexing::lookahead).

use crate::foam::ast::SymbolKind;
use once_cell::sync::Lazy;
use regex::Regex;

/// Names that introduce mesh and field structure.
pub const RESERVED_STRUCT_NAMES: &[&str] = &["boundary", "faces", "points", "edges", "internalField"];

/// Patch names conventionally used for boundary conditions.
pub const PATCH_NAMES: &[&str] = &["frontAndBack", "inlet", "outlet", "walls", "symmetry"];

/// Keyword of the dictionary header block.
pub const HEADER_KEYWORD: &str = "FoamFile";

static RESERVED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(edges|faces|points|internalField|boundary)\s*(?:\{|;|$)").unwrap()
});

static NAMED_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Za-z]\w*)\s*(?:\{|$)").unwrap());

static LIST_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Za-z]\w*)\($").unwrap());

static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^FoamFile\s*(?:\{.*)?$").unwrap());

// The optional second word covers the `nu nu [...] value;` spelling of older dictionaries.
static UNIT_ASSIGNMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z_][\w.]*)(?:\s+[A-Za-z_][\w.]*)?\s*\[([^\]]*)\][^{}]*;").unwrap()
});

static ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z0-9_.]+)\s+([^{};\s][^{}]*?)\s*;").unwrap());

/// The construct a line starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    ReservedBlock { name: &'a str },
    NamedBlock { name: &'a str },
    List { name: &'a str },
    Header,
    UnitAssignment { name: &'a str, unit: &'a str },
    Attribute { name: &'a str, value: &'a str },
}

impl<'a> LineClass<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            LineClass::ReservedBlock { name }
            | LineClass::NamedBlock { name }
            | LineClass::List { name }
            | LineClass::UnitAssignment { name, .. }
            | LineClass::Attribute { name, .. } => name,
            LineClass::Header => HEADER_KEYWORD,
        }
    }

    pub fn kind(&self) -> SymbolKind {
        match self {
            LineClass::ReservedBlock { .. } => SymbolKind::Struct,
            LineClass::NamedBlock { name } => named_block_kind(name),
            LineClass::List { .. } => SymbolKind::ArrayList,
            LineClass::Header => SymbolKind::FileHeader,
            LineClass::UnitAssignment { .. } => SymbolKind::ConstantUnit,
            LineClass::Attribute { name, .. } => attribute_kind(name),
        }
    }

    pub fn detail(&self) -> &'a str {
        match self {
            LineClass::ReservedBlock { name } => name,
            LineClass::NamedBlock { name } => match named_block_kind(name) {
                SymbolKind::Struct => name,
                SymbolKind::InterfaceBlock => "boundary",
                _ => "block",
            },
            LineClass::List { .. } => "list",
            LineClass::Header => "header",
            LineClass::UnitAssignment { unit, .. } => unit.trim(),
            LineClass::Attribute { value, .. } => value.trim(),
        }
    }
}

fn named_block_kind(name: &str) -> SymbolKind {
    if RESERVED_STRUCT_NAMES.contains(&name) {
        SymbolKind::Struct
    } else if PATCH_NAMES.contains(&name) {
        SymbolKind::InterfaceBlock
    } else {
        SymbolKind::ObjectBlock
    }
}

fn attribute_kind(name: &str) -> SymbolKind {
    match name {
        "class" | "object" => SymbolKind::ClassLike,
        "version" | "format" => SymbolKind::ConstantLiteral,
        "location" => SymbolKind::FileHeader,
        _ => SymbolKind::Property,
    }
}

/// Classify one trimmed, non-blank, non-comment line.
pub fn classify_line(trimmed: &str) -> Option<LineClass<'_>> {
    if let Some(caps) = RESERVED_BLOCK.captures(trimmed) {
        let terminated = trimmed.ends_with(';') && !trimmed.contains('{');
        if !terminated {
            let name = caps.get(1).map_or("", |m| m.as_str());
            return Some(LineClass::ReservedBlock { name });
        }
    }

    if let Some(caps) = NAMED_BLOCK.captures(trimmed) {
        let name = caps.get(1).map_or("", |m| m.as_str());
        // The header keyword has its own shape
        if name != HEADER_KEYWORD {
            return Some(LineClass::NamedBlock { name });
        }
    }

    if let Some(caps) = LIST_OPEN.captures(trimmed) {
        let name = caps.get(1).map_or("", |m| m.as_str());
        return Some(LineClass::List { name });
    }

    if HEADER.is_match(trimmed) {
        return Some(LineClass::Header);
    }

    if let Some(caps) = UNIT_ASSIGNMENT.captures(trimmed) {
        let name = caps.get(1).map_or("", |m| m.as_str());
        let unit = caps.get(2).map_or("", |m| m.as_str());
        return Some(LineClass::UnitAssignment { name, unit });
    }

    if let Some(caps) = ATTRIBUTE.captures(trimmed) {
        let name = caps.get(1).map_or("", |m| m.as_str());
        let value = caps.get(2).map_or("", |m| m.as_str());
        return Some(LineClass::Attribute { name, value });
    }

    None
}
