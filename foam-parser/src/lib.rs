//! # foam-parser
//!
//! Outline extraction for OpenFOAM dictionary files.
//!
//! File Layout
//!
//!     src/foam
//!       ├── ast          Symbol nodes, kinds, positions and ranges
//!       ├── document     The read-only line view the engine consumes
//!       ├── lexing       Per-line classification and comment handling
//!       ├── parsing      Span resolution, tree assembly and the driver loop
//!       ├── loader       Reading dictionaries from files and strings
//!       ├── formats      Rendering outlines as treeviz, tag, json and yaml
//!       └── testing      Sample dictionaries and fluent outline assertions
//!
//!     The engine is a pure function from a document snapshot to a sequence of root symbols.
//!     Everything that hosts it (the language server, the command line tool) lives in its
//!     own crate and talks to it through [`foam::document::LineSource`].

#![allow(rustdoc::invalid_html_tags)]

pub mod foam;

pub use foam::ast::{Position, Range, SymbolKind, SymbolNode};
pub use foam::document::{LineSource, TextDocument};
pub use foam::formats::{FormatError, FormatRegistry, OutputFormat};
pub use foam::loader::{DocumentLoader, LoaderError};
pub use foam::parsing::{outline_from_str, parse_outline, parse_outline_with, ParseOptions};
