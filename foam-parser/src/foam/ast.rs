//! Outline node definitions
//!
//!     The outline is deliberately shallow compared to a real syntax tree: a node records what a
//!     line introduces (a block, a list, a header, an assignment), the lines it covers and the
//!     nodes nested under it. Values are kept as the literal text that followed the name, there
//!     is no expression model.
//!
//! Ranges
//!
//!     Every node carries two ranges:
//!
//!         - span: all the lines the construct occupies, from column 0 of its defining line to
//!           the end of the line where it closes.
//!         - selection_anchor: the defining line only. Editors place the cursor here when a
//!           symbol is picked from a list.
//!
//!     The anchor is always contained in the span. Positions are zero based, line and column.
//!
//! Kinds
//!
//!     See [SymbolKind](symbol::SymbolKind). The kind encodes the semantic role of the line, not
//!     how a host should draw it; hosts map kinds onto their own vocabulary (the language server
//!     maps them onto LSP symbol kinds).

pub mod range;
pub mod symbol;

pub use range::{Position, Range};
pub use symbol::{flatten, SymbolKind, SymbolNode};
