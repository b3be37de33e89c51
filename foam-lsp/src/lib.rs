//! Language Server Protocol (LSP) implementation for OpenFOAM dictionaries
//!
//!     This crate hosts the outline engine from foam-parser behind tower-lsp so that any
//!     LSP-compatible editor (VSCode, Neovim, Emacs, etc.) gets an outline view and code
//!     folding for `controlDict`, `fvSchemes`, `blockMeshDict`, field files and friends.
//!
//! Feature Set
//!
//!     Dictionaries are configuration, not programs, so the server stays small:
//!
//!         1. Document Symbols (textDocument/documentSymbol):
//!             - Hierarchical outline of blocks, lists, unit constants and key/value entries
//!             - The FoamFile header and its keywords
//!
//!         2. Folding Ranges (textDocument/foldingRange):
//!             - One region per outline node spanning more than one line
//!             - Can be turned off with `lsp.folding_ranges = false` in `foam.toml`
//!
//! Architecture
//!
//!     The protocol layer ([`server`]) owns the open documents and the capability negotiation.
//!     Everything that looks at text lives in [`features`] and is reached through the
//!     [`server::FeatureProvider`] trait, so the server can be tested against a mock provider
//!     without parsing anything.
//!
//!     Documents are kept as full-text snapshots (full sync). Every request re-runs the outline
//!     engine on the snapshot, which is cheap for files of dictionary size.
//!
//! Logging
//!
//!     Library code logs through `tracing`. The `foam-lsp` binary installs a
//!     `tracing-subscriber` writing to stderr, since stdout carries the protocol.

pub mod features;
pub mod server;

pub use server::FoamLanguageServer;
