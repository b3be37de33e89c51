//! Testing utilities for outline assertions
//!
//!     Outline tests follow two rules:
//!
//!         1. Real dictionaries come from the curated files under `samples/`, loaded through
//!            [Samples](samples::Samples). Short inline strings are fine for single-construct
//!            cases; anything resembling a whole file belongs in a sample.
//!         2. Trees are checked with the fluent [assert_outline](fn@assert_outline) API rather
//!            than by indexing into `children` by hand.
//!
//! Rule 1: Samples
//!
//!     The OpenFOAM tools write dictionaries with a fixed banner, a `FoamFile` header and
//!     four-space indentation. Hand-typed approximations drift from that quickly, and a test
//!     tuned to a drifting input tunes the engine to the wrong thing.
//!
//!     ```rust,ignore
//!     use foam_parser::foam::testing::samples::Samples;
//!
//!     let outline = Samples::control_dict().outline();
//!     let source = Samples::block_mesh_dict().source();
//!     ```
//!
//! Rule 2: assert_outline
//!
//!     ```rust,ignore
//!     use foam_parser::foam::testing::assert_outline;
//!
//!     assert_outline(&outline)
//!         .item_count(3)
//!         .item(2, |node| {
//!             node.name("PISO")
//!                 .kind(SymbolKind::ObjectBlock)
//!                 .spans_lines(20, 24)
//!                 .child_count(2)
//!                 .child(0, |child| child.name("nCorrectors").detail("2"))
//!         });
//!     ```

mod outline_assertions;
pub mod samples;

pub use outline_assertions::{assert_outline, OutlineAssertion, SymbolAssertion};
pub use samples::{sample_path, Samples};
