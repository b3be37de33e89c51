//! Line level analysis
//!
//!     Dictionaries are read one physical line at a time. Before anything is classified, blank
//!     lines and comment lines are set aside: they never produce symbols. What remains is matched
//!     against a fixed, ordered list of line shapes, see
//!     [line_classification](line_classification).
//!
//!     Some shapes cannot be decided from the line alone. A bare identifier is a block opener only
//!     if an opening brace follows shortly after, and a `FoamFile` header may have its brace
//!     several blank or comment lines below. The bounded forward peeks live in
//!     [lookahead](lookahead).

pub mod comments;
pub mod line_classification;
pub mod lookahead;

pub use comments::{is_comment, is_skippable, BlockCommentState};
pub use line_classification::{classify_line, LineClass};
