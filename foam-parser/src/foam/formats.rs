//! Output formats for outlines
//!
//!     - treeviz: one line per node with box connectors and an icon per kind.
//!     - tag: XML-like nesting with the name, detail and lines as attributes.
//!     - json, yaml: serde renderings of the root sequence.
//!
//!     Formats are looked up by name through the [FormatRegistry].

pub mod registry;
pub mod structured;
pub mod tag;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter, OutputFormat};
pub use structured::{JsonFormatter, YamlFormatter};
pub use tag::{serialize_outline as serialize_outline_tag, TagFormatter};
pub use treeviz::{to_treeviz_str, to_treeviz_str_with_params, TreevizFormatter};
