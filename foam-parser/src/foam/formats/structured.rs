//! JSON and YAML serialization of outlines
//!
//! Both formats are plain serde renderings of the root sequence. Empty `children` lists are
//! omitted.

use super::registry::{FormatError, Formatter};
use crate::foam::ast::SymbolNode;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, outline: &[SymbolNode]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(outline)
            .map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty printed JSON array of root symbols"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, outline: &[SymbolNode]) -> Result<String, FormatError> {
        serde_yaml::to_string(outline)
            .map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        "YAML sequence of root symbols"
    }
}
