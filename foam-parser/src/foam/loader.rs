//! Document loading utilities
//!
//! `DocumentLoader` reads dictionary text from files or strings and builds outlines from it.
//! The command line tool, the language server and the tests all go through it.
//!
//! # Example
//!
//! ```rust,ignore
//! use foam_parser::foam::loader::DocumentLoader;
//!
//! // From file
//! let outline = DocumentLoader::from_path("system/controlDict")?.outline();
//!
//! // From string
//! let outline = DocumentLoader::from_string("application icoFoam;\n").outline();
//! ```

use crate::foam::ast::SymbolNode;
use crate::foam::document::TextDocument;
use crate::foam::parsing::{parse_outline_with, ParseOptions};
use std::fs;
use std::path::{Path, PathBuf};

/// Error that can occur when loading documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderError {
    /// IO error when reading file
    IoError { path: PathBuf, message: String },
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::IoError { path, message } => {
                write!(f, "IO error reading {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for LoaderError {}

/// Loads dictionary text and builds outlines with a fixed set of options.
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    document: TextDocument,
    options: ParseOptions,
}

impl DocumentLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|err| LoaderError::IoError {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "loaded dictionary");
        Ok(Self::from_string(source))
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            document: TextDocument::new(source),
            options: ParseOptions::default(),
        }
    }

    /// Use `options` for every outline built by this loader.
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the outline of the loaded text
    pub fn outline(&self) -> Vec<SymbolNode> {
        parse_outline_with(&self.document, &self.options)
    }

    pub fn document(&self) -> &TextDocument {
        &self.document
    }

    /// Get a reference to the raw source string
    pub fn source_ref(&self) -> &str {
        self.document.text()
    }
}
