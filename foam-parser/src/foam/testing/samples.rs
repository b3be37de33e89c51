//! Curated sample dictionaries
//!
//!     The files under `foam-parser/samples/` are dictionaries as the OpenFOAM tutorials ship
//!     them (the cavity case, mostly). Tests reach them by name:
//!
//!         - `Samples::control_dict()`: `system/controlDict`
//!         - `Samples::fv_solution()`: `system/fvSolution`
//!         - `Samples::block_mesh_dict()`: `system/blockMeshDict`
//!         - `Samples::transport_properties()`: `constant/transportProperties`
//!         - `Samples::velocity_field()`: `0/U`
//!         - `Samples::get("name")`: any other file in the directory

use crate::foam::ast::SymbolNode;
use crate::foam::document::TextDocument;
use crate::foam::parsing::{parse_outline_with, ParseOptions};
use std::fs;
use std::path::{Path, PathBuf};

/// Path of a file in the samples directory.
pub fn sample_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("samples").join(name)
}

/// Entry point for loading samples
pub struct Samples;

impl Samples {
    pub fn get(name: &str) -> SampleLoader {
        SampleLoader {
            path: sample_path(name),
        }
    }

    pub fn control_dict() -> SampleLoader {
        Self::get("controlDict")
    }

    pub fn fv_solution() -> SampleLoader {
        Self::get("fvSolution")
    }

    pub fn block_mesh_dict() -> SampleLoader {
        Self::get("blockMeshDict")
    }

    pub fn transport_properties() -> SampleLoader {
        Self::get("transportProperties")
    }

    pub fn velocity_field() -> SampleLoader {
        Self::get("U")
    }

    /// Every sample file, sorted by name
    pub fn all() -> Vec<SampleLoader> {
        let dir = sample_path("");
        let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", dir.display(), e))
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| path.is_file())
            .collect();
        paths.sort();
        paths.into_iter().map(|path| SampleLoader { path }).collect()
    }
}

/// Loader for a single sample file
#[derive(Debug, Clone)]
pub struct SampleLoader {
    path: PathBuf,
}

impl SampleLoader {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw source string
    pub fn source(&self) -> String {
        fs::read_to_string(&self.path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", self.path.display(), e))
    }

    pub fn document(&self) -> TextDocument {
        TextDocument::new(self.source())
    }

    /// Outline with the default options
    pub fn outline(&self) -> Vec<SymbolNode> {
        self.outline_with(&ParseOptions::default())
    }

    pub fn outline_with(&self, options: &ParseOptions) -> Vec<SymbolNode> {
        parse_outline_with(&self.document(), options)
    }
}
