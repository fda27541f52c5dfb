//! Vendor footprint libraries: parse once, then look packages up by name.

pub mod error;
pub mod model;
mod reader;

use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

pub use error::LibraryError;
pub use model::{Package, PackageLayer, PadShape, Primitive};

/// A parsed footprint library. Packages keep their file order.
#[derive(Debug, Clone)]
pub struct Library {
    packages: IndexMap<String, Package>,
}

impl Library {
    /// Parse library XML from a string.
    pub fn parse(content: &str) -> Result<Self, LibraryError> {
        Ok(Self {
            packages: reader::parse_packages(content)?,
        })
    }

    /// Read and parse a library file.
    pub fn from_path(path: &Path) -> Result<Self, LibraryError> {
        let content = std::fs::read_to_string(path).map_err(|source| LibraryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let library = Self::parse(&content)?;
        debug!(
            path = %path.display(),
            packages = library.packages.len(),
            "loaded footprint library"
        );
        Ok(library)
    }

    /// Look up a package by name.
    pub fn package(&self, name: &str) -> Result<&Package, LibraryError> {
        self.packages
            .get(name)
            .ok_or_else(|| LibraryError::PackageNotFound {
                name: name.to_string(),
            })
    }

    pub fn packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
