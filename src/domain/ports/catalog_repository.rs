//! CatalogRepository port - abstraction for reading catalogs
//!
//! Lets the application layer load a catalog without knowing the file format.
//! Read-only: results are never written back.

use std::path::Path;

use crate::domain::entities::Catalog;
use crate::domain::value_objects::ConfigWarning;
use crate::error::SiftResult;

/// Source of product catalogs
pub trait CatalogRepository {
    /// Load a catalog, collecting non-fatal warnings such as unknown keys
    fn load_with_warnings(&self, path: &Path) -> SiftResult<(Catalog, Vec<ConfigWarning>)>;

    /// Load a catalog, discarding warnings
    fn load(&self, path: &Path) -> SiftResult<Catalog> {
        let (catalog, _warnings) = self.load_with_warnings(path)?;
        Ok(catalog)
    }
}
