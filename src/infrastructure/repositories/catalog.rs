//! TOML Catalog Repository
//!
//! Implements the CatalogRepository port by reading a TOML file with a
//! `[[products]]` array.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::loader::parse_with_warnings;
use crate::domain::entities::Catalog;
use crate::domain::ports::CatalogRepository;
use crate::domain::value_objects::ConfigWarning;
use crate::error::{SiftError, SiftResult};

/// Keys that may appear in a catalog file
const CATALOG_KEYS: &[&str] = &["products", "name", "color", "price"];

/// TOML-based catalog repository
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlCatalogRepository;

impl TomlCatalogRepository {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogRepository for TomlCatalogRepository {
    fn load_with_warnings(&self, path: &Path) -> SiftResult<(Catalog, Vec<ConfigWarning>)> {
        if !path.exists() {
            return Err(SiftError::CatalogNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let (catalog, warnings): (Catalog, _) = parse_with_warnings(&content, path, CATALOG_KEYS)
            .map_err(|e| SiftError::InvalidCatalog {
                file: path.to_path_buf(),
                message: e.to_string(),
            })?;

        debug!(
            path = %path.display(),
            products = catalog.len(),
            warnings = warnings.len(),
            "loaded catalog"
        );
        Ok((catalog, warnings))
    }
}
