//! Query Use Case
//!
//! Loads a catalog and filters it with the specification a `ProductQuery`
//! builds.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::domain::entities::{Catalog, Product};
use crate::domain::ports::CatalogRepository;
use crate::domain::services::Filter;
use crate::error::SiftResult;

use super::options::ProductQuery;
use super::result::QueryResult;

/// Query use case - catalog in, matching products out
pub struct QueryUseCase<CR, F>
where
    CR: CatalogRepository,
    F: Filter<Product>,
{
    catalog_repo: CR,
    filter: F,
}

impl<CR, F> QueryUseCase<CR, F>
where
    CR: CatalogRepository,
    F: Filter<Product>,
{
    /// Create a new query use case
    pub fn new(catalog_repo: CR, filter: F) -> Self {
        Self {
            catalog_repo,
            filter,
        }
    }

    /// Load the catalog at `catalog_path` and run `query` against it
    pub fn execute(&self, catalog_path: &Path, query: &ProductQuery) -> SiftResult<QueryResult> {
        let (catalog, warnings) = self.catalog_repo.load_with_warnings(catalog_path)?;
        for warning in &warnings {
            warn!("{}", warning);
        }

        let mut result = self.run(&catalog, query);
        result.warnings = warnings;
        Ok(result)
    }

    /// Run `query` against an already loaded catalog
    pub fn run(&self, catalog: &Catalog, query: &ProductQuery) -> QueryResult {
        debug!(query = %query, conditions = query.condition_count(), "building specification");
        let spec = query.to_specification();

        let matched = self.filter.filter_cloned(catalog.products(), &*spec);
        info!(
            matched = matched.len(),
            total = catalog.len(),
            "query complete"
        );

        QueryResult {
            query: query.to_string(),
            total: catalog.len(),
            matched,
            warnings: Vec::new(),
        }
    }
}
