//! Query Result

use crate::domain::entities::Product;
use crate::domain::value_objects::ConfigWarning;

/// Result of a query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    /// Human-readable description of the query
    pub query: String,
    /// Number of products in the catalog
    pub total: usize,
    /// Matching products in catalog order
    pub matched: Vec<Product>,
    /// Non-fatal warnings raised while loading the catalog
    pub warnings: Vec<ConfigWarning>,
}

impl QueryResult {
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn has_matches(&self) -> bool {
        !self.matched.is_empty()
    }
}
