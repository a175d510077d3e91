//! Query Use Case
//!
//! Turns caller-supplied conditions into a specification and runs it over a
//! catalog.
//!
//! This module handles:
//! - Building one specification from colors, names and a price range
//! - Loading the catalog through the `CatalogRepository` port
//! - Filtering with any `Filter<Product>`

mod options;
mod result;
mod use_case;

pub use options::ProductQuery;
pub use result::QueryResult;
pub use use_case::QueryUseCase;
