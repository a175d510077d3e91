//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::QueryUseCase;
use crate::domain::services::SpecFilter;
use crate::infrastructure::TomlCatalogRepository;

/// Type alias for the concrete QueryUseCase with all dependencies
pub type ConcreteQueryUseCase = QueryUseCase<TomlCatalogRepository, SpecFilter>;

/// Create a query use case reading TOML catalogs
pub fn create_query_use_case() -> ConcreteQueryUseCase {
    QueryUseCase::new(TomlCatalogRepository::new(), SpecFilter::new())
}
