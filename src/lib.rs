//! Sift - filter product catalogs with composable specifications
//!
//! A specification is a reusable predicate over catalog items. Leaf
//! specifications test one attribute (color, name, price); composites combine
//! other specifications with AND, OR and NOT. A single [`Filter`] applies any
//! of them, so new selection criteria never require touching the filter.
//!
//! ```
//! use sift::{by_color, by_name, Color, Filter, Product, SpecFilter, SpecificationExt};
//!
//! let products = vec![
//!     Product::new("Red Shirt", Color::Red),
//!     Product::new("Blue Shirt", Color::Blue),
//!     Product::new("Green Hat", Color::Green),
//! ];
//!
//! let spec = by_color(Color::Red).and(by_name("Shirt"));
//! let matched = SpecFilter.filter(&products, &spec);
//! assert_eq!(matched, vec![&products[0]]);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{ProductQuery, QueryResult, QueryUseCase};
pub use config::{Config, OutputFormat};
pub use domain::entities::{Catalog, Product};
pub use domain::ports::{CatalogRepository, HasColor, HasName, HasPrice};
pub use domain::services::{Filter, SpecFilter};
pub use domain::specifications::{
    all_of, and, any_of, by_color, by_name, by_price, from_fn, not, or, BoxedSpecification,
    SharedSpecification, Specification, SpecificationExt,
};
pub use domain::value_objects::{Color, MatchMode, PriceRange};
pub use error::{SiftError, SiftResult};
pub use infrastructure::TomlCatalogRepository;
