//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod catalog;

pub use catalog::TomlCatalogRepository;
