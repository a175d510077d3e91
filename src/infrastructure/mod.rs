//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all file I/O.
//!
//! ## Structure
//!
//! - `repositories/` - Repository implementations (Catalog)

pub mod repositories;

pub use repositories::TomlCatalogRepository;
