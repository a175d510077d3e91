//! Domain Ports (Interfaces)
//!
//! Traits describing what the domain expects from caller-supplied items and
//! from the infrastructure layer.

pub mod attributes;
pub mod catalog_repository;

pub use attributes::{HasColor, HasName, HasPrice};
pub use catalog_repository::CatalogRepository;
