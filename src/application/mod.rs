//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, specifications, services, ports)
//! - Does NOT contain filtering rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `QueryUseCase` - Load a catalog, build a specification, filter

pub mod query;

pub use query::{ProductQuery, QueryResult, QueryUseCase};
