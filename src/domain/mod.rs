//! Domain Layer
//!
//! The core of Sift - specifications and the filter that applies them, with
//! no I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Catalog items (Product)
//! - `value_objects/` - Immutable value types (Color, PriceRange)
//! - `specifications/` - Leaf and composite predicates
//! - `services/` - The Filter
//! - `ports/` - Attribute traits items implement for the leaves
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system
//! 2. **Pure Functions** - Specifications and filters are stateless
//! 3. **Open/Closed** - New conditions are new types; nothing here changes

pub mod entities;
pub mod ports;
pub mod services;
pub mod specifications;
pub mod value_objects;
