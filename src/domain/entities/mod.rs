//! Domain Entities
//!
//! - `Product` - A catalog entry (name, color, optional price)
//! - `Catalog` - The ordered product list a query filters

mod catalog;
mod product;

pub use catalog::Catalog;
pub use product::Product;
