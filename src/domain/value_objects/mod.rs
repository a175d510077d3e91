//! Domain Value Objects
//!
//! Immutable value types that leaf specifications and queries compare against.

mod color;
mod config_warning;
mod match_mode;
mod price_range;

pub use color::Color;
pub use config_warning::ConfigWarning;
pub use match_mode::MatchMode;
pub use price_range::PriceRange;
