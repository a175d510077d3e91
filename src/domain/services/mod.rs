//! Domain Services
//!
//! Pure logic that operates on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod filter;

pub use filter::{Filter, SpecFilter};
