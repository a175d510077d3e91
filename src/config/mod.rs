//! Configuration module for Sift
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SIFT_*)
//! 3. Project config (./sift.toml)
//! 4. User config (~/.config/sift/config.toml)
//! 5. Built-in defaults (lowest priority)

pub(crate) mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::with_env_overrides;
pub use types::{CatalogConfig, Config, OutputConfig, OutputFormat, QueryConfig};
