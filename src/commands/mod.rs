//! Command handlers for the `sift` binary

mod colors;
mod query;

pub use colors::cmd_colors;
pub use query::cmd_query;
