//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Running `sift` without a subcommand filters the catalog
//! - Query flags are repeatable; several `--color` values are alternatives,
//!   every other flag adds a condition
//! - Global flags (--json, --verbose) are inherited by all subcommands

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::value_objects::{Color, MatchMode, PriceRange};
use crate::error::SiftResult;

/// Sift - filter product catalogs with composable specifications
#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use ASCII icons instead of unicode
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(flatten)]
    pub query: QueryArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Conditions for the default query command
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Catalog file (defaults to config, then catalog.toml)
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Keep products of this color (repeatable)
    #[arg(long = "color", value_name = "COLOR")]
    pub colors: Vec<Color>,

    /// Keep products whose name contains this text, case-sensitive (repeatable)
    #[arg(short, long = "name", value_name = "TEXT")]
    pub names: Vec<String>,

    /// Minimum price in minor units (inclusive)
    #[arg(long, value_name = "AMOUNT")]
    pub min_price: Option<u32>,

    /// Maximum price in minor units (inclusive)
    #[arg(long, value_name = "AMOUNT")]
    pub max_price: Option<u32>,

    /// Match products satisfying any condition instead of all
    #[arg(long, conflicts_with = "all")]
    pub any: bool,

    /// Match products satisfying every condition (default)
    #[arg(long)]
    pub all: bool,

    /// Invert the query
    #[arg(long = "not")]
    pub negate: bool,
}

impl QueryArgs {
    /// Match mode chosen on the command line, if any
    pub fn mode(&self) -> Option<MatchMode> {
        match (self.any, self.all) {
            (true, _) => Some(MatchMode::Any),
            (_, true) => Some(MatchMode::All),
            _ => None,
        }
    }

    /// Price range from `--min-price`/`--max-price`, if either is set
    pub fn price_range(&self) -> SiftResult<Option<PriceRange>> {
        match (self.min_price, self.max_price) {
            (None, None) => Ok(None),
            (min, max) => PriceRange::new(min, max).map(Some),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the color tokens catalogs and --color accept
    Colors,
}
