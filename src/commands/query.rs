//! Query command handler
//!
//! Resolves the catalog path and output settings from flags, environment and
//! config files, then filters the catalog.

use anyhow::Result;
use tracing::debug;

use sift::application::ProductQuery;
use sift::config::{Config, OutputFormat};
use sift::presentation::cli::QueryArgs;
use sift::presentation::{create_query_use_case, create_renderer};

/// Execute the default query command
pub fn cmd_query(args: &QueryArgs, json: bool, ascii: bool, verbose: u8) -> Result<()> {
    let project_root = std::env::current_dir()?;
    let config = Config::load_or_default(Some(project_root.as_path()));

    let catalog_path = args
        .catalog
        .clone()
        .unwrap_or_else(|| config.catalog.path.clone());
    let format = if json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    let mut query = ProductQuery::new()
        .with_mode(args.mode().unwrap_or(config.query.mode))
        .with_negate(args.negate);
    for color in &args.colors {
        query = query.with_color(*color);
    }
    for name in &args.names {
        query = query.with_name(name.clone());
    }
    if let Some(range) = args.price_range()? {
        query = query.with_price(range);
    }

    debug!(catalog = %catalog_path.display(), ?format, "running query");
    let result = create_query_use_case().execute(&catalog_path, &query)?;

    let renderer = create_renderer(format, !ascii, verbose);
    println!("{}", renderer.render(&result).trim_end());

    Ok(())
}
