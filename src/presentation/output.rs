//! Output Rendering
//!
//! Renders query results as text or JSON. Renderers return the rendered
//! string; the caller decides where it goes.

use std::fmt::Write;

use crate::application::QueryResult;

pub use crate::config::OutputFormat;

/// Icons for output rendering
struct Icons {
    check: &'static str,
    none: &'static str,
    item: &'static str,
    warn: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            none: "○",
            item: "→",
            warn: "⚠",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            none: "[ ]",
            item: "-",
            warn: "[!]",
        }
    }
}

/// Trait for rendering query results
pub trait QueryResultRenderer {
    /// Render the query result
    fn render(&self, result: &QueryResult) -> String;
}

/// Text renderer for query results
pub struct TextRenderer {
    /// Whether to use unicode
    pub unicode: bool,
    /// Verbosity level
    pub verbose: u8,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            unicode: true,
            verbose: 0,
        }
    }
}

impl QueryResultRenderer for TextRenderer {
    fn render(&self, result: &QueryResult) -> String {
        let icons = if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        };

        let mut out = String::new();
        let status = if result.has_matches() {
            icons.check
        } else {
            icons.none
        };
        let noun = if result.total == 1 { "product" } else { "products" };
        let _ = writeln!(
            out,
            "{} {} of {} {} match",
            status,
            result.matched_count(),
            result.total,
            noun
        );
        if self.verbose > 0 {
            let _ = writeln!(out, "  Query: {}", result.query);
        }

        if result.has_matches() {
            out.push('\n');
            for product in &result.matched {
                let _ = writeln!(out, "  {} {}", icons.item, product);
            }
        }

        if !result.warnings.is_empty() {
            out.push('\n');
            let _ = writeln!(out, "  Warnings ({}):", result.warnings.len());
            for warning in &result.warnings {
                let _ = writeln!(out, "    {} {}", icons.warn, warning);
            }
        }

        out
    }
}

/// JSON renderer for query results
pub struct JsonRenderer;

impl QueryResultRenderer for JsonRenderer {
    fn render(&self, result: &QueryResult) -> String {
        let json = serde_json::json!({
            "query": result.query,
            "total": result.total,
            "matched": result.matched_count(),
            "products": result.matched,
            "warnings": result.warnings.iter().map(ToString::to_string).collect::<Vec<_>>(),
        });

        serde_json::to_string_pretty(&json).unwrap_or_default()
    }
}

/// Create a renderer based on format
pub fn create_renderer(
    format: OutputFormat,
    unicode: bool,
    verbose: u8,
) -> Box<dyn QueryResultRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { unicode, verbose }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
