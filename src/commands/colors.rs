//! Colors command handler
//!
//! Lists the color tokens accepted in catalogs and by `--color`.

use anyhow::Result;

use sift::domain::value_objects::Color;

/// Execute the colors command
pub fn cmd_colors(json: bool) -> Result<()> {
    if json {
        let tokens: Vec<&str> = Color::ALL.iter().map(Color::as_str).collect();
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else {
        for color in Color::ALL {
            println!("{}", color);
        }
    }
    Ok(())
}
