//! Color value object
//!
//! An opaque, comparable token. Sift never renders colors; it only compares
//! them, so there is no RGB payload.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SiftError;

/// Color of a catalog item
///
/// Catalog files and the command line accept the same tokens: both go
/// through [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
    Black,
    White,
    Gray,
}

impl Color {
    /// Every known color, in display order
    pub const ALL: [Color; 9] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Orange,
        Color::Purple,
        Color::Black,
        Color::White,
        Color::Gray,
    ];

    /// Lowercase token used in catalogs and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Purple => "purple",
            Color::Black => "black",
            Color::White => "white",
            Color::Gray => "gray",
        }
    }

    fn expected_tokens() -> String {
        Color::ALL
            .iter()
            .map(Color::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Color {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        let color = match token.as_str() {
            "grey" => Some(Color::Gray),
            other => Color::ALL.into_iter().find(|c| c.as_str() == other),
        };
        color.ok_or_else(|| SiftError::UnknownColor {
            token: s.to_string(),
            expected: Color::expected_tokens(),
        })
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
