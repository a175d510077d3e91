//! Match mode value object
//!
//! How a query combines its individual conditions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SiftError;

/// Combination rule for query conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Every condition must hold (AND)
    #[default]
    All,
    /// At least one condition must hold (OR)
    Any,
}

impl FromStr for MatchMode {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "and" => Ok(MatchMode::All),
            "any" | "or" => Ok(MatchMode::Any),
            _ => Err(SiftError::InvalidOption {
                option: "match mode",
                value: s.to_string(),
                expected: "all, any",
            }),
        }
    }
}

impl<'de> Deserialize<'de> for MatchMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchMode::All => write!(f, "all"),
            MatchMode::Any => write!(f, "any"),
        }
    }
}
