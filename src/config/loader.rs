//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::value_objects::ConfigWarning;
use crate::error::{SiftError, SiftResult};

use super::types::Config;

/// Keys that may appear in `sift.toml`
const CONFIG_KEYS: &[&str] = &["catalog", "path", "query", "mode", "output", "format"];

/// Parse TOML, collecting every key serde ignored as a [`ConfigWarning`].
///
/// Suggestions for unknown keys are drawn from `known_keys`.
pub(crate) fn parse_with_warnings<T: DeserializeOwned>(
    content: &str,
    path: &Path,
    known_keys: &[&str],
) -> Result<(T, Vec<ConfigWarning>), toml::de::Error> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let value: T = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key, known_keys),
            }
        })
        .collect();

    Ok((value, warnings))
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SiftResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    parse_with_warnings(&content, path, CONFIG_KEYS).map_err(|e| SiftError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let mut candidates = Vec::new();
    if let Some(root) = project_root {
        candidates.push(root.join("sift.toml"));
    }
    if let Some(user_config_dir) = dirs_config_dir() {
        candidates.push(user_config_dir.join("sift/config.toml"));
    }

    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, warnings)) => {
                for warning in &warnings {
                    warn!("{}", warning);
                }
                debug!(path = %candidate.display(), "loaded config");
                return with_env_overrides(config);
            }
            Err(e) => warn!("ignoring config: {}", e),
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (SIFT_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // SIFT_CATALOG
    if let Ok(path) = std::env::var("SIFT_CATALOG") {
        if !path.trim().is_empty() {
            config.catalog.path = PathBuf::from(path);
        }
    }

    // SIFT_FORMAT
    if let Ok(format) = std::env::var("SIFT_FORMAT") {
        match format.parse() {
            Ok(format) => config.output.format = format,
            Err(e) => warn!("ignoring SIFT_FORMAT: {}", e),
        }
    }

    // SIFT_MATCH
    if let Ok(mode) = std::env::var("SIFT_MATCH") {
        match mode.parse() {
            Ok(mode) => config.query.mode = mode,
            Err(e) => warn!("ignoring SIFT_MATCH: {}", e),
        }
    }

    config
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .or_else(dirs::config_dir)
}

/// First line assigning `key` (`key = ...`), 1-indexed
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str, known_keys: &[&str]) -> Option<String> {
    known_keys
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
