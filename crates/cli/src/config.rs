// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles pathsel.toml lookup, parsing with version validation, and
//! unknown key warnings.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::absolute::to_absolute;
use crate::error::{Error, Result};
use crate::pattern::split_pattern_list;

/// Config file name searched for by [`locate`].
pub const CONFIG_FILE: &str = "pathsel.toml";

/// Supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Entry marking a repository root; upward lookup does not pass it.
const REPO_MARKER: &str = ".git";

const KNOWN_KEYS: &[&str] = &["version", "resolve"];

const KNOWN_RESOLVE_KEYS: &[&str] = &["base", "exclude"];

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    resolve: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Defaults for pattern resolution.
    pub resolve: ResolveConfig,
}

/// `[resolve]` section.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResolveConfig {
    /// Default base directory, relative to the config file's directory.
    pub base: Option<String>,

    /// Exclusion patterns applied to every resolve and copy.
    pub exclude: Vec<String>,
}

impl ResolveConfig {
    /// The configured base made absolute against `config_dir`.
    pub fn base_directory(&self, config_dir: &Path) -> Result<Option<String>> {
        let Some(base) = self.base.as_deref() else {
            return Ok(None);
        };
        let dir = config_dir.to_string_lossy();
        to_absolute(base, Some(dir.as_ref())).map(|b| Some(b).filter(|b| !b.is_empty()))
    }
}

/// The config that applies to a run in `cwd`, and the directory holding it.
///
/// Without a config file the defaults apply and no directory is returned.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<(Config, Option<PathBuf>)> {
    let Some(path) = locate(explicit, cwd)? else {
        return Ok((Config::default(), None));
    };
    let config = load_with_warnings(&path)?;
    let dir = path.parent().map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);
    Ok((config, Some(dir)))
}

/// Path of the config file for a run in `cwd`.
///
/// An explicit path (`-C`, `PATHSEL_CONFIG`) is taken relative to `cwd` and
/// may name a directory holding [`CONFIG_FILE`]; it must exist. Otherwise
/// `cwd` and its ancestors are searched, up to and including the first one
/// that contains a `.git` entry (directory or worktree file).
pub fn locate(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    if let Some(explicit) = explicit {
        let mut path = cwd.join(explicit);
        if path.is_dir() {
            path.push(CONFIG_FILE);
        }
        if !path.is_file() {
            return Err(Error::Config {
                message: format!("config file not found: {}", path.display()),
                path: Some(path),
            });
        }
        return Ok(Some(path));
    }

    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!("using {}", candidate.display());
            return Ok(Some(candidate));
        }
        if dir.join(REPO_MARKER).exists() {
            break;
        }
    }
    Ok(None)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if flexible.version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                flexible.version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    let unknown_keys: BTreeSet<&String> = flexible
        .unknown
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .collect();
    for key in unknown_keys {
        warn_unknown_key(path, key);
    }

    let resolve = parse_resolve_config(flexible.resolve.as_ref(), path)?;
    tracing::debug!("loaded {} ({} exclusions)", path.display(), resolve.exclude.len());

    Ok(Config {
        version: flexible.version,
        resolve,
    })
}

/// Parse the `[resolve]` table.
fn parse_resolve_config(value: Option<&toml::Value>, path: &Path) -> Result<ResolveConfig> {
    let Some(value) = value else {
        return Ok(ResolveConfig::default());
    };
    let toml::Value::Table(t) = value else {
        return Err(Error::Config {
            message: "[resolve] must be a table".to_string(),
            path: Some(path.to_path_buf()),
        });
    };

    for key in t.keys() {
        if !KNOWN_RESOLVE_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("resolve.{}", key));
        }
    }

    let base = match t.get("base") {
        None => None,
        Some(toml::Value::String(s)) => Some(s.clone()),
        Some(other) => return Err(type_error(path, "resolve.base", "a string", other)),
    };
    let exclude = parse_pattern_list(t.get("exclude"), path)?;

    Ok(ResolveConfig { base, exclude })
}

/// Accept either an array of patterns or one `;`-joined string.
fn parse_pattern_list(value: Option<&toml::Value>, path: &Path) -> Result<Vec<String>> {
    const KEY: &str = "resolve.exclude";
    match value {
        None => Ok(Vec::new()),
        Some(toml::Value::String(s)) => Ok(split_pattern_list(s)),
        Some(toml::Value::Array(arr)) => {
            let mut patterns = Vec::new();
            for item in arr {
                match item {
                    toml::Value::String(s) => patterns.extend(split_pattern_list(s)),
                    other => return Err(type_error(path, KEY, "an array of strings", other)),
                }
            }
            Ok(patterns)
        }
        Some(other) => Err(type_error(path, KEY, "a string or an array of strings", other)),
    }
}

fn type_error(path: &Path, key: &str, expected: &str, found: &toml::Value) -> Error {
    Error::Config {
        message: format!("`{}` must be {}, found {}", key, expected, found.type_str()),
        path: Some(path.to_path_buf()),
    }
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "pathsel: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
