// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Absolute path resolution.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::normalize::{ensure_trailing_separator, is_rooted, lexical_normalize, normalize};

/// Resolve `path` to an absolute path.
///
/// - Empty `path` yields an empty string (no path).
/// - Rooted `path` is returned normalized, `base` is ignored.
/// - Relative `path` is joined onto `base`, or onto the current directory
///   when `base` is `None` or empty. A relative `base` is itself resolved
///   against the current directory first.
///
/// `.` and `..` are folded lexically and a trailing separator is preserved.
///
/// # Errors
/// Only fails when the current directory is needed and cannot be read.
pub fn to_absolute(path: &str, base: Option<&str>) -> Result<String> {
    let path = normalize(path);
    if path.is_empty() {
        return Ok(String::new());
    }
    if is_rooted(&path) {
        return Ok(lexical_normalize(&path));
    }

    let base = match base.map(normalize).filter(|b| !b.is_empty()) {
        Some(b) if is_rooted(&b) => b,
        Some(b) => join(&current_dir()?, &b),
        None => current_dir()?,
    };

    Ok(lexical_normalize(&join(&base, &path)))
}

/// Concatenate a directory and a relative path with one separator.
pub fn join(directory: &str, relative: &str) -> String {
    let mut joined = ensure_trailing_separator(directory);
    joined.push_str(&normalize(relative));
    joined
}

fn current_dir() -> Result<String> {
    std::env::current_dir()
        .map(|cwd| normalize(&cwd.to_string_lossy()))
        .map_err(|source| Error::Io {
            path: PathBuf::from("."),
            source,
        })
}

#[cfg(test)]
#[path = "absolute_tests.rs"]
mod tests;
