// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search-root inference for wildcard patterns.

use crate::normalize::{PathParts, normalize};
use crate::pattern::has_wildcard;

/// The longest wildcard-free directory prefix of `pattern`.
///
/// Segments are taken from the root until the first one containing `*` or
/// `?` (which includes `**`). A pattern without any wildcard resolves to its
/// parent directory, unless it ends with a separator, in which case it names
/// a directory and resolves to itself. With `treat_as_file` the final
/// segment is always a file name and is dropped even when a trailing
/// separator is present.
///
/// The result never contains a wildcard and carries no trailing separator,
/// except for a bare root (`/`, `c:\`). A relative pattern whose first
/// segment is already a wildcard yields `""` (the caller's base directory).
pub fn base_directory(pattern: &str, treat_as_file: bool) -> String {
    let pattern = normalize(pattern);
    if pattern.is_empty() {
        return String::new();
    }

    let mut parts = PathParts::parse(&pattern);
    match parts.segments.iter().position(|s| has_wildcard(s)) {
        Some(first_wildcard) => {
            parts.segments.truncate(first_wildcard);
            parts.fold_dots();
        }
        None => {
            parts.fold_dots();
            if treat_as_file || !parts.trailing {
                parts.segments.pop();
            }
        }
    }
    parts.trailing = false;
    parts.to_string()
}

#[cfg(test)]
#[path = "base_dir_tests.rs"]
mod tests;
