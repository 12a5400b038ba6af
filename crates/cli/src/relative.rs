// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Relative path computation between absolute paths.
//!
//! Segments are compared case-insensitively. Resolving a result against the
//! origin directory with [`to_absolute`](crate::absolute::to_absolute)
//! reproduces the target.

use crate::normalize::{PathParts, SEPARATOR, ensure_trailing_separator, same_segment};

/// Relative path from directory `from_dir` to directory `to_dir`.
///
/// Always ends with a separator. Identical directories yield `./`. When the
/// two paths have different roots no relative form exists and `to_dir` is
/// returned normalized.
pub fn relative_directory(from_dir: &str, to_dir: &str) -> String {
    match relative_segments(from_dir, to_dir) {
        Some(segments) if segments.is_empty() => format!(".{SEPARATOR}"),
        Some(segments) => ensure_trailing_separator(&join(&segments)),
        None => ensure_trailing_separator(&folded(to_dir).to_string()),
    }
}

/// Relative path from directory `from_dir` to the file `to_file`.
///
/// A `to_file` equal to `from_dir` yields `.`; differing roots yield
/// `to_file` normalized.
pub fn relative_file(from_dir: &str, to_file: &str) -> String {
    match relative_segments(from_dir, to_file) {
        Some(segments) if segments.is_empty() => ".".to_string(),
        Some(segments) => join(&segments),
        None => {
            let mut parts = folded(to_file);
            parts.trailing = false;
            parts.to_string()
        }
    }
}

fn folded(path: &str) -> PathParts {
    let mut parts = PathParts::parse(path);
    parts.fold_dots();
    parts
}

/// `..` segments climbing out of `from`, then the remainder of `to`.
///
/// `None` when the roots differ.
fn relative_segments(from: &str, to: &str) -> Option<Vec<String>> {
    let from = folded(from);
    let to = folded(to);
    if !same_segment(&from.root, &to.root) {
        return None;
    }

    let common = from
        .segments
        .iter()
        .zip(&to.segments)
        .take_while(|(a, b)| same_segment(a, b))
        .count();

    let climb = from.segments.len() - common;
    let mut segments: Vec<String> = std::iter::repeat_n("..".to_string(), climb).collect();
    segments.extend(to.segments[common..].iter().cloned());
    Some(segments)
}

fn join(segments: &[String]) -> String {
    segments.join(&SEPARATOR.to_string())
}

#[cfg(test)]
#[path = "relative_tests.rs"]
mod tests;
