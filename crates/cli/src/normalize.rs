// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lexical path normalization.
//!
//! Both `/` and `\` are accepted as directory separators on input and are
//! rewritten to [`SEPARATOR`], the host's canonical separator. Nothing in
//! this module touches the filesystem.

use std::fmt;

/// Canonical directory separator for normalized output.
pub const SEPARATOR: char = std::path::MAIN_SEPARATOR;

/// Trim surrounding whitespace and canonicalize separators.
///
/// An empty (or all-whitespace) input yields an empty string, which callers
/// treat as "no path". Casing and interior whitespace are preserved.
pub fn normalize(path: &str) -> String {
    normalize_separators(path.trim())
}

/// Rewrite every `/` and `\` to [`SEPARATOR`].
pub fn normalize_separators(path: &str) -> String {
    path.chars()
        .map(|c| if is_separator(c) { SEPARATOR } else { c })
        .collect()
}

/// Normalize `path` and append [`SEPARATOR`] unless one is already present.
///
/// Idempotent. Empty input stays empty.
pub fn ensure_trailing_separator(path: &str) -> String {
    let mut normalized = normalize(path);
    if !normalized.is_empty() && !normalized.ends_with(SEPARATOR) {
        normalized.push(SEPARATOR);
    }
    normalized
}

/// Whether a normalized path is rooted (`/x`, `c:\x`, `\\server\share`).
pub fn is_rooted(path: &str) -> bool {
    let normalized = normalize(path);
    !root_prefix(&normalized).is_empty()
}

/// Fold `.` and `..` segments without touching the filesystem.
///
/// A trailing separator on the input is kept on the output.
pub fn lexical_normalize(path: &str) -> String {
    let mut parts = PathParts::parse(path);
    parts.fold_dots();
    parts.to_string()
}

/// Case-insensitive comparison of two path segments or roots.
pub fn same_segment(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Root marker at the start of a normalized path, or `""` when relative.
fn root_prefix(path: &str) -> &str {
    let bytes = path.as_bytes();
    let sep = SEPARATOR as u8;

    // \\server\share\
    if bytes.len() > 2 && bytes[0] == sep && bytes[1] == sep && bytes[2] != sep {
        let mut seen = 0;
        for (i, b) in bytes.iter().enumerate().skip(2) {
            if *b == sep {
                seen += 1;
                if seen == 2 {
                    return &path[..=i];
                }
            }
        }
        return path;
    }

    if bytes.first() == Some(&sep) {
        return &path[..1];
    }

    // c:\ or bare c:
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        if bytes.get(2) == Some(&sep) {
            return &path[..3];
        }
        if bytes.len() == 2 {
            return path;
        }
    }

    ""
}

/// A path split into its root marker and its directory segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParts {
    /// Root marker including its separator (`/`, `c:\`); empty when relative.
    pub root: String,
    /// Non-empty segments between separators.
    pub segments: Vec<String>,
    /// Whether the input ended with a separator after at least one segment.
    pub trailing: bool,
}

impl PathParts {
    /// Split a path after normalizing it. Repeated separators collapse.
    pub fn parse(path: &str) -> Self {
        let normalized = normalize(path);
        let mut root = root_prefix(&normalized).to_string();
        let rest = &normalized[root.len()..];

        // A bare drive ("c:") is treated as the drive root.
        if !root.is_empty() && !root.ends_with(SEPARATOR) {
            root.push(SEPARATOR);
        }

        let segments: Vec<String> = rest
            .split(SEPARATOR)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        let trailing = !segments.is_empty() && rest.ends_with(SEPARATOR);

        Self {
            root,
            segments,
            trailing,
        }
    }

    /// Whether the path carries a root marker.
    pub fn is_rooted(&self) -> bool {
        !self.root.is_empty()
    }

    /// Drop `.` segments and resolve `..` against the preceding segment.
    ///
    /// `..` can never climb above a root; on a relative path a leading `..`
    /// is kept.
    pub fn fold_dots(&mut self) {
        let mut folded: Vec<String> = Vec::with_capacity(self.segments.len());
        for segment in self.segments.drain(..) {
            match segment.as_str() {
                "." => {}
                ".." => match folded.last() {
                    Some(last) if last != ".." => {
                        folded.pop();
                    }
                    _ if !self.root.is_empty() => {}
                    _ => folded.push(segment),
                },
                _ => folded.push(segment),
            }
        }
        if folded.is_empty() {
            self.trailing = false;
        }
        self.segments = folded;
    }
}

impl fmt::Display for PathParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root)?;
        let sep = SEPARATOR.to_string();
        f.write_str(&self.segments.join(&sep))?;
        if self.trailing {
            f.write_str(&sep)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
