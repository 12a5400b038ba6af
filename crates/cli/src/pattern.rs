// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern syntax: literal segments, `*`/`?` within one segment, and `**`
//! as a whole segment matching zero or more directory levels.
//!
//! Matching is delegated to `globset` after translating each segment so
//! that only these three wildcards keep a meaning. Every other glob
//! metacharacter (`[`, `]`, `{`, `}`) is matched literally, and a segment
//! that uses `**` as part of a name (`**file.txt`) is matched literally as
//! a whole.

use globset::{GlobBuilder, GlobMatcher};

use crate::error::{Error, Result};

/// Characters that make a segment a wildcard segment.
pub const WILDCARDS: &[char] = &['*', '?'];

/// The recursive segment.
pub const RECURSIVE: &str = "**";

/// Separator between patterns in a single configuration string.
pub const LIST_SEPARATOR: char = ';';

/// Whether `segment` contains `*` or `?`.
pub fn has_wildcard(segment: &str) -> bool {
    segment.contains(WILDCARDS)
}

/// Split a `;`-joined pattern list, trimming entries and dropping empty ones.
pub fn split_pattern_list(list: &str) -> Vec<String> {
    list.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

/// A compiled glob over `/`-joined relative paths.
#[derive(Debug, Clone)]
pub struct SegmentGlob {
    glob: String,
    matcher: GlobMatcher,
}

impl SegmentGlob {
    /// Compile pattern segments into a case-insensitive glob.
    ///
    /// # Errors
    /// Returns [`Error::Internal`] if even the fully literal form of the
    /// segments is rejected by `globset`.
    pub fn compile<S: AsRef<str>>(segments: &[S]) -> Result<Self> {
        let glob = segments
            .iter()
            .map(|s| translate_segment(s.as_ref()))
            .collect::<Vec<_>>()
            .join("/");

        match build(&glob) {
            Ok(matcher) => Ok(Self { glob, matcher }),
            Err(err) => {
                tracing::debug!("glob {:?} rejected ({}), matching literally", glob, err);
                let literal = segments
                    .iter()
                    .map(|s| escape(s.as_ref(), true))
                    .collect::<Vec<_>>()
                    .join("/");
                let matcher =
                    build(&literal).map_err(|e| Error::Internal(format!("glob {literal:?}: {e}")))?;
                Ok(Self {
                    glob: literal,
                    matcher,
                })
            }
        }
    }

    /// Whether a `/`-separated relative path matches.
    pub fn is_match(&self, relative: &str) -> bool {
        self.matcher.is_match(relative)
    }

    /// The translated `globset` source.
    pub fn as_str(&self) -> &str {
        &self.glob
    }
}

fn build(glob: &str) -> std::result::Result<GlobMatcher, globset::Error> {
    Ok(GlobBuilder::new(glob)
        .literal_separator(true)
        .case_insensitive(true)
        .backslash_escape(true)
        .build()?
        .compile_matcher())
}

fn translate_segment(segment: &str) -> String {
    if segment == RECURSIVE {
        return RECURSIVE.to_string();
    }
    // `**` embedded in a name has no defined meaning.
    escape(segment, segment.contains(RECURSIVE))
}

fn escape(segment: &str, escape_wildcards: bool) -> String {
    let mut escaped = String::with_capacity(segment.len());
    for c in segment.chars() {
        let special = match c {
            '*' | '?' => escape_wildcards,
            '[' | ']' | '{' | '}' | '\\' => true,
            _ => false,
        };
        if special {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
