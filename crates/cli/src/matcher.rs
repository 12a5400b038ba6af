// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wildcard pattern matching against a directory subtree.
//!
//! A pattern is made absolute against the caller's base directory, split
//! into its wildcard-free search root (see [`base_directory`]) and the
//! remaining wildcard suffix, and every file below the search root whose
//! root-relative path matches the suffix is returned.
//!
//! Literal segments compare case-insensitively like wildcard ones: when
//! the exact spelling does not exist, each segment is looked up among its
//! directory's entries ignoring case.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::absolute::to_absolute;
use crate::base_dir::base_directory;
use crate::error::Result;
use crate::fs::FileSystem;
use crate::normalize::{PathParts, normalize, same_segment};
use crate::pattern::{SegmentGlob, has_wildcard};
use crate::resolved::ResolvedPath;

/// Enumerates files matching a pattern.
#[derive(Debug)]
pub struct GlobMatcher<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
}

impl<'a, F: FileSystem + ?Sized> GlobMatcher<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Files matching `pattern`, which is resolved against `base_directory`
    /// when relative.
    ///
    /// An empty pattern, a missing search root, or a missing literal file
    /// all yield an empty set. A pattern without any wildcard names one
    /// file and is looked up without walking.
    ///
    /// # Errors
    /// Propagates enumeration failures below an existing search root and a
    /// failed current-directory lookup when `base_directory` is empty.
    pub fn match_files(&self, base_directory: &str, pattern: &str) -> Result<BTreeSet<ResolvedPath>> {
        let pattern = normalize(pattern);
        if pattern.is_empty() {
            return Ok(BTreeSet::new());
        }

        let absolute = to_absolute(&pattern, Some(base_directory))?;
        let parts = PathParts::parse(&absolute);

        if parts.segments.iter().any(|s| has_wildcard(s)) {
            self.walk_matches(&absolute, &parts)
        } else {
            self.literal_file(&absolute, &parts)
        }
    }

    fn literal_file(&self, absolute: &str, parts: &PathParts) -> Result<BTreeSet<ResolvedPath>> {
        let exact = Path::new(absolute);
        if self.fs.is_file(exact) {
            return Ok(BTreeSet::from([ResolvedPath::new(absolute)]));
        }

        let found: BTreeSet<ResolvedPath> = self
            .existing_spellings(&parts.root, &parts.segments)
            .into_iter()
            .filter(|path| self.fs.is_file(path))
            .map(|path| ResolvedPath::from_path(&path))
            .collect();
        if found.is_empty() {
            tracing::debug!("{} does not exist", absolute);
        }
        Ok(found)
    }

    fn walk_matches(&self, absolute: &str, parts: &PathParts) -> Result<BTreeSet<ResolvedPath>> {
        let mut found = BTreeSet::new();

        let root = base_directory(absolute, true);
        let root_parts = PathParts::parse(&root);
        let suffix = parts
            .segments
            .get(root_parts.segments.len()..)
            .unwrap_or_default();
        if suffix.is_empty() {
            return Ok(found);
        }

        let roots: Vec<PathBuf> = if self.fs.is_dir(Path::new(&root)) {
            vec![PathBuf::from(&root)]
        } else {
            self.existing_spellings(&root_parts.root, &root_parts.segments)
                .into_iter()
                .filter(|dir| self.fs.is_dir(dir))
                .collect()
        };
        if roots.is_empty() {
            tracing::debug!("search root {} does not exist", root);
            return Ok(found);
        }

        let glob = SegmentGlob::compile(suffix)?;
        for root_path in &roots {
            tracing::debug!("matching {} under {}", glob.as_str(), root_path.display());
            for file in self.fs.files_under(root_path)? {
                let Ok(relative) = file.strip_prefix(root_path) else {
                    continue;
                };
                let candidate = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                if glob.is_match(&candidate) {
                    tracing::trace!("matched {}", candidate);
                    found.insert(ResolvedPath::from_path(&file));
                }
            }
        }

        Ok(found)
    }

    /// Every existing path spelled like `root` + `segments` ignoring case.
    ///
    /// A directory that cannot be listed still yields the exact spelling
    /// when it exists.
    fn existing_spellings(&self, root: &str, segments: &[String]) -> Vec<PathBuf> {
        let mut current = vec![PathBuf::from(root)];
        for segment in segments {
            let mut next = Vec::new();
            for dir in &current {
                match self.fs.entries(dir) {
                    Ok(children) => next.extend(children.into_iter().filter(|child| {
                        child
                            .file_name()
                            .is_some_and(|name| same_segment(&name.to_string_lossy(), segment))
                    })),
                    Err(err) => {
                        tracing::debug!("cannot list {}: {}", dir.display(), err);
                        let exact = dir.join(segment);
                        if self.fs.exists(&exact) {
                            next.push(exact);
                        }
                    }
                }
            }
            if next.is_empty() {
                return next;
            }
            current = next;
        }
        current
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
