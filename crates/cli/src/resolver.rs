// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Include/exclude pattern resolution.
//!
//! The include pattern is matched into a set, each exclusion pattern is
//! matched into its own set (in parallel with rayon), and the union of the
//! exclusion sets is removed from the include set. Paths compare
//! case-insensitively.

use std::collections::BTreeSet;

use rayon::prelude::*;

use crate::error::Result;
use crate::fs::{FileSystem, RealFileSystem};
use crate::matcher::GlobMatcher;
use crate::normalize::normalize;
use crate::resolved::ResolvedPath;

/// Resolves include and exclusion patterns into file sets.
#[derive(Debug, Default)]
pub struct PathResolver<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl PathResolver<RealFileSystem> {
    /// A resolver over the host filesystem.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: FileSystem> PathResolver<F> {
    pub fn with_file_system(fs: F) -> Self {
        Self { fs }
    }

    pub fn file_system(&self) -> &F {
        &self.fs
    }

    /// Files matching `include`, with no exclusions.
    pub fn included_paths(&self, include: &str, base_directory: &str) -> Result<BTreeSet<ResolvedPath>> {
        self.included_paths_excluding::<&str>(include, &[], base_directory)
    }

    /// Files matching `include` minus every file matching any exclusion.
    ///
    /// Relative patterns resolve against `base_directory`; rooted patterns
    /// ignore it. Blank exclusion entries are skipped. The order of
    /// `exclusions` does not affect the result.
    pub fn included_paths_excluding<S>(
        &self,
        include: &str,
        exclusions: &[S],
        base_directory: &str,
    ) -> Result<BTreeSet<ResolvedPath>>
    where
        S: AsRef<str> + Sync,
    {
        let include = normalize(include);
        if include.is_empty() {
            return Ok(BTreeSet::new());
        }

        let matcher = GlobMatcher::new(&self.fs);
        let mut included = matcher.match_files(base_directory, &include)?;
        if included.is_empty() {
            return Ok(included);
        }

        let excluded = self.excluded_paths(exclusions, base_directory)?;
        if !excluded.is_empty() {
            tracing::debug!("excluding {} of {} files", excluded.len(), included.len());
            included.retain(|path| !excluded.contains(path));
        }
        Ok(included)
    }

    /// Union over several include patterns, each minus the same exclusions.
    pub fn included_paths_union<I, S>(
        &self,
        includes: &[I],
        exclusions: &[S],
        base_directory: &str,
    ) -> Result<BTreeSet<ResolvedPath>>
    where
        I: AsRef<str>,
        S: AsRef<str> + Sync,
    {
        let mut all = BTreeSet::new();
        for include in includes {
            all.extend(self.included_paths_excluding(include.as_ref(), exclusions, base_directory)?);
        }
        Ok(all)
    }

    fn excluded_paths<S>(&self, exclusions: &[S], base_directory: &str) -> Result<BTreeSet<ResolvedPath>>
    where
        S: AsRef<str> + Sync,
    {
        let matcher = GlobMatcher::new(&self.fs);
        exclusions
            .par_iter()
            .map(|pattern| normalize(pattern.as_ref()))
            .filter(|pattern| !pattern.is_empty())
            .map(|pattern| matcher.match_files(base_directory, &pattern))
            .try_reduce(BTreeSet::new, |mut acc, set| {
                acc.extend(set);
                Ok(acc)
            })
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
