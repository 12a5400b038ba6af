// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Copying resolved files into a destination directory.
//!
//! Each file keeps its path relative to the base directory. A file that
//! lies outside the base directory lands directly in the destination under
//! its file name. All targets are planned before anything is written: a
//! file whose target is itself is left alone, and two files sharing one
//! target abort the copy.

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use crate::absolute::to_absolute;
use crate::error::{Error, Result};
use crate::fs::FileSystem;
use crate::normalize::{PathParts, is_rooted};
use crate::relative::relative_file;
use crate::resolved::ResolvedPath;
use crate::resolver::PathResolver;

/// What to copy and where.
#[derive(Debug, Clone, Default)]
pub struct CopyRequest {
    /// Include patterns; their matches are unioned.
    pub include: Vec<String>,
    /// Exclusion patterns applied to every include pattern.
    pub exclude: Vec<String>,
    /// Anchor for relative patterns and for target layout.
    pub base: String,
    /// Directory receiving the files.
    pub destination: String,
    /// Plan only, copy nothing.
    pub dry_run: bool,
}

/// One planned or performed copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopiedFile {
    pub source: String,
    pub target: String,
}

/// Outcome of [`copy_included`].
#[derive(Debug, Default, Serialize)]
pub struct CopyReport {
    /// Copies in source order.
    pub files: Vec<CopiedFile>,
    /// Sources already at their target, left untouched.
    pub unchanged: Vec<String>,
    /// Bytes written (zero on a dry run).
    pub bytes: u64,
    pub dry_run: bool,
}

/// Resolve the request's patterns and copy every match.
///
/// # Errors
/// Fails when the destination is empty, when two sources map to the same
/// target, or on the first read/write error.
pub fn copy_included<F: FileSystem>(resolver: &PathResolver<F>, request: &CopyRequest) -> Result<CopyReport> {
    let base = match request.base.trim() {
        "" => to_absolute(".", None)?,
        base => to_absolute(base, None)?,
    };
    let destination = to_absolute(&request.destination, None)?;
    if destination.is_empty() {
        return Err(Error::Argument("copy destination is empty".to_string()));
    }

    let sources = resolver.included_paths_union(&request.include, &request.exclude, &base)?;

    let mut report = CopyReport {
        dry_run: request.dry_run,
        ..Default::default()
    };
    let mut claimed: HashMap<ResolvedPath, String> = HashMap::new();
    let mut planned = Vec::with_capacity(sources.len());
    for source in sources {
        let target = target_path(&base, source.as_str(), &destination)?;
        let key = ResolvedPath::new(&target);
        if key == source {
            tracing::debug!("{} is already in place", source);
            report.unchanged.push(source.into_string());
            continue;
        }
        if let Some(first) = claimed.get(&key) {
            return Err(Error::Argument(format!(
                "{} and {} would both be copied to {}",
                first, source, target
            )));
        }
        claimed.insert(key, source.as_str().to_string());
        planned.push(CopiedFile {
            source: source.into_string(),
            target,
        });
    }

    for file in planned {
        if !request.dry_run {
            report.bytes += resolver
                .file_system()
                .copy(Path::new(&file.source), Path::new(&file.target))?;
        }
        tracing::debug!("copy {} -> {}", file.source, file.target);
        report.files.push(file);
    }
    Ok(report)
}

/// Where `source` goes under `destination`, keeping its layout below `base`.
pub fn target_path(base: &str, source: &str, destination: &str) -> Result<String> {
    let relative = relative_file(base, source);
    let escapes_base = is_rooted(&relative)
        || PathParts::parse(&relative)
            .segments
            .first()
            .is_some_and(|s| s == "..");

    let relative = if escapes_base {
        PathParts::parse(source)
            .segments
            .last()
            .cloned()
            .unwrap_or_default()
    } else {
        relative
    };
    to_absolute(&relative, Some(destination))
}

#[cfg(test)]
#[path = "copy_tests.rs"]
mod tests;
