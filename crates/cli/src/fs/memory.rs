// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory filesystem.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use dashmap::{DashMap, DashSet};

use super::FileSystem;
use crate::error::{Error, Result};

/// Files held in memory, keyed by path.
///
/// Directories exist implicitly for every ancestor of a stored file and can
/// also be added empty with [`MemoryFileSystem::add_dir`].
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: DashMap<PathBuf, Vec<u8>>,
    dirs: DashSet<PathBuf>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) {
        self.files
            .insert(path.as_ref().to_path_buf(), contents.into());
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        self.dirs.insert(path.as_ref().to_path_buf());
    }

    /// Number of stored files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn not_found(path: &Path) -> Error {
        Error::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.iter().any(|d| d.starts_with(path))
            || self
                .files
                .iter()
                .any(|f| f.key().as_path() != path && f.key().starts_with(path))
    }

    fn entries(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let child = |path: &Path| -> Option<PathBuf> {
            let first = path.strip_prefix(dir).ok()?.components().next()?;
            Some(dir.join(first))
        };
        let children: BTreeSet<PathBuf> = self
            .files
            .iter()
            .filter_map(|f| child(f.key().as_path()))
            .chain(self.dirs.iter().filter_map(|d| child(d.key().as_path())))
            .collect();
        Ok(children.into_iter().collect())
    }

    fn files_under(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files: Vec<PathBuf> = self
            .files
            .iter()
            .filter(|f| f.key().as_path() != root && f.key().starts_with(root))
            .map(|f| f.key().clone())
            .collect();
        files.sort();
        Ok(files)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.files
            .get(path)
            .map(|f| f.value().clone())
            .ok_or_else(|| Self::not_found(path))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.add_file(path, contents.to_vec());
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<u64> {
        let contents = self.read(from)?;
        let len = contents.len() as u64;
        self.add_file(to, contents);
        Ok(len)
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
