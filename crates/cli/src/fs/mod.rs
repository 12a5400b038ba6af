// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filesystem access used by pattern matching and file copying.
//!
//! [`RealFileSystem`] walks the disk with the `ignore` crate, with every
//! ignore-file and hidden-file filter turned off so that matching is
//! exhaustive. [`MemoryFileSystem`] is an in-memory stand-in for tests.

mod memory;

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{Error, Result};

pub use memory::MemoryFileSystem;

/// Read-mostly filesystem capability.
pub trait FileSystem: Send + Sync {
    /// Whether `path` is an existing regular file (symlinks followed).
    fn is_file(&self, path: &Path) -> bool;

    /// Whether `path` is an existing directory (symlinks followed).
    fn is_dir(&self, path: &Path) -> bool;

    fn exists(&self, path: &Path) -> bool {
        self.is_file(path) || self.is_dir(path)
    }

    /// Immediate children of `dir` (files and directories), sorted.
    ///
    /// A missing directory has no entries.
    fn entries(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    /// Every regular file below `root`, at any depth.
    fn files_under(&self, root: &Path) -> Result<Vec<PathBuf>>;

    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Write `contents` to `path`, creating parent directories.
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;

    /// Copy `from` to `to`, creating parent directories. Returns bytes copied.
    fn copy(&self, from: &Path, to: &Path) -> Result<u64>;
}

/// Helper to check if an ignore::Error is a symlink loop error.
fn is_loop_error(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. } => is_loop_error(err),
        ignore::Error::WithDepth { err, .. } => is_loop_error(err),
        ignore::Error::WithLineNumber { err, .. } => is_loop_error(err),
        _ => false,
    }
}

/// A followed symlink whose target is gone.
fn is_dangling_link(err: &ignore::Error) -> bool {
    err.io_error()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |source| Error::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn create_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(io_error(parent))
        }
        _ => Ok(()),
    }
}

/// The host filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn entries(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let read = match std::fs::read_dir(dir) {
            Ok(read) => read,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error(dir)(e)),
        };
        let mut children = read
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(io_error(dir))?;
        children.sort();
        Ok(children)
    }

    fn files_under(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut builder = WalkBuilder::new(root);
        builder.standard_filters(false).follow_links(true);

        let mut files = Vec::new();
        for entry in builder.build() {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|t| t.is_file()) {
                        files.push(entry.into_path());
                    }
                }
                Err(err) if is_loop_error(&err) => {
                    tracing::warn!("Symlink loop detected: {}", err);
                }
                Err(err) if is_dangling_link(&err) => {
                    tracing::warn!("skipping dangling link: {}", err);
                }
                Err(err) => {
                    return Err(Error::Walk {
                        path: root.to_path_buf(),
                        message: err.to_string(),
                    });
                }
            }
        }

        tracing::trace!("{} files under {}", files.len(), root.display());
        Ok(files)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        std::fs::read(path).map_err(io_error(path))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        create_parent(path)?;
        std::fs::write(path, contents).map_err(io_error(path))
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<u64> {
        create_parent(to)?;
        std::fs::copy(from, to).map_err(io_error(from))
    }
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn entries(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        (**self).entries(dir)
    }

    fn files_under(&self, root: &Path) -> Result<Vec<PathBuf>> {
        (**self).files_under(root)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        (**self).write(path, contents)
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<u64> {
        (**self).copy(from, to)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
