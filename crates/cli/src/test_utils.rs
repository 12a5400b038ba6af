// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the pathsel crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::fs::MemoryFileSystem;
use crate::resolved::ResolvedPath;

/// Rewrite `/` in a test literal to the host's canonical separator.
pub fn native(path: &str) -> String {
    path.replace('/', std::path::MAIN_SEPARATOR_STR)
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
///
/// # Example
///
/// ```ignore
/// let tmp = TempDir::new().unwrap();
/// create_tree(tmp.path(), &[
///     ("temp/file.txt", "a"),
///     ("other path/temp/file.txt", "b"),
/// ]);
/// ```
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Builds an in-memory filesystem holding `files` below `root`.
pub fn memory_tree(root: &str, files: &[&str]) -> MemoryFileSystem {
    let fs = MemoryFileSystem::new();
    fs.add_dir(native(root));
    for file in files {
        fs.add_file(native(&format!("{root}/{file}")), file.as_bytes().to_vec());
    }
    fs
}

/// The tree used throughout the resolution tests, rooted at `/r`.
pub fn sample_tree() -> MemoryFileSystem {
    memory_tree(
        "/r",
        &["temp/file.txt", "other path/temp/file.txt", "file.txt"],
    )
}

/// Collect a result set into native-separator strings for comparison.
pub fn paths(set: &BTreeSet<ResolvedPath>) -> BTreeSet<String> {
    set.iter().map(|p| p.as_str().to_string()).collect()
}

/// Build an expected set from `/`-separated literals.
pub fn expected(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|p| native(p)).collect()
}
