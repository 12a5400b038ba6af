// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Path-pattern resolution.
//!
//! Turns a file-selection pattern (`dir/**/*.txt`, `c:\out\*.dll`) plus
//! exclusion patterns into the set of existing files it selects, and
//! provides the path arithmetic callers need around that: absolute
//! resolution, search-root inference, and relative paths between
//! directories.

pub mod absolute;
pub mod base_dir;
pub mod cli;
pub mod config;
pub mod copy;
pub mod error;
pub mod fs;
pub mod matcher;
pub mod normalize;
pub mod pattern;
pub mod relative;
pub mod resolved;
pub mod resolver;

pub use absolute::to_absolute;
pub use base_dir::base_directory;
pub use cli::{Cli, Command, OutputFormat};
pub use copy::{CopiedFile, CopyReport, CopyRequest, copy_included};
pub use error::{Error, ExitCode, Result};
pub use fs::{FileSystem, MemoryFileSystem, RealFileSystem};
pub use matcher::GlobMatcher;
pub use normalize::{ensure_trailing_separator, normalize};
pub use relative::{relative_directory, relative_file};
pub use resolved::ResolvedPath;
pub use resolver::PathResolver;

#[cfg(test)]
pub mod test_utils;
