// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Resolve wildcard path patterns into concrete file sets
#[derive(Parser)]
#[command(name = "pathsel")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "PATHSEL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List files selected by include and exclusion patterns
    Resolve(ResolveArgs),
    /// Copy selected files into a directory, keeping their layout
    Copy(CopyArgs),
    /// Print the wildcard-free search root of a pattern
    Base(BaseArgs),
    /// Print the relative path between two absolute paths
    Relative(RelativeArgs),
    /// Print a path made absolute
    Absolute(AbsoluteArgs),
}

#[derive(clap::Args)]
pub struct ResolveArgs {
    /// Include patterns, `;`-separated
    #[arg(value_name = "PATTERNS", allow_hyphen_values = true)]
    pub patterns: String,

    /// Exclusion patterns, `;`-separated (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "PATTERNS")]
    pub exclude: Vec<String>,

    /// Base directory for relative patterns (default: config, then cwd)
    #[arg(short, long, value_name = "DIR")]
    pub base: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Print paths relative to the base directory
    #[arg(long)]
    pub relative: bool,
}

#[derive(clap::Args)]
pub struct CopyArgs {
    /// Include patterns, `;`-separated
    #[arg(value_name = "PATTERNS", allow_hyphen_values = true)]
    pub patterns: String,

    /// Destination directory
    #[arg(short, long, value_name = "DIR")]
    pub dest: String,

    /// Exclusion patterns, `;`-separated (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "PATTERNS")]
    pub exclude: Vec<String>,

    /// Base directory for relative patterns and target layout
    #[arg(short, long, value_name = "DIR")]
    pub base: Option<String>,

    /// Show what would be copied without copying
    #[arg(long)]
    pub dry_run: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct BaseArgs {
    /// Pattern to inspect
    #[arg(allow_hyphen_values = true)]
    pub pattern: String,

    /// Treat the last segment as a file name
    #[arg(long)]
    pub file: bool,
}

#[derive(clap::Args)]
pub struct RelativeArgs {
    /// Origin directory
    pub from: String,

    /// Target directory (or file with --file)
    pub to: String,

    /// Target is a file; omit the trailing separator
    #[arg(long)]
    pub file: bool,
}

#[derive(clap::Args)]
pub struct AbsoluteArgs {
    /// Path to resolve
    pub path: String,

    /// Base directory (default: cwd)
    #[arg(short, long, value_name = "DIR")]
    pub base: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
