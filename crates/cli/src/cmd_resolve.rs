// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolve command implementation.

use std::io::Write;

use serde::Serialize;

use pathsel::absolute::to_absolute;
use pathsel::cli::{Cli, OutputFormat, ResolveArgs};
use pathsel::config;
use pathsel::error::ExitCode;
use pathsel::pattern::split_pattern_list;
use pathsel::relative::relative_file;
use pathsel::resolver::PathResolver;

/// Base directory and exclusions after merging flags with config.
pub struct Settings {
    pub base: String,
    pub exclude: Vec<String>,
}

impl Settings {
    /// Merge command-line values with the discovered config.
    ///
    /// `--base` wins over `[resolve] base`, which wins over the cwd.
    /// Config exclusions are appended to the command-line ones.
    pub fn load(cli: &Cli, base: Option<&str>, exclude: &[String]) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir()?;
        let cwd_str = cwd.to_string_lossy();

        let (config, config_dir) = config::discover(cli.config.as_deref(), &cwd)?;

        let base = match (base.map(str::trim).filter(|b| !b.is_empty()), config_dir) {
            (Some(flag), _) => to_absolute(flag, Some(cwd_str.as_ref()))?,
            (None, Some(dir)) => match config.resolve.base_directory(&dir)? {
                Some(base) => base,
                None => cwd_str.to_string(),
            },
            (None, None) => cwd_str.to_string(),
        };

        let mut patterns: Vec<String> = exclude.iter().flat_map(|x| split_pattern_list(x)).collect();
        patterns.extend(config.resolve.exclude);
        tracing::debug!("base {} with {} exclusions", base, patterns.len());

        Ok(Self {
            base,
            exclude: patterns,
        })
    }
}

#[derive(Serialize)]
struct ResolveOutput<'a> {
    base: &'a str,
    files: Vec<String>,
}

/// Run the resolve command.
pub fn run(cli: &Cli, args: &ResolveArgs) -> anyhow::Result<ExitCode> {
    let settings = Settings::load(cli, args.base.as_deref(), &args.exclude)?;
    let includes = split_pattern_list(&args.patterns);

    let resolver = PathResolver::new();
    let resolved = resolver.included_paths_union(&includes, &settings.exclude, &settings.base)?;

    let files: Vec<String> = resolved
        .into_iter()
        .map(|path| {
            if args.relative {
                relative_file(&settings.base, path.as_str())
            } else {
                path.into_string()
            }
        })
        .collect();
    let found = !files.is_empty();

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    match args.output {
        OutputFormat::Text => {
            for file in &files {
                writeln!(handle, "{}", file)?;
            }
        }
        OutputFormat::Json => {
            let output = ResolveOutput {
                base: &settings.base,
                files,
            };
            serde_json::to_writer_pretty(&mut handle, &output)?;
            writeln!(handle)?;
        }
    }

    Ok(if found {
        ExitCode::Success
    } else {
        ExitCode::NoMatches
    })
}
