// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Copy command implementation.

use std::io::Write;

use pathsel::cli::{Cli, CopyArgs, OutputFormat};
use pathsel::copy::{CopyRequest, copy_included};
use pathsel::error::ExitCode;
use pathsel::pattern::split_pattern_list;
use pathsel::resolver::PathResolver;

use crate::cmd_resolve::Settings;

/// Run the copy command.
pub fn run(cli: &Cli, args: &CopyArgs) -> anyhow::Result<ExitCode> {
    let settings = Settings::load(cli, args.base.as_deref(), &args.exclude)?;

    let request = CopyRequest {
        include: split_pattern_list(&args.patterns),
        exclude: settings.exclude,
        base: settings.base,
        destination: args.dest.clone(),
        dry_run: args.dry_run,
    };
    let report = copy_included(&PathResolver::new(), &request)?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    match args.output {
        OutputFormat::Text => {
            for file in &report.files {
                writeln!(handle, "{} -> {}", file.source, file.target)?;
            }
            if report.dry_run {
                write!(handle, "{} files (dry run)", report.files.len())?;
            } else {
                write!(handle, "{} files, {} bytes", report.files.len(), report.bytes)?;
            }
            if !report.unchanged.is_empty() {
                write!(handle, ", {} already in place", report.unchanged.len())?;
            }
            writeln!(handle)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut handle, &report)?;
            writeln!(handle)?;
        }
    }

    Ok(if report.files.is_empty() && report.unchanged.is_empty() {
        ExitCode::NoMatches
    } else {
        ExitCode::Success
    })
}
