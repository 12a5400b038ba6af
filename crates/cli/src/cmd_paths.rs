// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Path arithmetic commands: base, relative, absolute.

use pathsel::absolute::to_absolute;
use pathsel::base_dir::base_directory;
use pathsel::cli::{AbsoluteArgs, BaseArgs, RelativeArgs};
use pathsel::error::ExitCode;
use pathsel::relative::{relative_directory, relative_file};

pub fn base(args: &BaseArgs) -> anyhow::Result<ExitCode> {
    println!("{}", base_directory(&args.pattern, args.file));
    Ok(ExitCode::Success)
}

pub fn relative(args: &RelativeArgs) -> anyhow::Result<ExitCode> {
    let relative = if args.file {
        relative_file(&args.from, &args.to)
    } else {
        relative_directory(&args.from, &args.to)
    };
    println!("{}", relative);
    Ok(ExitCode::Success)
}

pub fn absolute(args: &AbsoluteArgs) -> anyhow::Result<ExitCode> {
    println!("{}", to_absolute(&args.path, args.base.as_deref())?);
    Ok(ExitCode::Success)
}
