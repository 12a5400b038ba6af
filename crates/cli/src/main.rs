// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pathsel CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use pathsel::cli::{Cli, Command};
use pathsel::error::ExitCode;

mod cmd_copy;
mod cmd_paths;
mod cmd_resolve;

fn init_logging() {
    let filter = EnvFilter::try_from_env("PATHSEL_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("pathsel: {}", e);
            match e.downcast_ref::<pathsel::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Resolve(args)) => cmd_resolve::run(&cli, args),
        Some(Command::Copy(args)) => cmd_copy::run(&cli, args),
        Some(Command::Base(args)) => cmd_paths::base(args),
        Some(Command::Relative(args)) => cmd_paths::relative(args),
        Some(Command::Absolute(args)) => cmd_paths::absolute(args),
    }
}
