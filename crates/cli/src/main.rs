// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! kiln: compile a directory of C sources and leak-check the result.

mod color;
mod commands;
mod exit_error;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use exit_error::ExitError;
use output::OutputFormat;

/// Version string with embedded git hash, e.g. "0.2.0 (abc1234)".
const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_GIT_HASH"), ")");

#[derive(Parser)]
#[command(
    name = "kiln",
    version = VERSION,
    about = "Build every .c file in a directory and run the result under a leak checker",
    styles = color::styles()
)]
struct Cli {
    /// Operate on DIR instead of the current directory
    #[arg(short = 'C', long = "dir", global = true, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Enable debug logging to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Build, then leak-check the artifact (the default)
    Run,
    /// Build every .c file into the artifact
    Build,
    /// Leak-check the existing artifact without rebuilding
    Check,
    /// List the .c files a build would compile
    Sources {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        output: OutputFormat,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.verbose || std::env::var_os("KILN_LOG").is_some() {
        init_tracing();
    }

    let dir = match cli.dir {
        Some(dir) => dir,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("error: cannot determine current directory: {e}");
                std::process::exit(1);
            }
        },
    };

    let result = match cli.command.unwrap_or(Command::Run) {
        Command::Run => commands::run::handle(&dir).await,
        Command::Build => commands::build::handle(&dir).await,
        Command::Check => commands::check::handle(&dir).await,
        Command::Sources { output } => commands::sources::handle(&dir, output),
    };

    if let Err(err) = result {
        if let Some(exit) = err.downcast_ref::<ExitError>() {
            if !exit.message.is_empty() {
                eprintln!("{}", exit.message);
            }
            std::process::exit(exit.code);
        }
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

/// Install the fmt subscriber on stderr. `KILN_LOG` overrides the filter.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("KILN_LOG").unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new("kiln=debug,kiln_core=debug,kiln_engine=debug")
    });
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
