// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `kiln build` — compile every discovered source into the artifact.

use anyhow::Result;
use std::path::Path;

use kiln_core::{scan_sources, Config};
use kiln_engine::{compile_invocation, query_helper_flags, run_streaming};

use crate::exit_error::ExitError;
use crate::output::compile_success_line;

/// Outcome of the build step, for the orchestrator's check policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStatus {
    Built,
    Failed,
}

pub async fn handle(dir: &Path) -> Result<()> {
    let config = Config::load(dir)?;
    match execute(dir, &config).await? {
        BuildStatus::Built => Ok(()),
        BuildStatus::Failed => Err(ExitError::code(1).into()),
    }
}

/// Run the scan-query-compile-report sequence.
///
/// Failures past a successful scan (missing compiler or helper, helper
/// exiting non-zero, an ordinary compile error) are reported and downgraded
/// to `Failed`; scan and config problems stay hard errors.
pub async fn execute(dir: &Path, config: &Config) -> Result<BuildStatus> {
    let sources = scan_sources(dir)?;
    if sources.is_empty() {
        eprintln!("No .c sources found under {}", sources.base.display());
        report_failure();
        return Ok(BuildStatus::Failed);
    }
    tracing::info!(count = sources.len(), "building");

    let helper_flags = match query_helper_flags(&config.build.pkg_helper, dir).await {
        Ok(flags) => flags,
        Err(e) => {
            eprintln!("{e}");
            report_failure();
            return Ok(BuildStatus::Failed);
        }
    };

    let invocation = compile_invocation(&sources, &config.build, &helper_flags);
    tracing::debug!(command = %invocation, "compile invocation");
    match run_streaming(&invocation).await {
        Ok(outcome) if outcome.success() => {
            println!("{}", compile_success_line(&sources, &config.build.artifact));
            Ok(BuildStatus::Built)
        }
        Ok(_) => {
            report_failure();
            Ok(BuildStatus::Failed)
        }
        Err(e) => {
            eprintln!("{e}");
            report_failure();
            Ok(BuildStatus::Failed)
        }
    }
}

/// The deliberately generic one-liner; the compiler's own diagnostics have
/// already streamed through.
fn report_failure() {
    eprintln!("Build failed");
}
