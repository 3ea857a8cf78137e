// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `kiln check` — run the artifact under the leak checker.

use anyhow::Result;
use std::path::Path;

use kiln_core::Config;
use kiln_engine::{check_invocation, run_streaming};

use crate::exit_error::ExitError;

pub async fn handle(dir: &Path) -> Result<()> {
    let config = Config::load(dir)?;
    execute(dir, &config).await
}

/// Run the leak-check wrapper, streaming its report through.
///
/// The process exits with the wrapper's own code; 127 when the wrapper
/// cannot be spawned at all.
pub async fn execute(dir: &Path, config: &Config) -> Result<()> {
    let invocation = check_invocation(&config.check, &config.build.artifact, dir);
    tracing::info!(runner = %config.check.runner, artifact = %config.build.artifact, "leak check");
    match run_streaming(&invocation).await {
        Ok(outcome) if outcome.success() => Ok(()),
        Ok(outcome) => Err(ExitError::code(outcome.exit_code).into()),
        Err(e) => Err(ExitError::new(127, e.to_string()).into()),
    }
}
