// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Link/compile flag discovery via the configured helper

use crate::exec::{run_captured, ExecError};
use crate::invocation::Invocation;
use std::path::Path;

/// Errors from querying the flag helper.
#[derive(Debug, thiserror::Error)]
pub enum FlagsError {
    /// The helper ran but exited non-zero.
    #[error("`{program}` exited with code {exit_code}: {stderr}")]
    HelperFailed { program: String, exit_code: i32, stderr: String },

    /// The helper could not be spawned at all.
    #[error(transparent)]
    Spawn(#[from] ExecError),
}

/// Ask the helper for compiler and linker flags (`--cflags --libs`).
///
/// An empty flag list from a successful helper is legal.
pub async fn query_helper_flags(helper: &str, dir: &Path) -> Result<Vec<String>, FlagsError> {
    let invocation = Invocation {
        program: helper.to_string(),
        args: vec!["--cflags".to_string(), "--libs".to_string()],
        cwd: dir.to_path_buf(),
    };
    let output = run_captured(&invocation).await?;
    if output.exit_code != 0 {
        return Err(FlagsError::HelperFailed {
            program: helper.to_string(),
            exit_code: output.exit_code,
            stderr: output.stderr.trim().to_string(),
        });
    }
    let flags = split_flags(&output.stdout);
    tracing::debug!(helper = %helper, count = flags.len(), "queried helper flags");
    Ok(flags)
}

/// Split helper output into argv tokens on ASCII whitespace.
///
/// Runs of spaces, tabs, and newlines collapse to single boundaries.
pub fn split_flags(output: &str) -> Vec<String> {
    output.split_ascii_whitespace().map(String::from).collect()
}

#[cfg(test)]
#[path = "flags_tests.rs"]
mod tests;
