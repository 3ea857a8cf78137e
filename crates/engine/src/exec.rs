// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential external process execution

use crate::invocation::Invocation;
use std::time::{Duration, Instant};

/// Errors from spawning an external tool.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// Command not found or could not be spawned.
    #[error("failed to spawn `{program}`: {source}")]
    Spawn { program: String, source: std::io::Error },
}

/// Outcome of a streamed run.
#[derive(Debug)]
pub struct ExecOutcome {
    /// Exit code; `-1` when the process died to a signal.
    pub exit_code: i32,
    /// Wall-clock duration.
    pub duration: Duration,
}

impl ExecOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Outcome of a captured run.
#[derive(Debug)]
pub struct CapturedOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run an invocation with inherited stdio, awaiting completion.
///
/// The child's stdout and stderr stream straight through to the user;
/// nothing is captured or rewritten.
pub async fn run_streaming(invocation: &Invocation) -> Result<ExecOutcome, ExecError> {
    let start = Instant::now();
    let exec_span = tracing::info_span!(
        "kiln.exec",
        program = %invocation.program,
        args = ?invocation.args,
        exit_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );

    let mut command = tokio::process::Command::new(&invocation.program);
    command.args(&invocation.args);
    command.current_dir(&invocation.cwd);

    let mut child = command
        .spawn()
        .map_err(|source| ExecError::Spawn { program: invocation.program.clone(), source })?;
    let status = child
        .wait()
        .await
        .map_err(|source| ExecError::Spawn { program: invocation.program.clone(), source })?;

    let duration = start.elapsed();
    let exit_code = status.code().unwrap_or(-1);
    exec_span.record("exit_code", exit_code);
    exec_span.record("duration_ms", duration.as_millis() as u64);

    Ok(ExecOutcome { exit_code, duration })
}

/// Run an invocation with piped stdout/stderr, capturing both.
///
/// Services the flag helper query; everything user-facing goes through
/// [`run_streaming`].
pub async fn run_captured(invocation: &Invocation) -> Result<CapturedOutput, ExecError> {
    let mut command = tokio::process::Command::new(&invocation.program);
    command.args(&invocation.args);
    command.current_dir(&invocation.cwd);
    command.stdout(std::process::Stdio::piped());
    command.stderr(std::process::Stdio::piped());

    let output = command
        .output()
        .await
        .map_err(|source| ExecError::Spawn { program: invocation.program.clone(), source })?;

    Ok(CapturedOutput {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
