// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Explicit argv construction for the external tools

use kiln_core::{BuildConfig, CheckConfig, SourceSet};
use std::fmt;
use std::path::{Path, PathBuf};

/// One external tool invocation: program, discrete argv, working directory.
///
/// Arguments are never joined back through a shell. `Display` renders the
/// space-joined form for logs and verbose mode only.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Build the compile command for every scanned source.
///
/// `<compiler> -o <artifact> <sources...> <-l libs...> <flags...> <helper flags...>`
///
/// Source paths are passed relative to the working directory, exactly as
/// scanned.
pub fn compile_invocation(
    sources: &SourceSet,
    build: &BuildConfig,
    helper_flags: &[String],
) -> Invocation {
    let mut args = vec!["-o".to_string(), build.artifact.clone()];
    args.extend(sources.iter().map(|p| p.display().to_string()));
    args.extend(build.lib_args());
    args.extend(build.flags.iter().cloned());
    args.extend(helper_flags.iter().cloned());
    Invocation { program: build.compiler.clone(), args, cwd: sources.base.clone() }
}

/// Build the leak-check command for the artifact in `dir`.
///
/// The artifact gets an explicit `./` prefix so the wrapper resolves it in
/// the working directory rather than on `PATH`.
pub fn check_invocation(check: &CheckConfig, artifact: &str, dir: &Path) -> Invocation {
    let mut args = check.args.clone();
    args.push(format!("./{artifact}"));
    Invocation { program: check.runner.clone(), args, cwd: dir.to_path_buf() }
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
