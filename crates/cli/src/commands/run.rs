// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `kiln run` — build, then leak-check the artifact.

use anyhow::Result;
use std::path::Path;

use kiln_core::Config;

use crate::color;
use crate::exit_error::ExitError;

use super::build::{self, BuildStatus};
use super::check;

/// The default command: the whole build-and-check sequence.
///
/// The check runs even after a failed build unless `check.require_build`
/// is set; the process exit code is whatever the checker exits with.
pub async fn handle(dir: &Path) -> Result<()> {
    let config = Config::load(dir)?;
    let status = build::execute(dir, &config).await?;

    if config.check.require_build && status == BuildStatus::Failed {
        eprintln!("{}", color::muted("Leak check skipped: build failed"));
        return Err(ExitError::code(1).into());
    }

    check::execute(dir, &config).await
}
