// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use kiln_core::SourceSet;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One-line build report naming every input file and the artifact.
pub fn compile_success_line(sources: &SourceSet, artifact: &str) -> String {
    format!("Compiled {} -> {}", sources.relative_display(), crate::color::header(artifact))
}

/// JSON payload for `kiln sources --output json`.
pub fn sources_json(set: &SourceSet) -> serde_json::Value {
    serde_json::json!({
        "base": set.base.to_string_lossy(),
        "files": set.files.iter().map(|p| p.to_string_lossy()).collect::<Vec<_>>(),
    })
}

/// Format-branch helper for listing commands.
///
/// Renders as JSON when `format` is `Json`, otherwise calls `text_fn`.
pub fn format_or_json<T: Serialize>(
    format: OutputFormat,
    data: &T,
    text_fn: impl FnOnce(),
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Text => {
            text_fn();
        }
    }
    Ok(())
}
