// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `kiln sources` — list the files a build would compile.

use anyhow::Result;
use std::path::Path;

use crate::output::{format_or_json, sources_json, OutputFormat};

pub fn handle(dir: &Path, format: OutputFormat) -> Result<()> {
    let set = kiln_core::scan_sources(dir)?;

    if set.is_empty() && format == OutputFormat::Text {
        eprintln!("No .c sources found under {}", set.base.display());
        return Ok(());
    }

    format_or_json(format, &sources_json(&set), || {
        for file in set.iter() {
            println!("{}", file.display());
        }
    })
}
