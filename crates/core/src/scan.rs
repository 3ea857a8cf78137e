// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive `.c` source discovery

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extension selected by the scanner. Compared exactly; `foo.C` is not a match.
pub const SOURCE_EXTENSION: &str = "c";

/// The `.c` files found under a base directory.
///
/// Paths are relative to `base`, in traversal order (per-directory
/// enumeration order, depth-first descent). Nothing sorts them.
#[derive(Debug, Clone)]
pub struct SourceSet {
    /// Directory the scan started from.
    pub base: PathBuf,
    /// Base-relative paths to every matching file.
    pub files: Vec<PathBuf>,
}

impl SourceSet {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(PathBuf::as_path)
    }

    /// Space-joined relative paths, for the one-line build report.
    pub fn relative_display(&self) -> String {
        self.files.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(" ")
    }
}

/// Errors from source scanning. Any failure aborts the scan; partial results
/// are never returned.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("`{}` is not a directory", path.display())]
    NotADirectory { path: PathBuf },
    #[error("failed to read `{}`: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
}

/// Recursively collect every `.c` file under `base`.
///
/// Descends into hidden directories like any other. A file named exactly
/// `.c` has no extension and is skipped. Descent has no depth limit and no
/// symlink-cycle protection.
pub fn scan_sources(base: &Path) -> Result<SourceSet, ScanError> {
    if !base.is_dir() {
        return Err(ScanError::NotADirectory { path: base.to_path_buf() });
    }
    let mut files = Vec::new();
    let mut stack = vec![base.to_path_buf()];
    while let Some(current) = stack.pop() {
        let entries = std::fs::read_dir(&current)
            .map_err(|source| ScanError::Io { path: current.clone(), source })?;
        for entry in entries {
            let entry =
                entry.map_err(|source| ScanError::Io { path: current.clone(), source })?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|e| e == SOURCE_EXTENSION) {
                files.push(path.strip_prefix(base).unwrap_or(&path).to_path_buf());
            } else if path.is_dir() {
                stack.push(path);
            }
        }
    }
    tracing::debug!(base = %base.display(), count = files.len(), "scanned sources");
    Ok(SourceSet { base: base.to_path_buf(), files })
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
