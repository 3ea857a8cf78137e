// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Optional `kiln.toml` project manifest

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Manifest file name looked up in the base directory.
pub const MANIFEST_NAME: &str = "kiln.toml";

fn default_compiler() -> String {
    "clang".to_string()
}

fn default_artifact() -> String {
    "main".to_string()
}

fn default_libs() -> Vec<String> {
    vec!["SDL2_ttf".to_string()]
}

fn default_pkg_helper() -> String {
    "sdl2-config".to_string()
}

fn default_runner() -> String {
    "leaks".to_string()
}

fn default_runner_args() -> Vec<String> {
    vec!["--atExit".to_string(), "--".to_string()]
}

/// Project configuration, read from `kiln.toml` when present.
///
/// Every field has a default; an absent or partial file behaves like the
/// fixed values documented per field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Compiler and link settings
    #[serde(default)]
    pub build: BuildConfig,
    /// Leak-check settings
    #[serde(default)]
    pub check: CheckConfig,
}

/// `[build]` table of `kiln.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Compiler executable (default "clang")
    #[serde(default = "default_compiler")]
    pub compiler: String,
    /// Output name passed to `-o` (default "main")
    #[serde(default = "default_artifact")]
    pub artifact: String,
    /// Libraries linked as `-l<name>` (default ["SDL2_ttf"])
    #[serde(default = "default_libs")]
    pub libs: Vec<String>,
    /// Extra compiler arguments, appended verbatim
    #[serde(default)]
    pub flags: Vec<String>,
    /// Flag helper queried with `--cflags --libs` (default "sdl2-config")
    #[serde(default = "default_pkg_helper")]
    pub pkg_helper: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            compiler: default_compiler(),
            artifact: default_artifact(),
            libs: default_libs(),
            flags: Vec::new(),
            pkg_helper: default_pkg_helper(),
        }
    }
}

impl BuildConfig {
    /// Libraries rendered as `-l<name>` argv tokens.
    pub fn lib_args(&self) -> Vec<String> {
        self.libs.iter().map(|l| format!("-l{l}")).collect()
    }
}

/// `[check]` table of `kiln.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Leak-check wrapper executable (default "leaks")
    #[serde(default = "default_runner")]
    pub runner: String,
    /// Wrapper arguments placed before the artifact (default ["--atExit", "--"])
    #[serde(default = "default_runner_args")]
    pub args: Vec<String>,
    /// Skip the check when the build failed (default false: always run)
    #[serde(default)]
    pub require_build: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self { runner: default_runner(), args: default_runner_args(), require_build: false }
    }
}

/// Errors from loading `kiln.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read `{}`: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("failed to parse `{}`: {source}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },
}

impl Config {
    /// Load `<dir>/kiln.toml`, or defaults when the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is a fatal error,
    /// never a silent fallback.
    pub fn load(dir: &Path) -> Result<Config, ConfigError> {
        let path = dir.join(MANIFEST_NAME);
        if !path.exists() {
            tracing::debug!(dir = %dir.display(), "no manifest, using defaults");
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(&path)
            .map_err(|source| ConfigError::Io { path: path.clone(), source })?;
        let config =
            toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
