// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! kiln-core: Core library for the kiln CLI tool

pub mod config;
pub mod scan;

pub use config::{BuildConfig, CheckConfig, Config, ConfigError, MANIFEST_NAME};
pub use scan::{scan_sources, ScanError, SourceSet, SOURCE_EXTENSION};
