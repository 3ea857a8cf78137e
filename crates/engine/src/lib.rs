// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! kiln-engine: tool invocations, flag queries, process execution

pub mod exec;
pub mod flags;
pub mod invocation;

pub use exec::{run_captured, run_streaming, CapturedOutput, ExecError, ExecOutcome};
pub use flags::{query_helper_flags, split_flags, FlagsError};
pub use invocation::{check_invocation, compile_invocation, Invocation};
