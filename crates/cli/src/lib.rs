// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run a linter over the files changed between a branch and its target.
//!
//! The binary is a thin shell around [`app::run`]; every external process
//! goes through [`runner::CommandRunner`].

pub mod app;
pub mod branch;
pub mod changes;
pub mod cli;
pub mod color;
pub mod error;
pub mod git;
pub mod lint;
pub mod preflight;
pub mod prompt;
pub mod report;
pub mod runner;
pub mod verbose;

#[cfg(test)]
pub mod test_utils;
