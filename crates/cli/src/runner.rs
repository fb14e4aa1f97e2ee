// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! External command execution.
//!
//! Every git query and the linter itself go through [`CommandRunner`], so
//! the pipeline can be driven by a scripted fake in tests.

use std::path::PathBuf;
use std::process::Command;

use crate::error::{Error, Result};

/// Exit status reported when a process was terminated by a signal.
pub const SIGNALLED_EXIT_CODE: i32 = 1;

/// Captured result of one external process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Runs external programs and captures their output.
pub trait CommandRunner {
    /// Run `program` with `args` to completion, capturing stdout and stderr.
    ///
    /// A non-zero exit is not an error; only failing to spawn is.
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;

    /// Whether `program` resolves to an executable.
    fn is_installed(&self, program: &str) -> bool;
}

/// Runs real processes, optionally from a fixed working directory.
#[derive(Debug, Default)]
pub struct SystemRunner {
    cwd: Option<PathBuf>,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self { cwd: Some(dir.into()) }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|source| Error::Spawn {
            program: program.to_string(),
            source,
        })?;
        let code = output.status.code().unwrap_or(SIGNALLED_EXIT_CODE);
        tracing::debug!(program, ?args, code, "command finished");

        Ok(CommandOutput {
            code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn is_installed(&self, program: &str) -> bool {
        match &self.cwd {
            Some(dir) => {
                let path = std::env::var_os("PATH");
                which::which_in(program, path, dir).is_ok()
            }
            None => which::which(program).is_ok(),
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
