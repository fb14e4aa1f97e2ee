// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Linter command construction and result classification.

use std::fmt;

use crate::error::Result;
use crate::runner::{CommandOutput, CommandRunner};

pub const DEFAULT_LINTER: &str = "eslint";

/// One linter invocation over a file list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintCommand {
    program: String,
    files: Vec<String>,
    fix: bool,
    quiet: bool,
    color: bool,
}

impl LintCommand {
    pub fn new(program: impl Into<String>, files: Vec<String>) -> Self {
        Self { program: program.into(), files, fix: false, quiet: false, color: true }
    }

    /// Pass `--fix`.
    pub fn fix(mut self, fix: bool) -> Self {
        self.fix = fix;
        self
    }

    /// Pass `--quiet` (errors only).
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// `--color` when true, `--no-color` otherwise.
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Files first, then flags.
    pub fn args(&self) -> Vec<String> {
        let mut args = self.files.clone();
        args.push(if self.color { "--color" } else { "--no-color" }.to_string());
        if self.fix {
            args.push("--fix".to_string());
        }
        if self.quiet {
            args.push("--quiet".to_string());
        }
        args
    }

    pub fn run(&self, runner: &dyn CommandRunner) -> Result<LintReport> {
        let args = self.args();
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let output = runner.run(&self.program, &args)?;
        Ok(LintReport { code: output.code, verdict: LintVerdict::classify(output) })
    }
}

impl fmt::Display for LintCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in self.args() {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// What the linter wrote, in order of precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintVerdict {
    /// Anything on stderr.
    Failed(String),
    /// Nothing on stderr, something on stdout.
    Issues(String),
    /// Silent run.
    Clean,
}

impl LintVerdict {
    pub fn classify(output: CommandOutput) -> Self {
        if !output.stderr.is_empty() {
            LintVerdict::Failed(output.stderr)
        } else if !output.stdout.is_empty() {
            LintVerdict::Issues(output.stdout)
        } else {
            LintVerdict::Clean
        }
    }
}

/// Linter exit status with its classified output.
///
/// `code` is reported as the process exit status regardless of the verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintReport {
    pub code: i32,
    pub verdict: LintVerdict,
}

#[cfg(test)]
#[path = "lint_tests.rs"]
mod tests;
