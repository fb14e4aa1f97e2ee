// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Checks that must pass before anything else runs.

use crate::error::{Error, Result};
use crate::git;
use crate::runner::CommandRunner;

/// Require `git` and `linter` on the path and a git checkout as cwd.
pub fn check(runner: &dyn CommandRunner, linter: &str) -> Result<()> {
    for program in [git::GIT, linter] {
        if !runner.is_installed(program) {
            return Err(Error::MissingExecutable { name: program.to_string() });
        }
    }

    if !git::is_inside_work_tree(runner)? {
        return Err(Error::NotARepository);
    }
    Ok(())
}

#[cfg(test)]
#[path = "preflight_tests.rs"]
mod tests;
