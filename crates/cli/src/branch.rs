// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Source and target branch resolution.

use crate::error::{Error, Result};
use crate::git;
use crate::runner::CommandRunner;

/// Target argument that stands for the remote's default branch.
pub const DEFAULT_TARGET: &str = "default";

/// Source reference used in head mode.
pub const HEAD: &str = "HEAD";

/// Resolve the source reference.
///
/// Head mode wins over an explicit `source`; without either, the checked-out
/// branch is used.
pub fn resolve_source(
    runner: &dyn CommandRunner,
    head: bool,
    source: Option<&str>,
) -> Result<String> {
    let source = if head {
        HEAD.to_string()
    } else {
        match source {
            Some(name) => name.trim().to_string(),
            None => git::current_branch(runner)?,
        }
    };

    if source.is_empty() {
        return Err(Error::UnresolvedSource);
    }
    Ok(source)
}

/// Resolve the target branch name (without the remote prefix).
pub fn resolve_target(runner: &dyn CommandRunner, target: &str, remote: &str) -> Result<String> {
    let target = target.trim();
    let resolved = if target == DEFAULT_TARGET {
        git::remote_default_branch(runner, remote)?.unwrap_or_default()
    } else {
        target.to_string()
    };

    if resolved.is_empty() {
        return Err(Error::UnresolvedTarget { remote: remote.to_string() });
    }
    Ok(resolved)
}

#[cfg(test)]
#[path = "branch_tests.rs"]
mod tests;
