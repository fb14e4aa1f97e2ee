// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Git queries used to find the change set.
//!
//! All calls shell out to `git` through a [`CommandRunner`].

use crate::error::{Error, Result};
use crate::runner::{CommandOutput, CommandRunner};

pub const GIT: &str = "git";

/// Diff classes that still have a file to lint (everything except deletions).
pub const DIFF_FILTER: &str = "--diff-filter=ACMRTUXB";

fn git(runner: &dyn CommandRunner, args: &[&str]) -> Result<CommandOutput> {
    runner.run(GIT, args)
}

/// Run git and return stdout, failing on a non-zero exit.
fn git_stdout(runner: &dyn CommandRunner, args: &[&str]) -> Result<String> {
    let output = git(runner, args)?;
    if !output.success() {
        return Err(Error::Git {
            command: args.first().copied().unwrap_or_default().to_string(),
            stderr: output.stderr.trim().to_string(),
        });
    }
    Ok(output.stdout)
}

/// Check if the working directory is inside a git checkout.
///
/// `git rev-parse --is-inside-work-tree` prints `false` inside the `.git`
/// directory itself; that still counts as a repository.
pub fn is_inside_work_tree(runner: &dyn CommandRunner) -> Result<bool> {
    let output = git(runner, &["rev-parse", "--is-inside-work-tree"])?;
    Ok(matches!(output.stdout.trim(), "true" | "false"))
}

/// Name of the checked-out branch (`HEAD` when detached).
///
/// Returns an empty string when git cannot tell, e.g. before the first commit.
pub fn current_branch(runner: &dyn CommandRunner) -> Result<String> {
    let output = git(runner, &["rev-parse", "--abbrev-ref", "HEAD"])?;
    if !output.success() {
        tracing::debug!(stderr = %output.stderr.trim(), "rev-parse --abbrev-ref HEAD failed");
        return Ok(String::new());
    }
    Ok(output.stdout.trim().to_string())
}

/// Default branch of `remote`.
///
/// Reads the locally cached `refs/remotes/<remote>/HEAD` first and only asks
/// the remote (`git remote show`, which needs network access) when that ref
/// is not set.
pub fn remote_default_branch(runner: &dyn CommandRunner, remote: &str) -> Result<Option<String>> {
    let head_ref = format!("refs/remotes/{remote}/HEAD");
    let local = git(runner, &["symbolic-ref", "--short", &head_ref])?;
    if local.success() {
        let prefix = format!("{remote}/");
        let name = local.stdout.trim();
        let name = name.strip_prefix(&prefix).unwrap_or(name);
        if !name.is_empty() {
            return Ok(Some(name.to_string()));
        }
    }

    let shown = git(runner, &["remote", "show", remote])?;
    if !shown.success() {
        tracing::debug!(remote, stderr = %shown.stderr.trim(), "git remote show failed");
    }
    Ok(parse_head_branch(&shown.stdout))
}

/// Extract the `HEAD branch:` value from `git remote show` output.
pub fn parse_head_branch(output: &str) -> Option<String> {
    output
        .lines()
        .find_map(|line| line.trim().strip_prefix("HEAD branch:"))
        .map(str::trim)
        .filter(|name| !name.is_empty() && *name != "(unknown)")
        .map(str::to_string)
}

/// Nearest common ancestor of `base_ref` and `source`.
pub fn merge_base(runner: &dyn CommandRunner, base_ref: &str, source: &str) -> Result<String> {
    let stdout = git_stdout(runner, &["merge-base", base_ref, source])?;
    Ok(stdout.trim().to_string())
}

/// Paths that differ between `base` and `source`, deletions excluded.
///
/// Uses `-z` so unusual file names come back unquoted.
pub fn diff_names(runner: &dyn CommandRunner, base: &str, source: &str) -> Result<Vec<String>> {
    let stdout = git_stdout(runner, &["diff", "--name-only", "-z", DIFF_FILTER, base, source])?;
    Ok(parse_name_list(&stdout))
}

/// Split NUL-separated `--name-only -z` output.
pub fn parse_name_list(output: &str) -> Vec<String> {
    output
        .split('\0')
        .map(|name| name.trim_end_matches('\n'))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
