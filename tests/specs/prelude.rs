//! Test helpers for behavioral specifications.
//!
//! Builds throwaway git repositories with an `origin` remote and runs the
//! lint-diff-branch binary inside them.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Returns a Command configured to run the lint-diff-branch binary.
///
/// Colors are off and git is kept from discovering repositories above the
/// temp directory.
pub fn lint_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("lint-diff-branch"));
    cmd.arg("--color").arg("never");
    cmd.env("GIT_CEILING_DIRECTORIES", std::env::temp_dir());
    cmd.env_remove("LINT_DIFF_BRANCH_LINTER");
    cmd.env_remove("LINT_DIFF_BRANCH_REMOTE");
    cmd.env_remove("LINT_DIFF_BRANCH_DEBUG");
    cmd
}

/// Run git in `dir`, panicking on failure.
pub fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(["-c", "user.email=test@example.com", "-c", "user.name=Test User"])
        .args(["-c", "commit.gpgsign=false"])
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git should run");
    assert!(output.status.success(), "git {args:?} failed: {output:?}");
}

/// A working clone on branch `feature`, forked from `origin/main`.
pub struct Repo {
    _temp: TempDir,
    work: PathBuf,
}

impl Repo {
    /// Create `origin` (bare) and a working copy with one commit on `main`,
    /// pushed, with `origin/HEAD` pointing at `main`.
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let origin = temp.path().join("origin.git");
        let work = temp.path().join("work");
        std::fs::create_dir_all(&origin).unwrap();
        std::fs::create_dir_all(&work).unwrap();

        git(&origin, &["init", "-q", "--bare"]);
        git(&work, &["init", "-q"]);
        git(&work, &["symbolic-ref", "HEAD", "refs/heads/main"]);
        std::fs::write(work.join("README.md"), "# Project\n").unwrap();
        std::fs::write(work.join("old.js"), "module.exports = {}\n").unwrap();
        git(&work, &["add", "."]);
        git(&work, &["commit", "-q", "-m", "chore: initial commit"]);
        git(&work, &["remote", "add", "origin", origin.to_str().unwrap()]);
        git(&work, &["push", "-q", "origin", "main"]);
        git(&work, &["remote", "set-head", "origin", "main"]);
        git(&work, &["checkout", "-q", "-b", "feature"]);

        Self { _temp: temp, work }
    }

    pub fn path(&self) -> &Path {
        &self.work
    }

    /// Write files and commit them on the current branch.
    pub fn commit(&self, files: &[(&str, &str)], message: &str) {
        for (path, content) in files {
            let full = self.work.join(path);
            if let Some(parent) = full.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(full, content).unwrap();
            git(&self.work, &["add", path]);
        }
        git(&self.work, &["commit", "-q", "-m", message]);
    }

    /// lint-diff-branch command running inside the working copy.
    pub fn cmd(&self) -> Command {
        let mut cmd = lint_cmd();
        cmd.current_dir(&self.work);
        cmd
    }
}
