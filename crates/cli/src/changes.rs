// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Change-set collection and script filtering.

use std::ffi::OsStr;
use std::path::Path;

use crate::error::Result;
use crate::git;
use crate::runner::CommandRunner;

/// Extensions kept by the script-only filter.
pub const SCRIPT_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "mjsx", "cjs", "cjsx"];

/// Files changed on the source side, before and after filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    /// Every added, copied, modified, renamed or otherwise changed path.
    pub changed: Vec<String>,
    /// The subset handed to the linter.
    pub to_lint: Vec<String>,
}

/// Whether `path` has a JavaScript/TypeScript-family extension.
pub fn is_script(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| SCRIPT_EXTENSIONS.contains(&ext))
}

/// Keep script files when `only_script` is set, otherwise everything.
pub fn filter_files(files: &[String], only_script: bool) -> Vec<String> {
    files
        .iter()
        .filter(|file| !only_script || is_script(file))
        .cloned()
        .collect()
}

/// Diff `source` against its merge-base with `<remote>/<target>`.
pub fn collect(
    runner: &dyn CommandRunner,
    remote: &str,
    target: &str,
    source: &str,
    only_script: bool,
) -> Result<ChangeSet> {
    let base_ref = format!("{remote}/{target}");
    let base = git::merge_base(runner, &base_ref, source)?;
    tracing::debug!(%base_ref, %base, source, "resolved merge-base");

    let changed = git::diff_names(runner, &base, source)?;
    let to_lint = filter_files(&changed, only_script);
    Ok(ChangeSet { changed, to_lint })
}

#[cfg(test)]
#[path = "changes_tests.rs"]
mod tests;
