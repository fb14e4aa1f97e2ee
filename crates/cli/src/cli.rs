//! CLI argument parsing with clap derive.

use clap::Parser;
use clap::builder::FalseyValueParser;

use crate::branch::DEFAULT_TARGET;
use crate::color::ColorMode;
use crate::lint::DEFAULT_LINTER;

/// Run a linter on the JS/TS files changed against a target branch
#[derive(Debug, Parser)]
#[command(name = "lint-diff-branch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Target branch, `default` resolves the remote's default branch
    #[arg(value_name = "TARGET", default_value = DEFAULT_TARGET)]
    pub target: String,

    /// Source branch [default: the checked-out branch]
    #[arg(long, value_name = "BRANCH")]
    pub source: Option<String>,

    /// Compare HEAD instead of the source branch (ignores --source, use in detached HEAD / CI)
    #[arg(long)]
    pub head: bool,

    /// Lint every changed file, not only **/*.?([cm])[jt]s?(x)
    #[arg(long = "no-only-script", alias = "no-onlyScript")]
    pub all_files: bool,

    /// Auto-fix issues (passes --fix to the linter)
    #[arg(long)]
    pub fix: bool,

    /// Report errors only (passes --quiet to the linter)
    #[arg(long)]
    pub quiet: bool,

    /// Start linting without asking for confirmation
    #[arg(long, alias = "disablePrompt")]
    pub disable_prompt: bool,

    /// Print debug information
    #[arg(long, env = "LINT_DIFF_BRANCH_DEBUG", value_parser = FalseyValueParser::new())]
    pub debug: bool,

    /// Linter executable
    #[arg(long, env = "LINT_DIFF_BRANCH_LINTER", default_value = DEFAULT_LINTER, value_name = "PROGRAM")]
    pub linter: String,

    /// Remote that tracks the target branch
    #[arg(long, env = "LINT_DIFF_BRANCH_REMOTE", default_value = "origin", value_name = "NAME")]
    pub remote: String,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Whether only script files are linted.
    pub fn only_script(&self) -> bool {
        !self.all_files
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
