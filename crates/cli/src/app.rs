// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The lint pipeline: preflight, resolve, collect, confirm, lint.

use termcolor::WriteColor;

use crate::branch;
use crate::changes::{self, ChangeSet};
use crate::cli::Cli;
use crate::error::{ExitCode, Result};
use crate::lint::{LintCommand, LintVerdict};
use crate::preflight;
use crate::prompt::Prompter;
use crate::report::Reporter;
use crate::runner::CommandRunner;
use crate::verbose::VerboseLogger;

pub const CONFIRM_QUESTION: &str = "Start linting these files?";

/// How a run ended without a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing left to lint after filtering.
    NoFiles,
    /// The user declined the prompt.
    Aborted,
    /// The linter ran and exited with `code`.
    Linted { code: i32 },
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::NoFiles | Outcome::Aborted => ExitCode::Success,
            Outcome::Linted { code: 0 } => ExitCode::Success,
            Outcome::Linted { code } => ExitCode::Linter(code),
        }
    }
}

/// Run the whole pipeline for one invocation.
pub fn run<W: WriteColor>(
    cli: &Cli,
    runner: &dyn CommandRunner,
    prompter: &mut dyn Prompter,
    reporter: &mut Reporter<W>,
) -> Result<Outcome> {
    preflight::check(runner, &cli.linter)?;

    let source = branch::resolve_source(runner, cli.head, cli.source.as_deref())?;
    let target = branch::resolve_target(runner, &cli.target, &cli.remote)?;
    let changes = changes::collect(runner, &cli.remote, &target, &source, cli.only_script())?;

    debug_info(&VerboseLogger::new(cli.debug), &source, &target, &changes);

    if changes.to_lint.is_empty() {
        reporter.success(&format!("No changed files available for {}. All good!", cli.linter))?;
        return Ok(Outcome::NoFiles);
    }

    let kind = if cli.only_script() { "JS/TS files" } else { "files" };
    reporter.info(&format!("Changed {kind} against {}/{target}:", cli.remote))?;
    reporter.files(&changes.to_lint)?;

    if !cli.disable_prompt && !prompter.confirm(CONFIRM_QUESTION)? {
        reporter.info("Aborted. Well, maybe next time.")?;
        return Ok(Outcome::Aborted);
    }

    reporter.start(&format!("Start linting changed {kind}..."))?;
    let command = LintCommand::new(cli.linter.as_str(), changes.to_lint)
        .fix(cli.fix)
        .quiet(cli.quiet)
        .color(reporter.colored());
    let report = command.run(runner)?;
    tracing::debug!(code = report.code, "linter finished");

    // The linter's exit code is the result from here on; output is best effort.
    if let Err(err) = show_verdict(reporter, &command, &report.verdict) {
        tracing::warn!(error = %err, "failed to write linter output");
    }

    Ok(Outcome::Linted { code: report.code })
}

fn show_verdict<W: WriteColor>(
    reporter: &mut Reporter<W>,
    command: &LintCommand,
    verdict: &LintVerdict,
) -> std::io::Result<()> {
    match verdict {
        LintVerdict::Failed(stderr) => {
            reporter.command_failed(command.program(), &command.to_string())?;
            reporter.echo(stderr)
        }
        LintVerdict::Issues(stdout) => {
            reporter.warn("Done. Please check and fix the issues below:")?;
            reporter.echo(stdout)
        }
        LintVerdict::Clean => reporter.success("Done. No errors/warnings found, good job!"),
    }
}

fn debug_info(verbose: &VerboseLogger, source: &str, target: &str, changes: &ChangeSet) {
    if !verbose.is_enabled() {
        return;
    }
    verbose.banner("DEBUG INFO start");
    verbose.field("Source branch", source);
    verbose.field("Target branch", target);
    verbose.list("All changed files", &changes.changed);
    verbose.list("Files to lint", &changes.to_lint);
    verbose.banner("DEBUG INFO end");
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
