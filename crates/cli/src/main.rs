// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lint_diff_branch::app;
use lint_diff_branch::cli::Cli;
use lint_diff_branch::color::resolve_color;
use lint_diff_branch::error::ExitCode;
use lint_diff_branch::prompt::TerminalPrompter;
use lint_diff_branch::report::Reporter;
use lint_diff_branch::runner::SystemRunner;

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "LINT_DIFF_BRANCH_LOG";

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let choice = resolve_color(cli.color, cli.no_color);
    let mut reporter = Reporter::stdout(choice);
    let runner = SystemRunner::new();
    let mut prompter = TerminalPrompter;

    let code = match app::run(&cli, &runner, &mut prompter, &mut reporter) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            let mut stderr = Reporter::stderr(choice);
            if stderr.error(&err.to_string()).is_err() {
                eprintln!("error: {err}");
            }
            ExitCode::Fatal
        }
    };
    code.into()
}

/// Route `tracing` events to stderr.
///
/// `LINT_DIFF_BRANCH_LOG` takes precedence; otherwise `--debug` selects
/// `debug` and the default is `warn`.
fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
