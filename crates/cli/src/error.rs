// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and exit codes.

use thiserror::Error;

/// Fatal conditions that stop a run before (or instead of) linting.
///
/// Every variant maps to [`ExitCode::Fatal`]. Normal terminations such as
/// an empty change set or a declined prompt are not errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{name} is required to run this command")]
    MissingExecutable { name: String },

    #[error("this command will only work in a git repository")]
    NotARepository,

    #[error("could not determine the source branch (is HEAD pointing at a commit?)")]
    UnresolvedSource,

    #[error(
        "could not determine the default branch of remote '{remote}', pass the target branch explicitly"
    )]
    UnresolvedTarget { remote: String },

    #[error("git {command} failed: {stderr}")]
    Git { command: String, stderr: String },

    #[error("cannot ask for confirmation ({message}), pass --disable-prompt to skip it")]
    Prompt { message: String },

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Linting passed, nothing to lint, or the user declined.
    Success,
    /// Missing dependency, not a repository, or another [`Error`].
    Fatal,
    /// Exit status reported by the linter itself.
    Linter(i32),
}

impl ExitCode {
    pub fn code(self) -> i32 {
        match self {
            ExitCode::Success => 0,
            ExitCode::Fatal => 1,
            ExitCode::Linter(code) => code,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        // Statuses outside 0..=255 cannot be reported faithfully on unix.
        match u8::try_from(code.code()) {
            Ok(status) => std::process::ExitCode::from(status),
            Err(_) => std::process::ExitCode::FAILURE,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
