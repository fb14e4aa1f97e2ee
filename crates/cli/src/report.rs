// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing status output.
//!
//! Status lines start with a colored badge; linter output is echoed as-is.

use std::io::{self, Write};

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::color::scheme;

const SUCCESS: &str = "✔";
const INFO: &str = "ℹ";
const START: &str = "◐";
const WARN: &str = "⚠";
const FATAL: &str = "✖";

/// Writes status lines to a color-capable stream.
pub struct Reporter<W> {
    out: W,
}

impl Reporter<StandardStream> {
    pub fn stdout(choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(choice))
    }

    pub fn stderr(choice: ColorChoice) -> Self {
        Self::new(StandardStream::stderr(choice))
    }
}

impl<W: WriteColor> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Whether the underlying stream emits color codes.
    pub fn colored(&self) -> bool {
        self.out.supports_color()
    }

    fn badge(&mut self, spec: &ColorSpec, badge: &str) -> io::Result<()> {
        self.out.set_color(spec)?;
        write!(self.out, "{badge}")?;
        self.out.reset()?;
        write!(self.out, " ")
    }

    fn status(&mut self, spec: &ColorSpec, badge: &str, message: &str) -> io::Result<()> {
        self.badge(spec, badge)?;
        writeln!(self.out, "{message}")
    }

    pub fn success(&mut self, message: &str) -> io::Result<()> {
        self.status(&scheme::success(), SUCCESS, message)
    }

    pub fn info(&mut self, message: &str) -> io::Result<()> {
        self.status(&scheme::info(), INFO, message)
    }

    pub fn start(&mut self, message: &str) -> io::Result<()> {
        self.status(&scheme::start(), START, message)
    }

    pub fn warn(&mut self, message: &str) -> io::Result<()> {
        self.status(&scheme::warn(), WARN, message)
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        self.status(&scheme::fatal(), FATAL, message)
    }

    /// `✖ Run <linter> command "<command>" failed:` with the command highlighted.
    pub fn command_failed(&mut self, linter: &str, command: &str) -> io::Result<()> {
        self.badge(&scheme::fatal(), FATAL)?;
        write!(self.out, "Run {linter} command ")?;
        self.out.set_color(&scheme::path())?;
        write!(self.out, "\"{command}\"")?;
        self.out.reset()?;
        writeln!(self.out, " failed:")
    }

    /// Indented bullet list of paths.
    pub fn files(&mut self, files: &[String]) -> io::Result<()> {
        for file in files {
            write!(self.out, "  - ")?;
            self.out.set_color(&scheme::path())?;
            write!(self.out, "{file}")?;
            self.out.reset()?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Echo captured output verbatim, ending with a newline.
    pub fn echo(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        if !text.ends_with('\n') {
            writeln!(self.out)?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
