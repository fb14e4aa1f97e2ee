// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color mode resolution and the terminal color scheme.

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// `--color` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Resolve the color choice for stdout.
///
/// `--no-color` and a non-empty `NO_COLOR` disable colors in every mode.
pub fn resolve_color(mode: ColorMode, no_color: bool) -> ColorChoice {
    let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    resolve(mode, no_color || no_color_env, std::io::stdout().is_terminal())
}

/// Resolution without touching the environment. Only returns `Always` or
/// `Never`, so the answer can also be forwarded to the linter.
pub fn resolve(mode: ColorMode, no_color: bool, is_terminal: bool) -> ColorChoice {
    if no_color {
        return ColorChoice::Never;
    }
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto if is_terminal => ColorChoice::Always,
        ColorMode::Auto => ColorChoice::Never,
    }
}

pub mod scheme {
    use termcolor::{Color, ColorSpec};

    fn bold(color: Color) -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(color)).set_bold(true);
        spec
    }

    /// Success badge.
    pub fn success() -> ColorSpec {
        bold(Color::Green)
    }

    /// Informational badge.
    pub fn info() -> ColorSpec {
        bold(Color::Cyan)
    }

    /// Start-of-step badge.
    pub fn start() -> ColorSpec {
        bold(Color::Magenta)
    }

    /// Linter reported issues.
    pub fn warn() -> ColorSpec {
        bold(Color::Yellow)
    }

    /// Fatal errors and a failing linter.
    pub fn fatal() -> ColorSpec {
        bold(Color::Red)
    }

    /// File paths and command lines.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
