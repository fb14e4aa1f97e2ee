// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Debug output for `--debug`.
//!
//! Writes to stderr, framed by start/end banners, only when enabled.

/// Debug output logger. Writes to stderr when enabled.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print `=== <title> ===` on its own paragraph.
    pub fn banner(&self, title: &str) {
        if self.enabled {
            eprintln!("\n=== {title} ===\n");
        }
    }

    /// Print `- label: value`.
    pub fn field(&self, label: &str, value: &str) {
        if self.enabled {
            eprintln!("- {label}: {value}");
        }
    }

    /// Print a labelled list, one item per line.
    pub fn list(&self, label: &str, items: &[String]) {
        if self.enabled {
            eprint!("{}", format_list(label, items));
        }
    }
}

/// Render a labelled list. Empty lists render as `[]`.
pub fn format_list(label: &str, items: &[String]) -> String {
    if items.is_empty() {
        return format!("- {label}: []\n");
    }
    let mut out = format!("- {label}:\n");
    for item in items {
        out.push_str("    ");
        out.push_str(item);
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
