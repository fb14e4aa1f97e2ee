//! Shared unit test utilities.
//!
//! Provides a scripted [`CommandRunner`] and [`Prompter`] so the pipeline
//! can be exercised without spawning processes or reading a terminal.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::error::Result;
use crate::prompt::Prompter;
use crate::runner::{CommandOutput, CommandRunner};

/// Successful output with the given stdout.
pub fn ok(stdout: &str) -> CommandOutput {
    CommandOutput { code: 0, stdout: stdout.to_string(), stderr: String::new() }
}

/// Output with an exit code and both streams.
pub fn output(code: i32, stdout: &str, stderr: &str) -> CommandOutput {
    CommandOutput { code, stdout: stdout.to_string(), stderr: stderr.to_string() }
}

/// A runner that answers from a table keyed by the full command line.
///
/// Unscripted commands exit 1 with an "unexpected command" message.
#[derive(Default)]
pub struct FakeRunner {
    responses: HashMap<String, CommandOutput>,
    missing: HashSet<String>,
    calls: RefCell<Vec<String>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the output of `command_line` (program and args joined by spaces).
    pub fn on(mut self, command_line: &str, output: CommandOutput) -> Self {
        self.responses.insert(command_line.to_string(), output);
        self
    }

    /// Make `program` unresolvable.
    pub fn missing(mut self, program: &str) -> Self {
        self.missing.insert(program.to_string());
        self
    }

    /// Command lines run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Whether any command line starting with `prefix` ran.
    pub fn ran(&self, prefix: &str) -> bool {
        self.calls.borrow().iter().any(|call| call.starts_with(prefix))
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let mut line = program.to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        self.calls.borrow_mut().push(line.clone());
        Ok(self
            .responses
            .get(&line)
            .cloned()
            .unwrap_or_else(|| output(1, "", &format!("unexpected command: {line}"))))
    }

    fn is_installed(&self, program: &str) -> bool {
        !self.missing.contains(program)
    }
}

/// A repository on branch `feature` whose `origin` default branch is `main`,
/// with merge-base `abc123` and the given changed files.
pub fn feature_repo(changed: &[&str]) -> FakeRunner {
    let mut diff = changed.join("\0");
    if !diff.is_empty() {
        diff.push('\0');
    }
    FakeRunner::new()
        .on("git rev-parse --is-inside-work-tree", ok("true\n"))
        .on("git rev-parse --abbrev-ref HEAD", ok("feature\n"))
        .on("git symbolic-ref --short refs/remotes/origin/HEAD", ok("origin/main\n"))
        .on("git merge-base origin/main feature", ok("abc123\n"))
        .on(
            "git diff --name-only -z --diff-filter=ACMRTUXB abc123 feature",
            ok(&diff),
        )
}

/// A prompter that always gives the same answer and records questions.
pub struct FakePrompter {
    answer: bool,
    pub asked: Vec<String>,
}

impl FakePrompter {
    pub fn answering(answer: bool) -> Self {
        Self { answer, asked: Vec::new() }
    }
}

impl Prompter for FakePrompter {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        self.asked.push(question.to_string());
        Ok(self.answer)
    }
}
