// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use yare::parameterized;

use super::*;

#[parameterized(
    y = { "y\n", true },
    yes_upper = { "YES\n", true },
    enter = { "\n", true },
    crlf = { "y\r\n", true },
    n = { "n\n", false },
    no = { "no\n", false },
    other = { "maybe\n", false },
)]
fn piped_answer(input: &str, expected: bool) {
    assert_eq!(read_answer(input.as_bytes()).unwrap(), expected);
}

#[test]
fn end_of_input_declines() {
    assert!(!read_answer("".as_bytes()).unwrap());
}

#[test]
fn only_first_line_counts() {
    assert!(!read_answer("no\nyes\n".as_bytes()).unwrap());
}
