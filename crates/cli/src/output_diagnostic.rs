// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostics on stderr: fatal errors and skipped input lines.
//!
//! Colored when stderr is a terminal, plain otherwise.

use std::io::{self, IsTerminal, Write};

use crate::runtime::RuntimeError;

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Error: {}", msg);
    }
}

/// Report an input line that was left out of the rendered output.
pub fn print_skipped(err: &RuntimeError) {
    let is_tty = io::stderr().is_terminal();
    write_skipped(&mut io::stderr(), err, is_tty);
}

/// Warning for a skipped line, in yellow on a terminal.
///
/// The error text already names the line number.
fn write_skipped<W: Write>(writer: &mut W, err: &RuntimeError, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[33mWarning: {} (skipped)\x1b[0m", err);
    } else {
        let _ = writeln!(writer, "Warning: {} (skipped)", err);
    }
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
