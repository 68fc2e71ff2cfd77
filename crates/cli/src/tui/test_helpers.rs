// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! TUI testing utilities.
//!
//! Styled status lines carry SGR color codes; these helpers recover the
//! visible text, its terminal width and the color codes themselves.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

/// Regex for matching ANSI SGR (Select Graphic Rendition) escape sequences.
/// Matches ESC [ followed by semicolon-separated numbers, ending with 'm'.
static ANSI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: This regex pattern is a compile-time constant and is guaranteed to be valid
    #[allow(clippy::expect_used)]
    Regex::new(r"\x1b\[([0-9;]*)m").expect("ANSI regex pattern is invalid")
});

/// A parsed SGR sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AnsiSequence {
    /// 24-bit RGB foreground color: ESC[38;2;R;G;Bm
    FgRgb { r: u8, g: u8, b: u8 },
    /// Reset all attributes: ESC[0m
    Reset,
    /// Anything else, kept as its parameter string
    Other(String),
}

impl AnsiSequence {
    fn from_params(params: &str) -> Self {
        let parts: Vec<&str> = params.split(';').collect();
        match parts.as_slice() {
            ["0"] | [""] => AnsiSequence::Reset,
            ["38", "2", r, g, b] => match (r.parse(), g.parse(), b.parse()) {
                (Ok(r), Ok(g), Ok(b)) => AnsiSequence::FgRgb { r, g, b },
                _ => AnsiSequence::Other(params.to_string()),
            },
            _ => AnsiSequence::Other(params.to_string()),
        }
    }
}

/// Strip all ANSI escape sequences, returning plain text.
pub(crate) fn strip_ansi(input: &str) -> String {
    ANSI_REGEX.replace_all(input, "").to_string()
}

/// Terminal column width of the visible text.
pub(crate) fn display_width(input: &str) -> usize {
    strip_ansi(input).width()
}

/// Extract the SGR sequences in order of appearance.
pub(crate) fn extract_sequences(input: &str) -> Vec<AnsiSequence> {
    ANSI_REGEX
        .captures_iter(input)
        .map(|cap| AnsiSequence::from_params(cap.get(1).map_or("", |m| m.as_str())))
        .collect()
}

#[cfg(test)]
#[path = "test_helpers_tests.rs"]
mod tests;
