// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status line color definitions and styled text helpers.

/// Blue for the in-progress spinner: RGB(37, 99, 235)
pub const SPINNER_BLUE: (u8, u8, u8) = (37, 99, 235);

/// Emerald for the completion mark: RGB(16, 185, 129)
pub const DONE_EMERALD: (u8, u8, u8) = (16, 185, 129);

/// Gray for the status message: RGB(153, 153, 153)
pub const TEXT_GRAY: (u8, u8, u8) = (153, 153, 153);

/// ANSI escape sequence helpers (public for reuse)
pub mod escape {
    /// 24-bit foreground color
    pub fn fg(r: u8, g: u8, b: u8) -> String {
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }

    /// Reset all attributes
    pub const RESET: &str = "\x1b[0m";
}

fn fg(color: (u8, u8, u8)) -> String {
    escape::fg(color.0, color.1, color.2)
}

/// Format a status line: colored indicator glyph, then the gray message.
///
/// No trailing reset: iocraft inserts \x1b[K (erase-to-EOL) after Text
/// content and a trailing \x1b[0m would get split by that insertion.
/// Callers writing straight to a terminal append [`escape::RESET`].
///
/// Example output:
/// `[blue]✶[reset] [gray]Editing /src/main.rs`
pub fn styled_status_line(glyph: &str, glyph_color: (u8, u8, u8), message: &str) -> String {
    format!(
        "{glyph_fg}{glyph}{reset} {text_fg}{message}",
        glyph_fg = fg(glyph_color),
        glyph = glyph,
        reset = escape::RESET,
        text_fg = fg(TEXT_GRAY),
        message = message,
    )
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
