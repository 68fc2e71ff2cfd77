// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn escape_fg_formats_24_bit_color() {
    assert_eq!(escape::fg(37, 99, 235), "\x1b[38;2;37;99;235m");
}

#[test]
fn styled_status_line_contains_ansi_codes() {
    let line = styled_status_line("·", SPINNER_BLUE, "Creating /App.jsx");

    // Blue glyph, reset, gray message
    assert!(line.starts_with("\x1b[38;2;37;99;235m·\x1b[0m "));
    assert!(line.contains("\x1b[38;2;153;153;153m"));
    // Should NOT end with reset — iocraft inserts \x1b[K after Text content
    assert!(
        line.ends_with("Creating /App.jsx"),
        "Line should end with the message (no trailing reset), got: {:?}",
        line
    );
}

#[test]
fn styled_status_line_uses_glyph_color() {
    let line = styled_status_line("●", DONE_EMERALD, "Deleting file");
    assert!(line.starts_with("\x1b[38;2;16;185;129m●"));
}
