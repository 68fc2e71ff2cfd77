// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spinner animation frames for in-progress tool calls.
//!
//! The spinner holds no state: callers pass a frame counter and get the
//! glyph for that point in the cycle.

use std::sync::LazyLock;

/// Breathing cycle, built once and indexed by [`spinner_frame`].
static SPINNER_CYCLE: LazyLock<Vec<&'static str>> = LazyLock::new(spinner_cycle);

/// Spinner animation frames (platform-aware)
pub fn spinner_frames() -> &'static [&'static str] {
    if cfg!(target_os = "macos") {
        &["·", "✢", "✳", "✶", "✻", "✽"]
    } else {
        &["·", "✢", "*", "✶", "✻", "✽"]
    }
}

/// Full animation cycle (forward + reverse for breathing effect)
pub fn spinner_cycle() -> Vec<&'static str> {
    let frames = spinner_frames();
    let mut cycle: Vec<&str> = frames.to_vec();
    // Reverse skips both endpoints so the loop has no repeated frame
    cycle.extend(frames.iter().rev().skip(1).take(frames.len() - 2));
    cycle
}

/// Glyph for animation frame `frame`, wrapping around the cycle.
pub fn spinner_frame(frame: usize) -> &'static str {
    SPINNER_CYCLE[frame % SPINNER_CYCLE.len()]
}

#[cfg(test)]
#[path = "spinner_tests.rs"]
mod tests;
