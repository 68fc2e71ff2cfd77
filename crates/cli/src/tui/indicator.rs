// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status line rendering for a tool call.
//!
//! A [`ToolCallView`] pairs the resolved message with an [`Indicator`]: a
//! spinner while the call runs and a solid mark once it has a result. The
//! view is rebuilt from the invocation on every render; nothing carries over
//! between renders.

use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::invocation::ToolInvocation;

use super::colors::{styled_status_line, DONE_EMERALD, SPINNER_BLUE};
use super::spinner::spinner_frame;

/// Completion mark glyph.
pub const DONE_MARK: &str = "●";

/// Marker appended to a shortened message.
pub const ELLIPSIS: char = '…';

/// Narrowest line [`ToolCallView::truncated`] produces: the glyph and the
/// space after it are never cut.
pub const MIN_LINE_WIDTH: usize = 2;

/// Visual state of a tool call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    /// Work in progress.
    Spinner,
    /// Work done.
    Done,
}

impl Indicator {
    pub fn from_completion(is_complete: bool) -> Self {
        if is_complete {
            Indicator::Done
        } else {
            Indicator::Spinner
        }
    }

    /// Glyph for this indicator at animation frame `frame`.
    ///
    /// The frame only matters for the spinner.
    pub fn glyph(self, frame: usize) -> &'static str {
        match self {
            Indicator::Spinner => spinner_frame(frame),
            Indicator::Done => DONE_MARK,
        }
    }

    pub fn color(self) -> (u8, u8, u8) {
        match self {
            Indicator::Spinner => SPINNER_BLUE,
            Indicator::Done => DONE_EMERALD,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Indicator::Spinner => "spinner",
            Indicator::Done => "done",
        }
    }
}

/// Renderable status line for one tool call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolCallView {
    pub indicator: Indicator,
    pub message: String,
}

impl ToolCallView {
    pub fn new(indicator: Indicator, message: impl Into<String>) -> Self {
        Self {
            indicator,
            message: message.into(),
        }
    }

    pub fn from_invocation(invocation: &ToolInvocation) -> Self {
        Self::new(
            Indicator::from_completion(invocation.is_complete()),
            invocation.message(),
        )
    }

    pub fn is_complete(&self) -> bool {
        self.indicator == Indicator::Done
    }

    /// `"{glyph} {message}"` without escape codes.
    pub fn plain_line(&self, frame: usize) -> String {
        format!("{} {}", self.indicator.glyph(frame), self.message)
    }

    /// Colored line, without a trailing reset.
    pub fn styled_line(&self, frame: usize) -> String {
        styled_status_line(
            self.indicator.glyph(frame),
            self.indicator.color(),
            &self.message,
        )
    }

    /// Shorten the message so the whole line fits in `width` columns.
    ///
    /// A shortened message ends with [`ELLIPSIS`]. Glyphs are all one
    /// column wide, so the frame does not affect the result. Below
    /// [`MIN_LINE_WIDTH`] the message is dropped and the line stays
    /// [`MIN_LINE_WIDTH`] columns wide.
    pub fn truncated(&self, width: usize) -> Self {
        let available = width.saturating_sub(self.indicator.glyph(0).width() + 1);
        Self::new(self.indicator, truncate_to_width(&self.message, available))
    }
}

/// Truncate `text` to at most `width` columns, ending with an ellipsis if cut.
fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let budget = width.saturating_sub(ELLIPSIS.width().unwrap_or(1));
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    if width > 0 {
        out.push(ELLIPSIS);
    }
    out
}

#[cfg(test)]
#[path = "indicator_tests.rs"]
mod tests;
