// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output format handling for text and JSON status lines.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::invocation::ToolInvocation;
use crate::tui::colors::escape;
use crate::tui::{Indicator, ToolCallView};

/// JSON status record for `--output-format json`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRecord {
    pub tool_call_id: String,
    pub message: String,
    pub indicator: Indicator,
    pub complete: bool,
}

impl StatusRecord {
    pub fn from_invocation(invocation: &ToolInvocation) -> Self {
        let view = ToolCallView::from_invocation(invocation);
        Self {
            tool_call_id: invocation.tool_call_id.clone(),
            complete: view.is_complete(),
            indicator: view.indicator,
            message: view.message,
        }
    }
}

/// How text lines are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineStyle {
    pub color: bool,
    pub frame: usize,
    pub width: Option<usize>,
}

/// Writes one status line per invocation in the selected format.
pub struct StatusWriter<W: Write> {
    writer: W,
    format: OutputFormat,
    style: LineStyle,
}

impl<W: Write> StatusWriter<W> {
    pub fn new(writer: W, format: OutputFormat, style: LineStyle) -> Self {
        Self {
            writer,
            format,
            style,
        }
    }

    pub fn write(&mut self, invocation: &ToolInvocation) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                let view = ToolCallView::from_invocation(invocation);
                let view = match self.style.width {
                    Some(width) => view.truncated(width),
                    None => view,
                };
                if self.style.color {
                    writeln!(
                        self.writer,
                        "{}{}",
                        view.styled_line(self.style.frame),
                        escape::RESET
                    )
                } else {
                    writeln!(self.writer, "{}", view.plain_line(self.style.frame))
                }
            }
            OutputFormat::Json => {
                let record = StatusRecord::from_invocation(invocation);
                serde_json::to_writer(&mut self.writer, &record)?;
                writeln!(self.writer)
            }
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
