// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! iocraft component for embedding a tool call status line in a TUI.

use iocraft::prelude::*;

use crate::invocation::ToolInvocation;

use super::indicator::ToolCallView;

/// Props for [`ToolCallIndicator`].
#[derive(Default, Props)]
pub struct ToolCallIndicatorProps {
    pub invocation: Option<ToolInvocation>,
    /// Spinner animation frame, driven by the host's timer.
    pub frame: usize,
    /// Emit 24-bit color codes.
    pub styled: bool,
    /// Truncate the line to this many columns.
    pub width: Option<usize>,
}

/// One-row status line: spinner or completion mark, then the message.
#[component]
pub fn ToolCallIndicator(props: &ToolCallIndicatorProps) -> impl Into<AnyElement<'static>> {
    let Some(invocation) = props.invocation.as_ref() else {
        return element! { View {} };
    };

    let line = render_line(invocation, props.frame, props.styled, props.width);

    // NoWrap to preserve ANSI
    element! {
        View(flex_direction: FlexDirection::Row) {
            Text(content: line, wrap: TextWrap::NoWrap)
        }
    }
}

/// Render the status line text for an invocation.
pub fn render_line(
    invocation: &ToolInvocation,
    frame: usize,
    styled: bool,
    width: Option<usize>,
) -> String {
    let view = ToolCallView::from_invocation(invocation);
    let view = match width {
        Some(width) => view.truncated(width),
        None => view,
    };
    if styled {
        view.styled_line(frame)
    } else {
        view.plain_line(frame)
    }
}

#[cfg(test)]
#[path = "component_tests.rs"]
mod tests;
