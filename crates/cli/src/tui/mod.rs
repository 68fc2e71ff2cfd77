// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal rendering of tool call status lines.
//!
//! [`ToolCallView`] produces plain or ANSI-styled lines; the
//! [`ToolCallIndicator`] iocraft component wraps the same line for hosts
//! built on iocraft's declarative component model.

pub mod colors;
pub mod component;
pub mod indicator;
pub mod spinner;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use component::{render_line, ToolCallIndicator, ToolCallIndicatorProps};
pub use indicator::{Indicator, ToolCallView, DONE_MARK};
