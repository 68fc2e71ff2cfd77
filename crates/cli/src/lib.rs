// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tool call status lines
//!
//! Turns an assistant's tool invocation (tool name, arguments, lifecycle
//! state) into a one-line status: a spinner with a short message such as
//! `Creating /App.jsx` while the call runs, and a completion mark once the
//! result is in.
//!
//! ```
//! use toolline::invocation::{InvocationState, ToolInvocation};
//! use toolline::tui::ToolCallView;
//!
//! let call = ToolInvocation::new(
//!     "call_1",
//!     "file_manager",
//!     r#"{"command":"rename","path":"/old.jsx","new_path":"/new.jsx"}"#,
//!     InvocationState::Result,
//! )
//! .with_result("ok");
//!
//! let view = ToolCallView::from_invocation(&call);
//! assert!(view.is_complete());
//! assert_eq!(view.plain_line(0), "● Moving /old.jsx to /new.jsx");
//! ```

pub mod cli;
pub mod invocation;
pub mod output;
pub mod output_diagnostic;
pub mod runtime;
pub mod tools;
pub mod tui;
