// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tool call interpretation: argument normalization and status messages.
//!
//! # Example
//!
//! ```
//! use toolline::invocation::ToolArgs;
//! use toolline::tools::{normalize_args, resolve_message};
//!
//! let args = ToolArgs::Encoded(r#"{"command":"create","path":"/App.jsx"}"#.to_string());
//! let message = resolve_message("str_replace_editor", &normalize_args(&args));
//! assert_eq!(message, "Creating /App.jsx");
//! ```

pub mod input;
pub mod message;
pub mod tool_name;

pub use input::{normalize_args, Field, ToolInput};
pub use message::{lookup, resolve_message, Rule, Template, RULES};
pub use tool_name::ToolName;
