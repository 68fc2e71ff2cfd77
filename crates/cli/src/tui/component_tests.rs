// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use iocraft::prelude::*;
use crate::tui::test_helpers::strip_ansi;
use crate::invocation::{InvocationState, ToolArgs};

fn create_call() -> ToolInvocation {
    ToolInvocation::new(
        "1",
        "str_replace_editor",
        ToolArgs::Encoded(r#"{"command":"create","path":"/App.jsx"}"#.to_string()),
        InvocationState::Call,
    )
}

#[test]
fn render_line_plain() {
    assert_eq!(render_line(&create_call(), 0, false, None), "· Creating /App.jsx");
}

#[test]
fn render_line_styled_strips_to_plain() {
    let styled = render_line(&create_call(), 0, true, None);
    assert_ne!(styled, render_line(&create_call(), 0, false, None));
    assert_eq!(strip_ansi(&styled), "· Creating /App.jsx");
}

#[test]
fn render_line_truncates() {
    assert_eq!(render_line(&create_call(), 0, false, Some(12)), "· Creating …");
}

#[test]
fn render_line_done() {
    let done = create_call();
    let done = ToolInvocation {
        state: InvocationState::Result,
        ..done
    }
    .with_result("File created successfully");
    assert_eq!(render_line(&done, 4, false, None), "● Creating /App.jsx");
}

#[test]
fn component_renders_message() {
    let mut element = element! {
        ToolCallIndicator(invocation: Some(create_call()), frame: 0usize, styled: false)
    };
    let output = element.to_string();
    assert!(output.contains("Creating /App.jsx"), "got: {:?}", output);
}

#[test]
fn component_without_invocation_renders_nothing() {
    let mut element = element! { ToolCallIndicator(frame: 0usize) };
    assert_eq!(element.to_string().trim(), "");
}
