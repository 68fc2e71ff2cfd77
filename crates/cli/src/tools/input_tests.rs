// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use proptest::prelude::*;
use serde_json::json;
use yare::parameterized;

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn map_args_are_borrowed_unchanged() {
    let args = ToolArgs::Map(object(json!({ "command": "view", "path": "/a.rs" })));
    let normalized = normalize_args(&args);
    assert!(matches!(normalized, Cow::Borrowed(_)));
    assert_eq!(normalized.get("path"), Some(&json!("/a.rs")));
}

#[test]
fn encoded_object_is_decoded() {
    let args = ToolArgs::Encoded(r#"{"command":"create","path":"/parsed.jsx"}"#.to_string());
    let normalized = normalize_args(&args);
    assert_eq!(normalized.get("command"), Some(&json!("create")));
    assert_eq!(normalized.get("path"), Some(&json!("/parsed.jsx")));
}

#[parameterized(
    not_json = { "not valid json" },
    empty = { "" },
    truncated = { r#"{"command":"crea"# },
    array = { "[1, 2, 3]" },
    string = { r#""create""# },
    number = { "42" },
    null = { "null" },
)]
fn undecodable_strings_become_empty(text: &str) {
    let args = ToolArgs::Encoded(text.to_string());
    assert!(normalize_args(&args).is_empty());
}

#[parameterized(
    string = { json!({ "path": "/x" }), Field::Present("/x") },
    missing = { json!({}), Field::Absent },
    empty_string = { json!({ "path": "" }), Field::Absent },
    number = { json!({ "path": 7 }), Field::Absent },
    null = { json!({ "path": null }), Field::Absent },
    array = { json!({ "path": ["/x"] }), Field::Absent },
)]
fn field_read(args: Value, expected: Field<'static>) {
    let args = object(args);
    assert_eq!(Field::read(&args, "path"), expected);
}

#[test]
fn field_or_substitutes_placeholder() {
    assert_eq!(Field::Present("/a").or("file"), "/a");
    assert_eq!(Field::Absent.or("file"), "file");
}

#[test]
fn tool_input_extracts_all_fields() {
    let args = object(json!({
        "command": "rename",
        "path": "/old.jsx",
        "new_path": "/new.jsx",
        "extra": true
    }));
    let input = ToolInput::from_args(&args);
    assert_eq!(input.command, Field::Present("rename"));
    assert_eq!(input.path, Field::Present("/old.jsx"));
    assert_eq!(input.new_path, Field::Present("/new.jsx"));
}

#[test]
fn tool_input_defaults_to_absent() {
    let args = Map::new();
    assert_eq!(ToolInput::from_args(&args), ToolInput::default());
}

proptest! {
    #[test]
    fn normalize_never_fails(text in ".*") {
        let args = ToolArgs::Encoded(text);
        let _ = normalize_args(&args);
    }

    #[test]
    fn encoded_object_matches_direct_map(
        command in "[a-z_]{0,12}",
        path in "/[a-zA-Z0-9_./]{0,24}",
    ) {
        let map = object(json!({ "command": command, "path": path }));
        let encoded = ToolArgs::Encoded(serde_json::to_string(&map).unwrap());
        prop_assert_eq!(normalize_args(&encoded).into_owned(), map);
    }
}
