// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn as_str_returns_wire_name() {
    assert_eq!(ToolName::StrReplaceEditor.as_str(), "str_replace_editor");
    assert_eq!(ToolName::FileManager.as_str(), "file_manager");
}

#[test]
fn parse_parses_valid_names() {
    assert_eq!(
        ToolName::parse("str_replace_editor"),
        Some(ToolName::StrReplaceEditor)
    );
    assert_eq!(ToolName::parse("file_manager"), Some(ToolName::FileManager));
}

#[test]
fn parse_returns_none_for_unknown() {
    assert_eq!(ToolName::parse("unknown_tool"), None);
    assert_eq!(ToolName::parse("File_Manager"), None);
    assert_eq!(ToolName::parse(" file_manager"), None);
    assert_eq!(ToolName::parse(""), None);
}

#[test]
fn display_impl() {
    assert_eq!(format!("{}", ToolName::FileManager), "file_manager");
}

#[test]
fn roundtrip_all_variants() {
    for variant in ToolName::ALL {
        assert_eq!(ToolName::parse(variant.as_str()), Some(variant));
    }
}
