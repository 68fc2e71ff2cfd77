// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tool name enum for type-safe tool identification.

use std::fmt;

/// Tools whose invocations get a descriptive status message.
///
/// Any other tool name is displayed verbatim, so it has no variant here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToolName {
    /// File editor: create, view, str_replace, insert, undo_edit.
    StrReplaceEditor,
    /// File manager: rename, delete.
    FileManager,
}

impl ToolName {
    /// All known tools, in rule-table order.
    pub const ALL: [ToolName; 2] = [Self::StrReplaceEditor, Self::FileManager];

    /// Get the wire representation of the tool name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StrReplaceEditor => "str_replace_editor",
            Self::FileManager => "file_manager",
        }
    }

    /// Try to parse a tool name from a string.
    ///
    /// Matching is exact: `"File_Manager"` is an unknown tool.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "str_replace_editor" => Some(Self::StrReplaceEditor),
            "file_manager" => Some(Self::FileManager),
            _ => None,
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "tool_name_tests.rs"]
mod tests;
