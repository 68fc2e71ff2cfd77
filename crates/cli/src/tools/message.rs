// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status message resolution for tool calls.
//!
//! Messages come from a single rule table keyed by (tool, command). When no
//! rule matches, whether because the tool is unknown or the command is, the
//! message is the bare tool name.

use serde_json::{Map, Value};

use super::input::{Field, ToolInput};
use super::tool_name::ToolName;

/// Placeholder shown when a rule needs a path and none was given.
pub const PATH_PLACEHOLDER: &str = "file";

/// How a matched rule turns the input into a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Template {
    /// `"{verb} {path}"`, with the path placeholder when `path` is absent.
    Action(&'static str),
    /// `"Moving {path} to {new_path}"` when both paths are present,
    /// otherwise `"Renaming {path}"`.
    Rename,
}

impl Template {
    fn render(self, input: &ToolInput<'_>) -> String {
        match self {
            Template::Action(verb) => format!("{} {}", verb, input.path.or(PATH_PLACEHOLDER)),
            Template::Rename => match (input.path, input.new_path) {
                (Field::Present(from), Field::Present(to)) => format!("Moving {} to {}", from, to),
                (path, _) => format!("Renaming {}", path.or(PATH_PLACEHOLDER)),
            },
        }
    }
}

/// One row of the rule table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    pub tool: ToolName,
    pub command: &'static str,
    pub template: Template,
}

const fn rule(tool: ToolName, command: &'static str, template: Template) -> Rule {
    Rule {
        tool,
        command,
        template,
    }
}

/// Every special-cased (tool, command) pair. Anything else shows the tool name.
pub const RULES: &[Rule] = &[
    rule(ToolName::StrReplaceEditor, "create", Template::Action("Creating")),
    rule(ToolName::StrReplaceEditor, "view", Template::Action("Viewing")),
    rule(ToolName::StrReplaceEditor, "str_replace", Template::Action("Editing")),
    rule(ToolName::StrReplaceEditor, "insert", Template::Action("Editing")),
    rule(ToolName::StrReplaceEditor, "undo_edit", Template::Action("Reverting")),
    rule(ToolName::FileManager, "rename", Template::Rename),
    rule(ToolName::FileManager, "delete", Template::Action("Deleting")),
];

/// Find the rule for a tool and command, if any.
pub fn lookup(tool: ToolName, command: &str) -> Option<&'static Rule> {
    RULES
        .iter()
        .find(|rule| rule.tool == tool && rule.command == command)
}

/// Resolve the status message for a tool call from its normalized arguments.
pub fn resolve_message(tool_name: &str, args: &Map<String, Value>) -> String {
    let input = ToolInput::from_args(args);
    ToolName::parse(tool_name)
        .zip(input.command.as_option())
        .and_then(|(tool, command)| lookup(tool, command))
        .map(|rule| rule.template.render(&input))
        .unwrap_or_else(|| tool_name.to_string())
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
