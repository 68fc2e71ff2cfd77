// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tool invocation types as supplied by the host chat UI.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::tools::{normalize_args, resolve_message};

/// Lifecycle stage of a tool invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvocationState {
    /// Arguments are still streaming in.
    #[serde(rename = "partial-call")]
    PartialCall,
    /// Arguments are final; the tool is running.
    #[serde(rename = "call")]
    Call,
    /// The tool has finished and a result is expected.
    #[serde(rename = "result")]
    Result,
}

impl InvocationState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PartialCall => "partial-call",
            Self::Call => "call",
            Self::Result => "result",
        }
    }
}

/// Tool arguments: a JSON object, or a string holding an encoded object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolArgs {
    Map(Map<String, Value>),
    Encoded(String),
}

impl Default for ToolArgs {
    fn default() -> Self {
        ToolArgs::Map(Map::new())
    }
}

impl From<Map<String, Value>> for ToolArgs {
    fn from(map: Map<String, Value>) -> Self {
        ToolArgs::Map(map)
    }
}

impl From<String> for ToolArgs {
    fn from(text: String) -> Self {
        ToolArgs::Encoded(text)
    }
}

impl From<&str> for ToolArgs {
    fn from(text: &str) -> Self {
        ToolArgs::Encoded(text.to_string())
    }
}

/// A single tool call as seen by the status line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInvocation {
    /// Opaque identifier; used only for keying output.
    #[serde(default)]
    pub tool_call_id: String,

    pub tool_name: String,

    #[serde(default)]
    pub args: ToolArgs,

    pub state: InvocationState,

    /// Tool result. `Some(Value::Null)` for an explicit `null`, `None` only
    /// when the field is missing.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub result: Option<Value>,
}

/// Keep an explicit `null` as a present value rather than folding it into `None`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl ToolInvocation {
    pub fn new(
        tool_call_id: impl Into<String>,
        tool_name: impl Into<String>,
        args: impl Into<ToolArgs>,
        state: InvocationState,
    ) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            tool_name: tool_name.into(),
            args: args.into(),
            state,
            result: None,
        }
    }

    /// Attach a result value.
    pub fn with_result(mut self, result: impl Into<Value>) -> Self {
        self.result = Some(result.into());
        self
    }

    /// Decode one invocation from its JSON wire form.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Whether the call is done: `result` state with a result present.
    ///
    /// A `result` state whose result has not arrived yet is still in progress.
    pub fn is_complete(&self) -> bool {
        self.state == InvocationState::Result && self.result.is_some()
    }

    /// Arguments as a JSON object (see [`normalize_args`]).
    pub fn normalized_args(&self) -> Cow<'_, Map<String, Value>> {
        normalize_args(&self.args)
    }

    /// The human-readable status message for this call.
    pub fn message(&self) -> String {
        resolve_message(&self.tool_name, &self.normalized_args())
    }
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
