// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Argument normalization and typed field extraction for tool calls.
//!
//! Tool arguments arrive either as a JSON object or as a string holding an
//! encoded object (common while arguments stream in). Both shapes are
//! normalized to a [`Map`] without ever failing: anything that does not
//! decode to an object becomes an empty map.

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::invocation::ToolArgs;

/// Normalize tool arguments into a JSON object.
///
/// An object is borrowed as-is. A string is decoded; malformed JSON or JSON
/// that is not an object yields an empty map.
pub fn normalize_args(args: &ToolArgs) -> Cow<'_, Map<String, Value>> {
    match args {
        ToolArgs::Map(map) => Cow::Borrowed(map),
        ToolArgs::Encoded(text) => Cow::Owned(decode_object(text)),
    }
}

/// Decode a string as a JSON object, or return an empty map.
pub fn decode_object(text: &str) -> Map<String, Value> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// A string argument that is either present or absent.
///
/// Missing keys, non-string values and empty strings are all `Absent`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Field<'a> {
    Present(&'a str),
    #[default]
    Absent,
}

impl<'a> Field<'a> {
    /// Read `key` from `args` as a string field.
    pub fn read(args: &'a Map<String, Value>, key: &str) -> Self {
        match args.get(key).and_then(Value::as_str) {
            Some(s) if !s.is_empty() => Field::Present(s),
            _ => Field::Absent,
        }
    }

    pub fn as_option(self) -> Option<&'a str> {
        match self {
            Field::Present(s) => Some(s),
            Field::Absent => None,
        }
    }

    /// The value, or `placeholder` when absent.
    pub fn or(self, placeholder: &'a str) -> &'a str {
        self.as_option().unwrap_or(placeholder)
    }

    pub fn is_present(self) -> bool {
        matches!(self, Field::Present(_))
    }
}

/// The fields of a tool call's arguments that drive its status message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToolInput<'a> {
    pub command: Field<'a>,
    pub path: Field<'a>,
    pub new_path: Field<'a>,
}

impl<'a> ToolInput<'a> {
    /// Extract `command`, `path` and `new_path` from normalized arguments.
    pub fn from_args(args: &'a Map<String, Value>) -> Self {
        Self {
            command: Field::read(args, "command"),
            path: Field::read(args, "path"),
            new_path: Field::read(args, "new_path"),
        }
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
