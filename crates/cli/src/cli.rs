// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing for the `toolline` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Render status lines for assistant tool calls
#[derive(Parser, Debug, Clone)]
#[command(name = "toolline", version, about = "Render status lines for assistant tool calls")]
pub struct Cli {
    /// Newline-delimited tool invocation JSON (reads stdin when omitted or "-")
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "text",
        env = "TOOLLINE_OUTPUT_FORMAT"
    )]
    pub output_format: OutputFormat,

    /// When to emit colors in text output
    #[arg(long, value_enum, default_value = "auto", env = "TOOLLINE_COLOR")]
    pub color: ColorChoice,

    /// Spinner animation frame to draw for in-progress calls
    #[arg(long, default_value_t = 0)]
    pub frame: usize,

    /// Truncate text lines to this many columns (defaults to the terminal width)
    #[arg(long)]
    pub width: Option<usize>,

    /// Fail on the first line that is not a valid tool invocation
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// Input path, or `None` for stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }

    /// Whether text output should carry ANSI colors.
    pub fn use_color(&self, stdout_is_tty: bool) -> bool {
        match self.color {
            ColorChoice::Auto => stdout_is_tty,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Output format for status lines
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// One indicator + message line per invocation
    #[default]
    Text,
    /// One JSON status record per invocation
    Json,
}

/// Color selection
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum ColorChoice {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
