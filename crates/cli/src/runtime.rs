// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stream rendering: read tool invocations line by line, write status lines.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::cli::{Cli, OutputFormat};
use crate::invocation::ToolInvocation;
use crate::output::{LineStyle, StatusWriter};

/// Errors that can occur while rendering a stream.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("Failed to open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("Failed to read input: {0}")]
    Read(#[source] io::Error),

    #[error("Line {line}: invalid tool invocation: {source}")]
    Decode {
        line: usize,
        source: serde_json::Error,
    },

    #[error("Line {line}: not valid UTF-8: {source}")]
    Encoding {
        line: usize,
        source: std::str::Utf8Error,
    },

    #[error("Failed to write output: {0}")]
    Write(#[source] io::Error),
}

/// Outcome of a successful run.
#[derive(Debug, Default)]
pub struct RenderSummary {
    /// Number of status lines written.
    pub rendered: usize,
    /// Lines that were not valid invocations (empty in strict mode).
    pub skipped: Vec<RuntimeError>,
}

/// Rendering options resolved from the CLI and the terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Runtime {
    pub format: OutputFormat,
    pub style: LineStyle,
    pub strict: bool,
}

impl Runtime {
    /// Resolve options. `terminal_width` is only consulted when stdout is a
    /// terminal and no `--width` was given.
    pub fn from_cli(cli: &Cli, stdout_is_tty: bool, terminal_width: Option<usize>) -> Self {
        let width = cli
            .width
            .or_else(|| terminal_width.filter(|_| stdout_is_tty));
        Self {
            format: cli.output_format,
            style: LineStyle {
                color: cli.use_color(stdout_is_tty),
                frame: cli.frame,
                width,
            },
            strict: cli.strict,
        }
    }

    /// Render every invocation in `reader` to `writer`.
    ///
    /// Blank lines are ignored. Lines that are not UTF-8 or do not decode
    /// are collected in the summary, or returned as an error in strict mode.
    /// Only a failing reader or writer ends the run otherwise.
    pub fn render_stream<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: W,
    ) -> Result<RenderSummary, RuntimeError> {
        let mut out = StatusWriter::new(writer, self.format, self.style);
        let mut summary = RenderSummary::default();

        for (index, bytes) in reader.split(b'\n').enumerate() {
            let bytes = bytes.map_err(RuntimeError::Read)?;
            let line = index + 1;
            let decoded = std::str::from_utf8(&bytes)
                .map_err(|source| RuntimeError::Encoding { line, source })
                .and_then(|text| {
                    if text.trim().is_empty() {
                        return Ok(None);
                    }
                    ToolInvocation::from_json(text)
                        .map(Some)
                        .map_err(|source| RuntimeError::Decode { line, source })
                });
            match decoded {
                Ok(None) => {}
                Ok(Some(invocation)) => {
                    out.write(&invocation).map_err(RuntimeError::Write)?;
                    summary.rendered += 1;
                }
                Err(err) if self.strict => return Err(err),
                Err(err) => summary.skipped.push(err),
            }
        }

        out.flush().map_err(RuntimeError::Write)?;
        Ok(summary)
    }
}

/// Open the input: a file path, or stdin when `None`.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, RuntimeError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| RuntimeError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
