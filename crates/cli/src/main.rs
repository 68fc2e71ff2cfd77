// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! toolline binary entry point.

use std::io::{self, IsTerminal};

use clap::Parser;

use toolline::cli::Cli;
use toolline::output_diagnostic::{print_error, print_skipped};
use toolline::runtime::{open_input, Runtime};

fn main() {
    let cli = Cli::parse();

    let stdout_is_tty = io::stdout().is_terminal();
    let terminal_width = crossterm::terminal::size()
        .ok()
        .map(|(columns, _rows)| columns as usize);
    let runtime = Runtime::from_cli(&cli, stdout_is_tty, terminal_width);

    let reader = match open_input(cli.input_path().map(|p| p.as_path())) {
        Ok(reader) => reader,
        Err(e) => {
            print_error(e);
            std::process::exit(1);
        }
    };

    match runtime.render_stream(reader, io::stdout().lock()) {
        Ok(summary) => {
            summary.skipped.iter().for_each(print_skipped);
        }
        Err(e) => {
            print_error(e);
            std::process::exit(1);
        }
    }
}
