//! Command-line interface orchestration for cyclegen.
//!
//! `generate` (the default when no subcommand is given) writes a coloured
//! cycle graph document under a random UUID name; `check` reads a document
//! back and verifies its colouring.

mod commands;

pub use commands::{
    CheckCommand, Cli, CliError, Command, ExecutionSummary, GenerateCommand, render_summary,
    run_cli,
};

#[cfg(test)]
mod test_helpers;
