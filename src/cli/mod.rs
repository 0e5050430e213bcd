// src/cli/mod.rs
//! Command dispatch extracted from the binary to keep main thin.

pub mod args;
pub mod handlers;

pub use args::Cli;

use crate::config::RenderConfig;
use anyhow::Result;
use args::Commands;

/// Executes the parsed command against a configuration snapshot read once
/// per invocation.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn run(cli: Cli) -> Result<()> {
    let cfg = match &cli.config {
        Some(path) => RenderConfig::load_from(path),
        None => RenderConfig::load(),
    };
    match cli.command {
        Commands::Cursor {
            file,
            line,
            write,
            json,
        } => handlers::handle_cursor(&file, line, write, json, &cfg),
        Commands::File { file, write, json } => handlers::handle_file(&file, write, json, &cfg),
        Commands::Workspace => handlers::handle_workspace(),
    }
}
