use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docsmith", version, about = "JSDoc generation for JavaScript/TypeScript")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to ./docsmith.toml)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a comment for the declaration at a cursor position
    Cursor {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Cursor line (1-based)
        #[arg(long, short)]
        line: usize,
        /// Apply the edit to the file in place
        #[arg(long, short)]
        write: bool,
        /// Emit the planned edit as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate comments for every declaration in a file
    File {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Apply all edits to the file in place
        #[arg(long, short)]
        write: bool,
        /// Emit the planned edits as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate for every file in the workspace
    Workspace,
}
