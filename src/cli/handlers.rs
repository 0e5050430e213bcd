// src/cli/handlers.rs
//! Command handlers: the CLI realization of the host responsibilities —
//! reading document text, applying planned edits, reporting outcomes.

use crate::batch;
use crate::config::RenderConfig;
use crate::error::DocError;
use crate::generate;
use anyhow::{anyhow, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

/// Handles `docsmith cursor`.
///
/// # Errors
/// Surfaces parse failures directly: this is single-declaration mode, and
/// "nothing to document here" is an answer for the user, not a skip.
pub fn handle_cursor(
    file: &Path,
    line: usize,
    write: bool,
    json: bool,
    cfg: &RenderConfig,
) -> Result<()> {
    let text = read_document(file)?;
    let edit = generate::generate_at(&text, line.saturating_sub(1), cfg)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&edit)?);
    }
    if write {
        let updated = batch::apply_edits(&text, std::slice::from_ref(&edit));
        fs::write(file, updated).map_err(|e| io_err(e, file))?;
        eprintln!("{}", format!("documented {}", file.display()).green());
    } else if !json {
        println!("{}", edit.text);
    }
    Ok(())
}

/// Handles `docsmith file`: whole-document batch generation.
///
/// # Errors
/// Only on unreadable input or failed write-back; per-declaration failures
/// become skip counts.
pub fn handle_file(file: &Path, write: bool, json: bool, cfg: &RenderConfig) -> Result<()> {
    let text = read_document(file)?;
    let report = batch::scan_document(&text, cfg, None);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !write {
        print!("{}", batch::apply_edits(&text, &report.edits));
    }
    if write {
        let updated = batch::apply_edits(&text, &report.edits);
        fs::write(file, updated).map_err(|e| io_err(e, file))?;
    }

    let summary = format!(
        "{} comments generated, {} skipped",
        report.edits.len(),
        report.skipped
    );
    if report.skipped > 0 {
        eprintln!("{}", summary.yellow());
    } else {
        eprintln!("{}", summary.green());
    }
    Ok(())
}

/// Handles `docsmith workspace` — a stub by design.
///
/// # Errors
/// Always: workspace-wide generation is not implemented.
pub fn handle_workspace() -> Result<()> {
    Err(anyhow!("workspace-wide generation is not implemented"))
}

/// Reads the target document, mapping a missing file to an I/O error and a
/// non-text file to `NoActiveTarget` before any parsing happens.
fn read_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| io_err(e, path))?;
    String::from_utf8(bytes).map_err(|_| DocError::NoActiveTarget.into())
}

fn io_err(source: std::io::Error, path: &Path) -> anyhow::Error {
    DocError::Io {
        source,
        path: path.to_path_buf(),
    }
    .into()
}
