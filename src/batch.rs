// src/batch.rs
//! Whole-file generation: one forward structural scan, one edit per
//! eligible declaration, all spans computed against the original text and
//! applied bottom-up so earlier offsets never shift.

use crate::config::RenderConfig;
use crate::error::DocError;
use crate::generate::{plan_edit, PlannedEdit};
use crate::signature::{parse_at, DeclarationKind, ParsedDeclaration};
use crate::source::SourceText;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Host-settable cancellation flag, polled between declarations.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Outcome of a whole-file scan. `edits` are ordered top-to-bottom as
/// encountered; `skipped` counts declarations that classified but failed
/// deeper parsing.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub edits: Vec<PlannedEdit>,
    pub skipped: usize,
    pub cancelled: bool,
}

/// Scans the whole document and plans one edit per eligible declaration.
/// Per-declaration failures are counted and never abort the scan; a set
/// cancellation token stops early with the edits computed so far.
#[must_use]
pub fn scan_document(
    text: &str,
    cfg: &RenderConfig,
    cancel: Option<&CancelToken>,
) -> BatchReport {
    let src = SourceText::new(text);
    let mut report = BatchReport {
        edits: Vec::new(),
        skipped: 0,
        cancelled: false,
    };

    let mut line = 0;
    let mut in_block_comment = false;
    while line < src.line_count() {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            report.cancelled = true;
            break;
        }
        let trimmed = src.line(line).trim();
        if in_block_comment {
            if trimmed.contains("*/") {
                in_block_comment = false;
            }
            line += 1;
            continue;
        }
        if trimmed.is_empty() || trimmed.starts_with("//") || trimmed.starts_with('*') {
            line += 1;
            continue;
        }
        if trimmed.starts_with("/*") {
            if !trimmed.contains("*/") {
                in_block_comment = true;
            }
            line += 1;
            continue;
        }
        match parse_at(&src, line) {
            Ok(decl) => {
                let next = next_scan_line(&src, &decl);
                report.edits.push(plan_edit(&src, &decl, cfg));
                line = next;
            }
            Err(DocError::UnbalancedSyntax { .. }) => {
                report.skipped += 1;
                line += 1;
            }
            Err(_) => {
                line += 1;
            }
        }
    }
    report
}

/// Where the scan resumes after a processed declaration: class bodies are
/// descended so members document independently; every other body or
/// initializer extent is skipped whole.
fn next_scan_line(src: &SourceText, decl: &ParsedDeclaration) -> usize {
    let after_decl = decl.line + 1;
    let next = match (&decl.body, decl.signature.kind) {
        (Some(body), DeclarationKind::Class) => src.line_of_offset(body.start) + 1,
        (Some(body), _) => src.line_of_offset(body.end.saturating_sub(1)) + 1,
        (None, _) => after_decl,
    };
    next.max(after_decl)
}

/// Applies planned edits to the original text in reverse document order
/// against a single buffer, so no span is invalidated by an earlier edit.
#[must_use]
pub fn apply_edits(text: &str, edits: &[PlannedEdit]) -> String {
    let mut ordered: Vec<&PlannedEdit> = edits.iter().collect();
    ordered.sort_by(|a, b| b.span.start.cmp(&a.span.start));
    let mut out = text.to_string();
    for edit in ordered {
        out.replace_range(edit.span.start..edit.span.end, &edit.text);
    }
    out
}
