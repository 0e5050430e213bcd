// src/generate.rs
//! Single-declaration pipeline: anchor, parse, resolve the span, render.

use crate::config::RenderConfig;
use crate::error::Result;
use crate::range::{self, EditSpan};
use crate::render::{extract_description, Synthesizer};
use crate::signature::{parse_at, ParsedDeclaration};
use crate::source::SourceText;
use serde::Serialize;

/// One comment edit, ready for a host to apply. An insertion span carries
/// the trailing newline and indentation so the declaration keeps its column.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedEdit {
    pub span: EditSpan,
    pub text: String,
}

/// Plans the comment edit for an already-parsed declaration.
#[must_use]
pub fn plan_edit(src: &SourceText, decl: &ParsedDeclaration, cfg: &RenderConfig) -> PlannedEdit {
    let span = range::resolve_comment_span(src, decl.line);
    plan_with_span(src, decl, cfg, span)
}

fn plan_with_span(
    src: &SourceText,
    decl: &ParsedDeclaration,
    cfg: &RenderConfig,
    span: EditSpan,
) -> PlannedEdit {
    let prior = if span.is_insertion() {
        None
    } else {
        extract_description(&src.text()[span.start..span.end])
    };
    let block = Synthesizer::new(cfg).render(&decl.signature, prior.as_deref(), &span.indent);
    let text = if span.is_insertion() {
        format!("{block}\n{}", span.indent)
    } else {
        block
    };
    PlannedEdit { span, text }
}

/// "Generate at cursor". The in-progress-typing case (cursor inside a
/// freshly typed `/** ... */` fragment) is resolved first; otherwise the
/// cursor anchors a plain declaration search.
///
/// # Errors
/// `NotADeclaration` when nothing documentable is near the cursor;
/// `UnbalancedSyntax` when the declaration's brackets never rebalance.
pub fn generate_at(text: &str, line: usize, cfg: &RenderConfig) -> Result<PlannedEdit> {
    let src = SourceText::new(text);
    if let Some(ctx) = range::resolve_typing_span(&src, line) {
        let decl = parse_at(&src, ctx.anchor_line)?;
        let span = EditSpan {
            start: ctx.start,
            end: ctx.end,
            line: decl.line,
            indent: decl.indent.clone(),
        };
        return Ok(plan_with_span(&src, &decl, cfg, span));
    }
    let decl = parse_at(&src, line)?;
    Ok(plan_edit(&src, &decl, cfg))
}
