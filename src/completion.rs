// src/completion.rs
//! Completion affordance for the `/` and `*` trigger characters.
//!
//! A plain data value the host adapter translates into its own completion
//! item type; the replaced range matches the range resolver's
//! in-progress-comment policy so accepting the affordance and running the
//! command produce the same span.

use crate::range::{resolve_typing_span, EditSpan};
use crate::signature::parse_at;
use crate::source::SourceText;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Command id the host runs when the affordance is accepted.
pub const GENERATE_COMMAND: &str = "docsmith.generateAtCursor";

static TRIGGER_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(/\*{0,2}|\*+)$").unwrap());

#[derive(Debug, Clone, Serialize)]
pub struct CompletionSuggestion {
    pub label: String,
    pub span: EditSpan,
    pub command: &'static str,
}

/// Decides whether typing `trigger` at `(line, column)` should offer a
/// generate affordance: the text before the cursor must be a
/// blank-appearing partial comment opener, and a documentable declaration
/// must sit below the fragment.
#[must_use]
pub fn completion_at(
    text: &str,
    line: usize,
    column: usize,
    trigger: char,
) -> Option<CompletionSuggestion> {
    if trigger != '/' && trigger != '*' {
        return None;
    }
    let src = SourceText::new(text);
    if line >= src.line_count() {
        return None;
    }
    let content = src.line(line);
    let upto = content
        .char_indices()
        .nth(column)
        .map_or(content.len(), |(i, _)| i);
    if !TRIGGER_PREFIX_RE.is_match(&content[..upto]) {
        return None;
    }
    let ctx = resolve_typing_span(&src, line)?;
    let decl = parse_at(&src, ctx.anchor_line).ok()?;
    let name = decl
        .signature
        .name
        .clone()
        .unwrap_or_else(|| "declaration".to_string());
    Some(CompletionSuggestion {
        label: format!("/** Document {name} */"),
        span: EditSpan {
            start: ctx.start,
            end: ctx.end,
            line: decl.line,
            indent: decl.indent,
        },
        command: GENERATE_COMMAND,
    })
}
