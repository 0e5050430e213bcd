// src/range.rs
//! Decides exactly which text range a generated comment occupies.
//!
//! The backward-scan policy: an adjacent well-formed block is replaced
//! whole so regeneration refreshes instead of duplicating; an unterminated
//! opener is absorbed so generation repairs it; a blank line breaks
//! adjacency and forces a fresh insertion at the declaration's indentation.

use crate::source::SourceText;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static CLOSE_TRAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*/\s*$").unwrap());
static OPEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*/\*").unwrap());
static OPEN_TRAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/\*\*?\s*$").unwrap());
static CLOSE_LEAD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\*+/").unwrap());
static CONT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\*").unwrap());
static INLINE_PAIR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*/\*\*?\s*\*/\s*$").unwrap());

/// Half-open byte range targeted by one comment edit. An empty range is a
/// pure insertion.
#[derive(Debug, Clone, Serialize)]
pub struct EditSpan {
    pub start: usize,
    pub end: usize,
    /// Line the generated block anchors to.
    pub line: usize,
    /// Indentation shared between the block and the declaration.
    pub indent: String,
}

impl EditSpan {
    #[must_use]
    pub fn is_insertion(&self) -> bool {
        self.start == self.end
    }
}

/// The consumed fragment of an in-progress comment, plus where to look for
/// the declaration it will document.
#[derive(Debug, Clone)]
pub struct TypingContext {
    pub start: usize,
    pub end: usize,
    /// First line after the fragment; declaration search starts here.
    pub anchor_line: usize,
}

/// Computes the span a generated block replaces for the declaration
/// starting on `decl_line`. Never includes any part of the declaration's
/// own code line.
#[must_use]
pub fn resolve_comment_span(src: &SourceText, decl_line: usize) -> EditSpan {
    // Comments belong above decorators.
    let mut anchor = decl_line;
    while anchor > 0 && src.line(anchor - 1).trim_start().starts_with('@') {
        anchor -= 1;
    }

    let indent = src.indent_of(anchor).to_string();
    let at = src.line_start(anchor) + indent.len();
    let insertion = EditSpan {
        start: at,
        end: at,
        line: anchor,
        indent,
    };
    if anchor == 0 {
        return insertion;
    }

    let prev = anchor - 1;
    let prev_text = src.line(prev);
    if prev_text.trim().is_empty() {
        return insertion; // blank line breaks adjacency
    }

    if CLOSE_TRAIL_RE.is_match(prev_text) {
        // A block closes directly above: replace it whole if its opener is
        // reachable through comment lines only.
        let mut j = prev;
        loop {
            let lt = src.line(j);
            if OPEN_RE.is_match(lt) {
                return EditSpan {
                    start: src.line_start(j) + src.indent_of(j).len(),
                    end: src.line_end(prev),
                    ..insertion
                };
            }
            if j == 0 {
                return insertion;
            }
            let t = lt.trim();
            if j != prev && !(t.is_empty() || t.starts_with('*')) {
                return insertion;
            }
            j -= 1;
        }
    }

    if OPEN_RE.is_match(prev_text) && !prev_text.contains("*/") {
        // Unterminated opener directly above: absorb so generation repairs
        // it instead of stacking a second fragment.
        return EditSpan {
            start: src.line_start(prev) + src.indent_of(prev).len(),
            end: src.line_end(prev),
            ..insertion
        };
    }

    if CONT_RE.is_match(prev_text) {
        // Dangling continuation lines: absorb back to their opener.
        for j in (0..prev).rev() {
            let lt = src.line(j);
            if OPEN_RE.is_match(lt) && !lt.contains("*/") {
                return EditSpan {
                    start: src.line_start(j) + src.indent_of(j).len(),
                    end: src.line_end(prev),
                    ..insertion
                };
            }
            let t = lt.trim();
            if !(t.is_empty() || t.starts_with('*')) {
                break;
            }
        }
        return insertion;
    }

    insertion
}

/// Locates the comment fragment the user is typing inside: a trailing
/// `/**`-like prefix on or above the cursor line, and a leading `*/`-like
/// suffix below. The returned span consumes exactly that fragment.
#[must_use]
pub fn resolve_typing_span(src: &SourceText, cursor_line: usize) -> Option<TypingContext> {
    if src.line_count() == 0 {
        return None;
    }
    let cursor_line = cursor_line.min(src.line_count() - 1);

    // `/** */` collapsed onto one line
    let line_text = src.line(cursor_line);
    if INLINE_PAIR_RE.is_match(line_text) {
        let start_col = line_text.find("/*")?;
        let end_col = line_text.rfind("*/")? + 2;
        return Some(TypingContext {
            start: src.line_start(cursor_line) + start_col,
            end: src.line_start(cursor_line) + end_col,
            anchor_line: cursor_line + 1,
        });
    }

    // Opener on the cursor line, or above it through blank/continuation
    // lines only.
    let mut open_line = None;
    let mut j = cursor_line;
    loop {
        let lt = src.line(j);
        if OPEN_TRAIL_RE.is_match(lt) {
            open_line = Some(j);
            break;
        }
        let t = lt.trim();
        let continues = t.is_empty() || (t.starts_with('*') && !t.starts_with("*/"));
        if !continues || j == 0 {
            break;
        }
        j -= 1;
    }
    let open_line = open_line?;
    let start = src.line_start(open_line) + src.line(open_line).rfind("/*")?;

    // Closer below, tolerating blank/continuation lines; a code line means
    // the fragment is unterminated and ends on the line before it.
    let mut k = open_line + 1;
    while k < src.line_count() {
        let lt = src.line(k);
        if let Some(m) = CLOSE_LEAD_RE.find(lt) {
            return Some(TypingContext {
                start,
                end: src.line_start(k) + m.end(),
                anchor_line: k + 1,
            });
        }
        let t = lt.trim();
        if !(t.is_empty() || t.starts_with('*')) {
            return Some(TypingContext {
                start,
                end: src.line_end(k - 1),
                anchor_line: k,
            });
        }
        k += 1;
    }
    None
}
