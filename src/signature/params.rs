// src/signature/params.rs
//! Decomposes one parameter-list segment into a `ParameterInfo`.

use super::scanner::{find_top_level, matching_bracket};
use super::ParameterInfo;

const ACCESS_PREFIXES: &[&str] = &["public", "private", "protected", "readonly", "override"];

/// Parses a single segment produced by a top-level comma split.
///
/// `index` is the parameter's position in the full list; destructuring
/// patterns take a synthesized `param<index>` name so the raw pattern never
/// leaks into rendered output. Returns `None` for empty segments and for
/// `this` pseudo-parameters.
pub(crate) fn parse_parameter(segment: &str, index: usize) -> Option<ParameterInfo> {
    let mut rest = segment.trim();
    if rest.is_empty() {
        return None;
    }

    // Constructor parameter properties: `constructor(private readonly x: T)`.
    loop {
        let before = rest;
        for prefix in ACCESS_PREFIXES {
            if let Some(stripped) = strip_word(rest, prefix) {
                rest = stripped;
                break;
            }
        }
        if rest == before {
            break;
        }
    }

    let is_rest = rest.starts_with("...");
    if is_rest {
        rest = rest[3..].trim_start();
    }

    let destructured = rest.starts_with('{') || rest.starts_with('[');
    let name;
    if destructured {
        let close = matching_bracket(rest, 0)?;
        name = format!("param{index}");
        rest = rest[close + 1..].trim_start();
    } else {
        let end = rest
            .char_indices()
            .find(|(_, c)| !(c.is_alphanumeric() || *c == '_' || *c == '$' || *c == '#'))
            .map_or(rest.len(), |(i, _)| i);
        if end == 0 {
            return None;
        }
        name = rest[..end].to_string();
        if name == "this" {
            return None;
        }
        rest = rest[end..].trim_start();
    }

    let mut optional = false;
    if let Some(stripped) = rest.strip_prefix('?') {
        optional = true;
        rest = stripped.trim_start();
    }

    let mut type_text = None;
    let mut default_value = None;
    if let Some(stripped) = rest.strip_prefix(':') {
        let annotation = stripped.trim_start();
        match find_top_level(annotation, 0, '=') {
            Some(eq) => {
                type_text = non_empty(&annotation[..eq]);
                default_value = non_empty(&annotation[eq + 1..]);
            }
            None => type_text = non_empty(annotation),
        }
    } else if let Some(stripped) = rest.strip_prefix('=') {
        default_value = non_empty(stripped);
    }

    if default_value.is_some() {
        optional = true;
    }

    Some(ParameterInfo {
        name,
        type_text,
        optional,
        default_value,
        rest: is_rest,
        destructured,
    })
}

/// Strips a leading keyword followed by whitespace. Shared with the
/// classifier, where `async(` must stay a member name while `async foo`
/// is a modifier.
pub(crate) fn strip_word<'a>(text: &'a str, word: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(word)?;
    match rest.chars().next() {
        Some(c) if c.is_whitespace() => Some(rest.trim_start()),
        _ => None,
    }
}

pub(crate) fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
