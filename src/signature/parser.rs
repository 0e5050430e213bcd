// src/signature/parser.rs
//! Classifies the declaration at (or just below) an anchor line and extracts
//! its structured signature.
//!
//! This is a lexical recognizer, not a grammar: keyword and bracket cues
//! decide the kind, and balanced scanning bounds every sub-extraction. The
//! contract is bounded lookahead — brackets that never rebalance inside the
//! window surface as `UnbalancedSyntax` for that declaration only.

use super::params::{non_empty, parse_parameter, strip_word};
use super::scanner::{
    find_top_level, find_top_level_arrow, matching_bracket, split_top_level, CodeScanner, TokKind,
};
use super::{
    Access, DeclarationKind, DeclarationSignature, Modifiers, ParameterInfo, TypeParameter,
};
use crate::error::{DocError, Result};
use crate::source::SourceText;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Blank, comment, and decorator lines tolerated between the anchor and the
/// declaration itself.
const LOOKAHEAD_LINES: usize = 20;

/// Bytes of source considered when scanning one signature.
const SIGNATURE_WINDOW: usize = 16 * 1024;

static THROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"throw\s+new\s+([A-Za-z_$][A-Za-z0-9_$]*)").unwrap());

/// Identifiers that start statements, never declarations.
const STATEMENT_KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "case", "default", "break", "continue",
    "return", "new", "delete", "typeof", "instanceof", "in", "of", "void", "yield", "await",
    "throw", "try", "catch", "finally", "import", "from", "super", "this", "extends",
    "implements", "with", "debugger", "as", "satisfies", "package",
];

/// Words that keep an object type open in return-type position.
const TYPE_OPERATOR_WORDS: &[&str] = &[
    "keyof", "typeof", "infer", "extends", "is", "asserts", "readonly", "in", "out",
];

/// A successfully parsed declaration, anchored back into the document.
#[derive(Debug)]
pub struct ParsedDeclaration {
    pub signature: DeclarationSignature,
    /// Line the declaration starts on.
    pub line: usize,
    /// Leading whitespace of that line.
    pub indent: String,
    /// Absolute byte range of the braced body or initializer extent, used by
    /// the batch scanner to avoid re-classifying nested statements.
    pub body: Option<Range<usize>>,
}

/// Finds and parses the nearest declaration at or below `anchor_line`.
///
/// # Errors
/// `NotADeclaration` when no recognizable construct starts within the
/// lookahead window; `UnbalancedSyntax` when bracket scanning never
/// rebalances.
pub fn parse_at(src: &SourceText, anchor_line: usize) -> Result<ParsedDeclaration> {
    let decl_line = find_declaration_line(src, anchor_line)?;
    let indent = src.indent_of(decl_line).to_string();
    let code_start = src.line_start(decl_line) + indent.len();
    let mut end = (code_start + SIGNATURE_WINDOW).min(src.text().len());
    while !src.text().is_char_boundary(end) {
        end -= 1;
    }
    let window = &src.text()[code_start..end];
    let (signature, body) = classify(window, decl_line)?;
    Ok(ParsedDeclaration {
        signature,
        line: decl_line,
        indent,
        body: body.map(|r| code_start + r.start..code_start + r.end),
    })
}

fn unbalanced(line: usize) -> DocError {
    DocError::UnbalancedSyntax { line: line + 1 }
}

/// Walks forward from the anchor to the first line that can start a
/// declaration, skipping blanks, comments, and decorators.
fn find_declaration_line(src: &SourceText, anchor: usize) -> Result<usize> {
    let mut idx = anchor;
    let mut looked = 0;
    let mut in_block_comment = false;
    while idx < src.line_count() && looked <= LOOKAHEAD_LINES {
        let trimmed = src.line(idx).trim();
        if in_block_comment {
            if trimmed.contains("*/") {
                in_block_comment = false;
            }
        } else if trimmed.is_empty() || trimmed.starts_with("//") || trimmed.starts_with('*') {
            // blank, line comment, or continuation of an unterminated block
        } else if trimmed.starts_with("/*") {
            if !trimmed.contains("*/") {
                in_block_comment = true;
            }
        } else if trimmed.starts_with('@') {
            idx = skip_decorator(src, idx);
            looked += 1;
            continue;
        } else {
            return Ok(idx);
        }
        idx += 1;
        looked += 1;
    }
    Err(DocError::NotADeclaration)
}

/// Returns the line just past a decorator starting on `line`. A decorator
/// argument list may span lines; a bare `@Name` occupies its line only.
fn skip_decorator(src: &SourceText, line: usize) -> usize {
    let content = src.line(line).trim_start();
    let after_at = &content[1..];
    let name_end = after_at
        .char_indices()
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '_' || *c == '$' || *c == '.'))
        .map_or(after_at.len(), |(i, _)| i);
    if !after_at[name_end..].starts_with('(') {
        return line + 1;
    }
    let open = src.line_start(line) + src.indent_of(line).len() + 1 + name_end;
    let mut end = (open + SIGNATURE_WINDOW).min(src.text().len());
    while !src.text().is_char_boundary(end) {
        end -= 1;
    }
    match matching_bracket(&src.text()[..end], open) {
        Some(close) => src.line_of_offset(close) + 1,
        None => line + 1,
    }
}

/// Keyword/structural classification. Body ranges are window-relative.
fn classify(
    window: &str,
    line: usize,
) -> Result<(DeclarationSignature, Option<Range<usize>>)> {
    let mut rest = window.trim_start();
    let mut mods = Modifiers::default();
    let mut declared = false;

    loop {
        if let Some(r) = strip_word(rest, "export") {
            rest = r;
        } else if let Some(r) = strip_word(rest, "default") {
            rest = r;
        } else if let Some(r) = strip_word(rest, "declare") {
            declared = true;
            rest = r;
        } else if let Some(r) = strip_word(rest, "abstract") {
            mods.is_abstract = true;
            rest = r;
        } else if let Some(r) = strip_word(rest, "static") {
            mods.is_static = true;
            rest = r;
        } else if let Some(r) = strip_word(rest, "readonly") {
            mods.is_readonly = true;
            rest = r;
        } else if let Some(r) = strip_word(rest, "async") {
            mods.is_async = true;
            rest = r;
        } else if let Some(r) = strip_word(rest, "override") {
            rest = r;
        } else if let Some(r) = strip_word(rest, "public") {
            mods.access = Some(Access::Public);
            rest = r;
        } else if let Some(r) = strip_word(rest, "private") {
            mods.access = Some(Access::Private);
            rest = r;
        } else if let Some(r) = strip_word(rest, "protected") {
            mods.access = Some(Access::Protected);
            rest = r;
        } else {
            break;
        }
    }

    if let Some(r) = strip_word(rest, "class") {
        return parse_container(DeclarationKind::Class, r, window, mods, line);
    }
    if let Some(r) = strip_word(rest, "interface") {
        return parse_container(DeclarationKind::Interface, r, window, mods, line);
    }
    if let Some(r) = strip_word(rest, "enum") {
        return parse_container(DeclarationKind::Enum, r, window, mods, line);
    }
    if let Some(r) = strip_word(rest, "const") {
        if let Some(r2) = strip_word(r, "enum") {
            return parse_container(DeclarationKind::Enum, r2, window, mods, line);
        }
        return parse_binding_statement(r, window, mods, line);
    }
    if let Some(r) = strip_word(rest, "let") {
        return parse_binding_statement(r, window, mods, line);
    }
    if let Some(r) = strip_word(rest, "var") {
        return parse_binding_statement(r, window, mods, line);
    }
    if let Some(r) = strip_word(rest, "type") {
        if let Some(result) = try_type_alias(r, window, mods) {
            return result;
        }
    }
    if let Some(r) = strip_keyword(rest, "function") {
        return parse_function_keyword(r, None, window, mods, line, declared);
    }
    if let Some(r) = strip_keyword(rest, "constructor") {
        return parse_callable(
            DeclarationKind::Constructor,
            Some("constructor".to_string()),
            r,
            window,
            mods,
            line,
            mods.is_abstract,
        );
    }
    if let Some(r) = strip_word(rest, "get") {
        if let Some((name, r2)) = take_identifier(r) {
            if r2.starts_with('(') {
                return parse_callable(
                    DeclarationKind::Getter,
                    Some(name.to_string()),
                    r2,
                    window,
                    mods,
                    line,
                    mods.is_abstract,
                );
            }
        }
    }
    if let Some(r) = strip_word(rest, "set") {
        if let Some((name, r2)) = take_identifier(r) {
            if r2.starts_with('(') {
                return parse_callable(
                    DeclarationKind::Setter,
                    Some(name.to_string()),
                    r2,
                    window,
                    mods,
                    line,
                    mods.is_abstract,
                );
            }
        }
    }

    parse_member(rest, window, mods, line)
}

/// `function` keyword path: optional `*`, optional name, then the callable.
fn parse_function_keyword(
    rest: &str,
    name_override: Option<String>,
    window: &str,
    mut mods: Modifiers,
    line: usize,
    declared: bool,
) -> Result<(DeclarationSignature, Option<Range<usize>>)> {
    let mut rest = rest;
    if let Some(r) = rest.strip_prefix('*') {
        mods.is_generator = true;
        rest = r.trim_start();
    }
    let mut name = name_override;
    if let Some((ident, r)) = take_identifier(rest) {
        if name.is_none() {
            name = Some(ident.to_string());
        }
        rest = r;
    }
    parse_callable(
        DeclarationKind::Function,
        name,
        rest,
        window,
        mods,
        line,
        declared,
    )
}

/// `const`/`let`/`var` statements: plain bindings, function expressions, and
/// arrows assigned to a binding.
fn parse_binding_statement(
    rest: &str,
    window: &str,
    mods: Modifiers,
    line: usize,
) -> Result<(DeclarationSignature, Option<Range<usize>>)> {
    let (binding, mut after) = take_identifier(rest).ok_or(DocError::NotADeclaration)?;
    if STATEMENT_KEYWORDS.contains(&binding) {
        return Err(DocError::NotADeclaration);
    }
    if let Some(r) = after.strip_prefix('!') {
        after = r.trim_start();
    }
    parse_initialized(binding, after, window, mods, line, DeclarationKind::Variable)
}

/// Shared tail for variables and class properties: optional type annotation,
/// optional initializer that may turn the declaration into a function.
fn parse_initialized(
    name: &str,
    after: &str,
    window: &str,
    mods: Modifiers,
    line: usize,
    fallback: DeclarationKind,
) -> Result<(DeclarationSignature, Option<Range<usize>>)> {
    let ce = clause_end(after);
    let clause = &after[..ce];
    let mut declared_type = None;
    let value = if let Some(anno) = clause.strip_prefix(':') {
        match find_top_level(anno, 0, '=') {
            Some(eq) => {
                declared_type = non_empty(&anno[..eq]);
                Some(anno[eq + 1..].trim_start())
            }
            None => {
                declared_type = non_empty(anno);
                None
            }
        }
    } else if let Some(init) = clause.strip_prefix('=') {
        Some(init.trim_start())
    } else {
        // bare binding: nothing to document beyond the name
        None
    };

    if let Some(value) = value {
        if let Some(result) = parse_value_function(value, window, name, mods, line) {
            return result;
        }
    }

    let mut sig = DeclarationSignature::new(fallback);
    sig.name = Some(name.to_string());
    sig.modifiers = mods;
    sig.return_type = declared_type;
    Ok((sig, Some(off(window, after)..off(window, after) + ce)))
}

/// Function expressions and arrows on the right-hand side of a binding.
/// `None` means the value is not function-shaped; fall back to the binding.
fn parse_value_function(
    value: &str,
    window: &str,
    binding: &str,
    mods: Modifiers,
    line: usize,
) -> Option<Result<(DeclarationSignature, Option<Range<usize>>)>> {
    let mut mods = mods;
    let mut rest = value;
    if let Some(r) = strip_word(rest, "async") {
        mods.is_async = true;
        rest = r;
    }
    if let Some(r) = strip_keyword(rest, "function") {
        return Some(parse_function_keyword(
            r,
            Some(binding.to_string()),
            window,
            mods,
            line,
            false,
        ));
    }
    parse_arrow(rest, window, binding, mods, line)
}

fn parse_arrow(
    rest: &str,
    window: &str,
    binding: &str,
    mods: Modifiers,
    line: usize,
) -> Option<Result<(DeclarationSignature, Option<Range<usize>>)>> {
    let mut sig = DeclarationSignature::new(DeclarationKind::ArrowFunction);
    sig.name = Some(binding.to_string());
    sig.modifiers = mods;

    let mut rest = rest;
    if rest.starts_with('<') {
        let close = matching_bracket(rest, 0)?;
        sig.type_parameters = parse_type_params(&rest[1..close]);
        rest = rest[close + 1..].trim_start();
    }

    if rest.starts_with('(') {
        let close = match matching_bracket(rest, 0) {
            Some(c) => c,
            None => return Some(Err(unbalanced(line))),
        };
        let inner = &rest[1..close];
        let after = rest[close + 1..].trim_start();
        let after_arrow = if let Some(tail) = after.strip_prefix("=>") {
            tail
        } else if let Some(anno) = after.strip_prefix(':') {
            let arrow = find_top_level_arrow(anno, 0)?;
            sig.return_type = non_empty(&anno[..arrow]);
            &anno[arrow + 2..]
        } else {
            return None;
        };
        sig.parameters = parse_parameter_list(inner);
        return Some(finish_arrow(sig, after_arrow, window, line));
    }

    // single bare parameter: `x => ...`
    let (pname, after) = take_identifier(rest)?;
    let tail = after.strip_prefix("=>")?;
    sig.parameters = vec![ParameterInfo {
        name: pname.to_string(),
        type_text: None,
        optional: false,
        default_value: None,
        rest: false,
        destructured: false,
    }];
    Some(finish_arrow(sig, tail, window, line))
}

fn finish_arrow(
    mut sig: DeclarationSignature,
    after_arrow: &str,
    window: &str,
    line: usize,
) -> Result<(DeclarationSignature, Option<Range<usize>>)> {
    let after_arrow = after_arrow.trim_start();
    let base = off(window, after_arrow);
    let body = if after_arrow.starts_with('{') {
        let close = matching_bracket(after_arrow, 0).ok_or_else(|| unbalanced(line))?;
        sig.throws_hints = collect_throws(&after_arrow[..close + 1]);
        Some(base..base + close + 1)
    } else {
        // expression body: the remaining clause is the extent
        Some(base..base + after_arrow.len())
    };
    Ok((sig, body))
}

/// class / interface / enum headers.
fn parse_container(
    kind: DeclarationKind,
    rest: &str,
    window: &str,
    mods: Modifiers,
    line: usize,
) -> Result<(DeclarationSignature, Option<Range<usize>>)> {
    let (name, mut after) = take_identifier(rest).ok_or(DocError::NotADeclaration)?;
    let mut sig = DeclarationSignature::new(kind);
    sig.name = Some(name.to_string());
    sig.modifiers = mods;
    if after.starts_with('<') {
        let close = matching_bracket(after, 0).ok_or_else(|| unbalanced(line))?;
        if kind != DeclarationKind::Enum {
            sig.type_parameters = parse_type_params(&after[1..close]);
        }
        after = after[close + 1..].trim_start();
    }
    let open = find_top_level(after, 0, '{').ok_or(DocError::NotADeclaration)?;
    let close = matching_bracket(after, open).ok_or_else(|| unbalanced(line))?;
    let base = off(window, after);
    Ok((sig, Some(base + open..base + close + 1)))
}

/// `type Name<...> = ...` — `None` when the shape does not match, so the
/// caller can fall back to a member named `type`.
fn try_type_alias(
    rest: &str,
    window: &str,
    mods: Modifiers,
) -> Option<Result<(DeclarationSignature, Option<Range<usize>>)>> {
    let (name, mut after) = take_identifier(rest)?;
    let mut sig = DeclarationSignature::new(DeclarationKind::TypeAlias);
    sig.name = Some(name.to_string());
    sig.modifiers = mods;
    if after.starts_with('<') {
        let close = matching_bracket(after, 0)?;
        sig.type_parameters = parse_type_params(&after[1..close]);
        after = after[close + 1..].trim_start();
    }
    let rhs = after.strip_prefix('=')?;
    if rhs.starts_with('>') {
        return None; // `=>` — not an alias
    }
    let ce = clause_end(rhs);
    let base = off(window, rhs);
    Some(Ok((sig, Some(base..base + ce))))
}

/// Methods and properties (class members, and property-shaped statements).
fn parse_member(
    rest: &str,
    window: &str,
    mods: Modifiers,
    line: usize,
) -> Result<(DeclarationSignature, Option<Range<usize>>)> {
    let mut mods = mods;
    let mut rest = rest;
    if let Some(r) = rest.strip_prefix('*') {
        mods.is_generator = true;
        rest = r.trim_start();
    }
    let (name, mut after) = take_identifier(rest).ok_or(DocError::NotADeclaration)?;
    if STATEMENT_KEYWORDS.contains(&name) {
        return Err(DocError::NotADeclaration);
    }
    // optional member marker, but never optional chaining (`foo?.bar`)
    if after.starts_with('?') && !after[1..].starts_with('.') {
        after = after[1..].trim_start();
    }
    if after.starts_with('<') || after.starts_with('(') {
        return parse_callable(
            DeclarationKind::Method,
            Some(name.to_string()),
            after,
            window,
            mods,
            line,
            mods.is_abstract,
        );
    }
    if after.starts_with(':') || after.starts_with('=') {
        return parse_initialized(name, after, window, mods, line, DeclarationKind::Property);
    }
    Err(DocError::NotADeclaration)
}

/// Generic list, parameter list, return type, body. The workhorse shared by
/// every function-like kind.
fn parse_callable(
    kind: DeclarationKind,
    name: Option<String>,
    rest: &str,
    window: &str,
    mods: Modifiers,
    line: usize,
    allow_signature_only: bool,
) -> Result<(DeclarationSignature, Option<Range<usize>>)> {
    let mut sig = DeclarationSignature::new(kind);
    sig.name = name;
    sig.modifiers = mods;

    let mut rest = rest.trim_start();
    if rest.starts_with('<') {
        let close = matching_bracket(rest, 0).ok_or_else(|| unbalanced(line))?;
        sig.type_parameters = parse_type_params(&rest[1..close]);
        rest = rest[close + 1..].trim_start();
    }
    if !rest.starts_with('(') {
        return Err(DocError::NotADeclaration);
    }
    let close = matching_bracket(rest, 0).ok_or_else(|| unbalanced(line))?;
    sig.parameters = parse_parameter_list(&rest[1..close]);

    let after = &rest[close + 1..];
    let (ret, body_rel) = parse_return_and_body(after, allow_signature_only, line)?;
    sig.return_type = ret;
    let base = off(window, after);
    let body = body_rel.map(|r| base + r.start..base + r.end);
    if let Some(r) = &body {
        sig.throws_hints = collect_throws(&window[r.clone()]);
    }
    Ok((sig, body))
}

fn parse_parameter_list(inner: &str) -> Vec<ParameterInfo> {
    split_top_level(inner, ',')
        .into_iter()
        .enumerate()
        .filter_map(|(i, seg)| parse_parameter(seg, i))
        .collect()
}

fn parse_type_params(inner: &str) -> Vec<TypeParameter> {
    split_top_level(inner, ',')
        .into_iter()
        .filter_map(|seg| {
            let mut seg = seg.trim();
            if let Some(r) = strip_word(seg, "const") {
                seg = r;
            }
            let (name, rest) = take_identifier(seg)?;
            let mut constraint = None;
            let mut default = None;
            if let Some(r) = strip_word(rest, "extends") {
                match find_top_level(r, 0, '=') {
                    Some(eq) => {
                        constraint = non_empty(&r[..eq]);
                        default = non_empty(&r[eq + 1..]);
                    }
                    None => constraint = non_empty(r),
                }
            } else if let Some(r) = rest.strip_prefix('=') {
                default = non_empty(r);
            }
            Some(TypeParameter {
                name: name.to_string(),
                constraint,
                default,
            })
        })
        .collect()
}

/// Splits the text after a parameter list into return-type text and body
/// range. Object-literal return types are consumed into the type; the body
/// is the first top-level `{` that no longer continues a type expression.
fn parse_return_and_body(
    after: &str,
    allow_signature_only: bool,
    line: usize,
) -> Result<(Option<String>, Option<Range<usize>>)> {
    let mut scanner = CodeScanner::new(after);
    let Some(first) = scanner.next() else {
        return if allow_signature_only {
            Ok((None, None))
        } else {
            Err(DocError::NotADeclaration)
        };
    };
    match first.kind {
        TokKind::Ch('{') if first.top_level => {
            let close = matching_bracket(after, first.offset).ok_or_else(|| unbalanced(line))?;
            Ok((None, Some(first.offset..close + 1)))
        }
        TokKind::Ch(';') => {
            if allow_signature_only {
                Ok((None, None))
            } else {
                Err(DocError::NotADeclaration)
            }
        }
        TokKind::Ch(':') if first.top_level => {
            let type_start = first.end;
            let mut prev_arrow = false;
            while let Some(tok) = scanner.next() {
                match tok.kind {
                    TokKind::Ch('{') if tok.top_level => {
                        let type_txt = &after[type_start..tok.offset];
                        if prev_arrow || type_continues(type_txt) {
                            prev_arrow = false;
                            continue;
                        }
                        let close =
                            matching_bracket(after, tok.offset).ok_or_else(|| unbalanced(line))?;
                        return Ok((non_empty(type_txt), Some(tok.offset..close + 1)));
                    }
                    TokKind::Ch(';') if tok.top_level => {
                        // overload / declaration signature without a body
                        return Ok((non_empty(&after[type_start..tok.offset]), None));
                    }
                    TokKind::Arrow => prev_arrow = true,
                    _ => prev_arrow = false,
                }
            }
            if allow_signature_only {
                Ok((non_empty(&after[type_start..]), None))
            } else {
                Err(DocError::NotADeclaration)
            }
        }
        _ => Err(DocError::NotADeclaration),
    }
}

/// True when an object literal `{` after this text still belongs to the
/// return type rather than opening the body.
fn type_continues(type_txt: &str) -> bool {
    let trimmed = type_txt.trim_end();
    let Some(last) = trimmed.chars().last() else {
        return true;
    };
    if matches!(last, ':' | ',' | '|' | '&' | '<' | '(' | '[' | '=' | '.') {
        return true;
    }
    let word_start = trimmed
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphanumeric() || *c == '_' || *c == '$')
        .last()
        .map(|(i, _)| i);
    word_start.is_some_and(|i| TYPE_OPERATOR_WORDS.contains(&&trimmed[i..]))
}

/// Where a type/initializer clause ends: the first top-level `;`, or a
/// newline-separated token boundary that cannot continue the expression.
fn clause_end(text: &str) -> usize {
    let mut scanner = CodeScanner::new(text);
    let mut prev_end = 0usize;
    let mut prev_ch: Option<char> = None;
    let mut prev_was_arrow = false;
    while let Some(tok) = scanner.next() {
        let ch = match tok.kind {
            TokKind::Ch(c) => c,
            TokKind::Arrow => '>',
            TokKind::Str => '"',
        };
        if tok.top_level && tok.kind == TokKind::Ch(';') {
            return tok.offset;
        }
        if tok.top_level
            && prev_end > 0
            && text[prev_end..tok.offset].contains('\n')
            && !matches!(ch, ')' | ']' | '}')
            && !prev_was_arrow
            && !prev_ch.is_some_and(is_trailing_connector)
            && !is_leading_connector(ch)
        {
            return prev_end;
        }
        prev_end = tok.end;
        prev_ch = Some(ch);
        prev_was_arrow = tok.kind == TokKind::Arrow;
    }
    prev_end
}

fn is_trailing_connector(c: char) -> bool {
    matches!(
        c,
        '=' | ',' | ':' | '|' | '&' | '+' | '-' | '*' | '/' | '%' | '<' | '(' | '[' | '{' | '.'
            | '?' | '!' | '~' | '^'
    )
}

fn is_leading_connector(c: char) -> bool {
    matches!(
        c,
        '.' | ',' | ':' | '?' | '|' | '&' | '+' | '-' | '*' | '/' | '=' | '<'
    )
}

fn collect_throws(body: &str) -> Vec<String> {
    let mut out = Vec::new();
    for cap in THROW_RE.captures_iter(body) {
        let name = cap[1].to_string();
        if !out.contains(&name) {
            out.push(name);
        }
    }
    out
}

/// Strips a leading keyword whose boundary may be any non-identifier
/// character (`function(` counts).
fn strip_keyword<'a>(text: &'a str, word: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(word)?;
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c.is_alphanumeric() || c == '_' || c == '$' => None,
        Some(_) => Some(rest.trim_start()),
    }
}

fn take_identifier(text: &str) -> Option<(&str, &str)> {
    let end = text
        .char_indices()
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '_' || *c == '$' || *c == '#'))
        .map_or(text.len(), |(i, _)| i);
    if end == 0 {
        None
    } else {
        Some((&text[..end], text[end..].trim_start()))
    }
}

/// Offset of `slice` inside `base`; both must come from the same buffer.
fn off(base: &str, slice: &str) -> usize {
    slice.as_ptr() as usize - base.as_ptr() as usize
}
