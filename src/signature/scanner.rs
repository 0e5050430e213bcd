// src/signature/scanner.rs
//! Character-level walker over a window of source text.
//!
//! Yields code tokens only: comments are skipped, string and template
//! literals collapse to a single token, and paren/bracket/brace/angle
//! nesting is tracked so callers can split or search at top level. `=>` is
//! yielded as a single arrow token so its `>` never unbalances angle
//! accounting.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokKind {
    Ch(char),
    Arrow,
    Str,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Tok {
    pub offset: usize,
    pub end: usize,
    pub kind: TokKind,
    /// True when the token sits outside every bracket pair. For an opening
    /// bracket this describes the context the bracket opens in; for a
    /// closing bracket, the context it returns to.
    pub top_level: bool,
}

pub(crate) struct CodeScanner<'a> {
    text: &'a str,
    pos: usize,
    paren: i32,
    bracket: i32,
    brace: i32,
    angle: i32,
    prev_code: Option<char>,
}

impl<'a> CodeScanner<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            paren: 0,
            bracket: 0,
            brace: 0,
            angle: 0,
            prev_code: None,
        }
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        self.text.get(pos..).and_then(|s| s.chars().next())
    }

    fn at_top(&self) -> bool {
        self.paren == 0 && self.bracket == 0 && self.brace == 0 && self.angle == 0
    }

    /// Heuristic: `<` opens a generic list when glued to an identifier on
    /// the left and to a non-space on the right. `a < b` stays a comparison
    /// so it cannot poison top-level comma splitting.
    fn angle_opens(&self, at: usize) -> bool {
        let prev_ok = matches!(
            self.prev_code,
            Some(p) if p.is_alphanumeric() || p == '_' || p == '$'
        );
        let next_ok = match self.char_at(at + 1) {
            None => false,
            Some(c) => !c.is_whitespace(),
        };
        prev_ok && next_ok
    }

    fn skip_string(&self, start: usize, quote: char) -> usize {
        let mut pos = start + quote.len_utf8();
        while let Some(c) = self.char_at(pos) {
            pos += c.len_utf8();
            if c == '\\' {
                if let Some(esc) = self.char_at(pos) {
                    pos += esc.len_utf8();
                }
            } else if c == quote {
                return pos;
            }
        }
        self.text.len()
    }

    fn skip_line_comment(&self, start: usize) -> usize {
        self.text[start..]
            .find('\n')
            .map_or(self.text.len(), |i| start + i)
    }

    fn skip_block_comment(&self, start: usize) -> usize {
        self.text[start + 2..]
            .find("*/")
            .map_or(self.text.len(), |i| start + 2 + i + 2)
    }

    pub(crate) fn next(&mut self) -> Option<Tok> {
        loop {
            let start = self.pos;
            let c = self.char_at(start)?;
            if c.is_whitespace() {
                self.pos = start + c.len_utf8();
                continue;
            }
            match c {
                '\'' | '"' | '`' => {
                    self.pos = self.skip_string(start, c);
                    self.prev_code = Some('"');
                    return Some(Tok {
                        offset: start,
                        end: self.pos,
                        kind: TokKind::Str,
                        top_level: self.at_top(),
                    });
                }
                '/' if self.char_at(start + 1) == Some('/') => {
                    self.pos = self.skip_line_comment(start);
                    continue;
                }
                '/' if self.char_at(start + 1) == Some('*') => {
                    self.pos = self.skip_block_comment(start);
                    continue;
                }
                '=' if self.char_at(start + 1) == Some('>') => {
                    self.pos = start + 2;
                    self.prev_code = Some('>');
                    return Some(Tok {
                        offset: start,
                        end: self.pos,
                        kind: TokKind::Arrow,
                        top_level: self.at_top(),
                    });
                }
                '<' if self.char_at(start + 1) == Some('=') => {
                    // comparison, not a generic opener
                    self.pos = start + 2;
                    self.prev_code = Some('=');
                    return Some(Tok {
                        offset: start,
                        end: self.pos,
                        kind: TokKind::Ch('<'),
                        top_level: self.at_top(),
                    });
                }
                '>' if self.angle == 0 && self.char_at(start + 1) == Some('=') => {
                    self.pos = start + 2;
                    self.prev_code = Some('=');
                    return Some(Tok {
                        offset: start,
                        end: self.pos,
                        kind: TokKind::Ch('>'),
                        top_level: self.at_top(),
                    });
                }
                _ => {}
            }

            self.pos = start + c.len_utf8();
            let top_before = self.at_top();
            let top_level = match c {
                '(' => {
                    self.paren += 1;
                    top_before
                }
                '[' => {
                    self.bracket += 1;
                    top_before
                }
                '{' => {
                    self.brace += 1;
                    top_before
                }
                ')' => {
                    self.paren = (self.paren - 1).max(0);
                    self.at_top()
                }
                ']' => {
                    self.bracket = (self.bracket - 1).max(0);
                    self.at_top()
                }
                '}' => {
                    self.brace = (self.brace - 1).max(0);
                    self.at_top()
                }
                '<' => {
                    if self.angle_opens(start) {
                        self.angle += 1;
                    }
                    top_before
                }
                '>' => {
                    if self.angle > 0 {
                        self.angle -= 1;
                    }
                    self.at_top()
                }
                _ => top_before,
            };
            self.prev_code = Some(c);
            return Some(Tok {
                offset: start,
                end: self.pos,
                kind: TokKind::Ch(c),
                top_level,
            });
        }
    }
}

/// Splits `text` on `sep` occurring at top level only. Separators inside
/// strings, comments, or any bracket pair never split. Always returns at
/// least one (possibly empty) segment.
pub(crate) fn split_top_level(text: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut scanner = CodeScanner::new(text);
    while let Some(tok) = scanner.next() {
        if tok.top_level && tok.kind == TokKind::Ch(sep) {
            parts.push(&text[start..tok.offset]);
            start = tok.end;
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Byte offset of the close bracket matching the opener at `open`, or `None`
/// when the pair never rebalances within `text`.
pub(crate) fn matching_bracket(text: &str, open: usize) -> Option<usize> {
    let open_ch = text.get(open..)?.chars().next()?;
    let close_ch = match open_ch {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        '<' => '>',
        _ => return None,
    };
    let mut scanner = CodeScanner::new(&text[open..]);
    let mut depth = 0i32;
    while let Some(tok) = scanner.next() {
        if let TokKind::Ch(c) = tok.kind {
            if c == open_ch {
                depth += 1;
            } else if c == close_ch {
                depth -= 1;
                if depth == 0 {
                    return Some(open + tok.offset);
                }
            }
        }
    }
    None
}

/// First top-level occurrence of `needle` at or after `from`.
pub(crate) fn find_top_level(text: &str, from: usize, needle: char) -> Option<usize> {
    let mut scanner = CodeScanner::new(&text[from..]);
    while let Some(tok) = scanner.next() {
        if tok.top_level && tok.kind == TokKind::Ch(needle) {
            return Some(from + tok.offset);
        }
    }
    None
}

/// First top-level `=>` at or after `from`.
pub(crate) fn find_top_level_arrow(text: &str, from: usize) -> Option<usize> {
    let mut scanner = CodeScanner::new(&text[from..]);
    while let Some(tok) = scanner.next() {
        if tok.top_level && tok.kind == TokKind::Arrow {
            return Some(from + tok.offset);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_ignores_nested_calls_and_patterns() {
        let parts = split_top_level("a, b = foo(1, 2), {c, d} = {}", ',');
        assert_eq!(parts.len(), 3, "call and pattern commas must not split");
        assert_eq!(parts[0].trim(), "a");
        assert_eq!(parts[1].trim(), "b = foo(1, 2)");
        assert_eq!(parts[2].trim(), "{c, d} = {}");
    }

    #[test]
    fn split_ignores_generic_commas() {
        let parts = split_top_level("a: Map<string, number>, b: string", ',');
        assert_eq!(parts.len(), 2);
    }

    #[test]
    fn split_ignores_string_commas() {
        let parts = split_top_level("a = \"x, y\", b = 'p, q', c = `r, s`", ',');
        assert_eq!(parts.len(), 3);
    }

    #[test]
    fn arrow_default_does_not_split() {
        let parts = split_top_level("cb = (a, b) => g(a, b), c", ',');
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1].trim(), "c");
    }

    #[test]
    fn comparison_does_not_poison_angles() {
        // `a < b` must not open an angle depth that swallows the comma.
        let parts = split_top_level("x = a < b, y", ',');
        assert_eq!(parts.len(), 2);
    }

    #[test]
    fn matching_bracket_nested() {
        let text = "(a, (b, c), d)";
        assert_eq!(matching_bracket(text, 0), Some(text.len() - 1));
        assert_eq!(matching_bracket(text, 4), Some(9));
    }

    #[test]
    fn matching_bracket_unbalanced_is_none() {
        assert_eq!(matching_bracket("(a, (b", 0), None);
    }

    #[test]
    fn matching_angle_tolerates_inner_arrow() {
        let text = "<T extends (x: number) => string>";
        assert_eq!(matching_bracket(text, 0), Some(text.len() - 1));
    }

    #[test]
    fn bracket_inside_string_is_invisible() {
        let text = "(a = \")\", b)";
        assert_eq!(matching_bracket(text, 0), Some(text.len() - 1));
    }

    #[test]
    fn find_top_level_skips_nested() {
        let text = "a: {x: 1} = y";
        assert_eq!(find_top_level(text, 0, ':'), Some(1));
        assert_eq!(find_top_level(text, 2, '='), Some(text.len() - 3));
    }

    #[test]
    fn string_yields_one_token_with_extent() {
        let mut scanner = CodeScanner::new("x = `a, b`");
        let mut kinds = Vec::new();
        while let Some(tok) = scanner.next() {
            kinds.push((tok.kind, tok.offset, tok.end));
        }
        assert_eq!(kinds.len(), 3);
        assert_eq!(kinds[2].0, TokKind::Str);
        assert_eq!(kinds[2].2, 10);
    }
}
