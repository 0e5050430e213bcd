// src/source.rs
//! Read-only view of a host document: raw text plus a line-start table for
//! cheap offset/position conversion in both directions.

/// A borrowed document with precomputed line starts.
///
/// All offsets are byte offsets into the underlying text; lines and columns
/// are zero-based. Columns count characters, matching what editor hosts
/// report for cursor positions.
pub struct SourceText<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> SourceText<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { text, line_starts }
    }

    #[must_use]
    pub fn text(&self) -> &'a str {
        self.text
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where line `idx` begins.
    #[must_use]
    pub fn line_start(&self, idx: usize) -> usize {
        self.line_starts.get(idx).copied().unwrap_or(self.text.len())
    }

    /// Byte offset just past the content of line `idx`, excluding the line
    /// terminator (`\n` or `\r\n`).
    #[must_use]
    pub fn line_end(&self, idx: usize) -> usize {
        let next = self
            .line_starts
            .get(idx + 1)
            .copied()
            .unwrap_or(self.text.len());
        let mut end = next;
        if end > self.line_start(idx) && self.text.as_bytes()[end - 1] == b'\n' {
            end -= 1;
        }
        if end > self.line_start(idx) && self.text.as_bytes()[end - 1] == b'\r' {
            end -= 1;
        }
        end
    }

    /// Text of line `idx` without its terminator.
    #[must_use]
    pub fn line(&self, idx: usize) -> &'a str {
        &self.text[self.line_start(idx)..self.line_end(idx)]
    }

    /// Line containing the given byte offset.
    #[must_use]
    pub fn line_of_offset(&self, offset: usize) -> usize {
        self.line_starts
            .iter()
            .rposition(|&start| start <= offset)
            .unwrap_or(0)
    }

    /// Byte offset of `(line, column)`, clamped to the line's content.
    #[must_use]
    pub fn offset_at(&self, line: usize, column: usize) -> usize {
        if line >= self.line_count() {
            return self.text.len();
        }
        let content = self.line(line);
        let within = content
            .char_indices()
            .nth(column)
            .map_or(content.len(), |(i, _)| i);
        self.line_start(line) + within
    }

    /// Leading whitespace of line `idx`.
    #[must_use]
    pub fn indent_of(&self, idx: usize) -> &'a str {
        let content = self.line(idx);
        let end = content
            .char_indices()
            .find(|(_, c)| !c.is_whitespace())
            .map_or(content.len(), |(i, _)| i);
        &content[..end]
    }

    /// True when line `idx` holds only whitespace.
    #[must_use]
    pub fn is_blank(&self, idx: usize) -> bool {
        self.line(idx).trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_table_round_trip() {
        let src = SourceText::new("ab\ncd\n\nef");
        assert_eq!(src.line_count(), 4);
        assert_eq!(src.line(0), "ab");
        assert_eq!(src.line(2), "");
        assert_eq!(src.line(3), "ef");
        assert_eq!(src.line_of_offset(4), 1);
        assert_eq!(src.offset_at(1, 1), 4);
    }

    #[test]
    fn crlf_line_end_excludes_terminator() {
        let src = SourceText::new("ab\r\ncd");
        assert_eq!(src.line(0), "ab");
        assert_eq!(src.line_end(0), 2);
    }

    #[test]
    fn indent_captured_verbatim() {
        let src = SourceText::new("    foo\n\tbar");
        assert_eq!(src.indent_of(0), "    ");
        assert_eq!(src.indent_of(1), "\t");
    }
}
