// tests/unit_range.rs
//! Unit tests for comment span resolution.
//!
//! VERIFICATION STRATEGY:
//! 1. Adjacency: well-formed blocks are replaced whole, blank lines break
//!    adjacency, line comments are never absorbed.
//! 2. Repair: malformed openers and dangling continuations are consumed.
//! 3. Safety: a resolved span never overlaps the declaration's code line.

use docsmith_core::range::{resolve_comment_span, resolve_typing_span};
use docsmith_core::source::SourceText;

#[test]
fn no_comment_means_insertion_at_indent() {
    let src = SourceText::new("  resize(w) {}\n");
    let span = resolve_comment_span(&src, 0);
    assert!(span.is_insertion());
    assert_eq!(span.start, 2, "insertion sits at the indentation column");
    assert_eq!(span.indent, "  ");
}

#[test]
fn adjacent_block_is_replaced_whole() {
    let text = "/**\n * Old words.\n */\nfunction f() {}\n";
    let src = SourceText::new(text);
    let span = resolve_comment_span(&src, 3);
    assert_eq!(&text[span.start..span.end], "/**\n * Old words.\n */");
    assert!(
        span.end <= src.line_start(3),
        "span must not touch the declaration line"
    );
}

#[test]
fn single_line_block_is_replaced() {
    let text = "  /** cached */\n  value() {}\n";
    let src = SourceText::new(text);
    let span = resolve_comment_span(&src, 1);
    assert_eq!(&text[span.start..span.end], "/** cached */");
}

#[test]
fn blank_line_breaks_adjacency() {
    let text = "/** far away */\n\nfunction f() {}\n";
    let src = SourceText::new(text);
    let span = resolve_comment_span(&src, 2);
    assert!(span.is_insertion(), "a blank line means no adjacent comment");
    assert_eq!(span.start, src.line_start(2));
}

#[test]
fn line_comment_is_left_alone() {
    let text = "// implementation note\nfunction f() {}\n";
    let src = SourceText::new(text);
    let span = resolve_comment_span(&src, 1);
    assert!(span.is_insertion());
    assert_eq!(span.start, src.line_start(1));
}

#[test]
fn malformed_opener_is_absorbed() {
    let text = "/** broken\nfunction f() {}\n";
    let src = SourceText::new(text);
    let span = resolve_comment_span(&src, 1);
    assert_eq!(&text[span.start..span.end], "/** broken");
}

#[test]
fn dangling_continuation_is_absorbed_to_its_opener() {
    let text = "/**\n * partial\n * more\nfunction f() {}\n";
    let src = SourceText::new(text);
    let span = resolve_comment_span(&src, 3);
    assert_eq!(&text[span.start..span.end], "/**\n * partial\n * more");
}

#[test]
fn comment_is_anchored_above_decorators() {
    let text = "@Component()\nclass Foo {}\n";
    let src = SourceText::new(text);
    let span = resolve_comment_span(&src, 1);
    assert!(span.is_insertion());
    assert_eq!(span.start, 0, "block belongs above the decorator");
    assert_eq!(span.line, 0);
}

#[test]
fn typing_span_inline_pair() {
    let text = "  /** */\n  resize(w) {}\n";
    let src = SourceText::new(text);
    let ctx = resolve_typing_span(&src, 0).expect("inline pair should resolve");
    assert_eq!(&text[ctx.start..ctx.end], "/** */");
    assert_eq!(ctx.anchor_line, 1);
}

#[test]
fn typing_span_across_lines_above_method() {
    let text = "class Widget {\n  /**\n\n  */\n  resize(w: number): void {}\n}\n";
    let src = SourceText::new(text);
    // cursor on the blank line inside the freshly typed fragment
    let ctx = resolve_typing_span(&src, 2).expect("fragment should resolve");
    assert_eq!(&text[ctx.start..ctx.end], "/**\n\n  */");
    assert_eq!(ctx.anchor_line, 4);
}

#[test]
fn typing_span_unterminated_consumes_only_the_opener() {
    let text = "  /**\n  resize(): void {}\n";
    let src = SourceText::new(text);
    let ctx = resolve_typing_span(&src, 0).expect("opener should resolve");
    assert_eq!(&text[ctx.start..ctx.end], "/**");
    assert_eq!(ctx.anchor_line, 1);
}

#[test]
fn typing_span_rejects_plain_code() {
    let src = SourceText::new("const x = 1;\nconst y = 2;\n");
    assert!(resolve_typing_span(&src, 0).is_none());
}
