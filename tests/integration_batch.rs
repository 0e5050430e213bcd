// tests/integration_batch.rs
//! Whole-file generation: scan, plan, apply.
//!
//! VERIFICATION STRATEGY:
//! 1. Exact-output checks prove offsets survive multiple edits (reverse
//!    application against one buffer).
//! 2. Malformed declarations are counted, never fatal: N declarations with
//!    K malformed yield N−K edits and K skips.
//! 3. Re-running batch generation over its own output is a fixed point.

use docsmith_core::batch::{apply_edits, scan_document, CancelToken};
use docsmith_core::config::RenderConfig;

const SAMPLE: &str = "\
function add(a: number, b: number): number {
  return a + b;
}

class Widget {
  resize(w: number, h: number): void {}
}

const MAX = 10;
";

#[test]
fn single_insertion_exact_output() {
    let cfg = RenderConfig::default();
    let report = scan_document("const x = 1;\n", &cfg, None);
    assert_eq!(report.edits.len(), 1);
    assert_eq!(report.skipped, 0);
    let out = apply_edits("const x = 1;\n", &report.edits);
    assert_eq!(out, "/**\n * [description]\n */\nconst x = 1;\n");
}

#[test]
fn sibling_declarations_both_documented_exactly() {
    let cfg = RenderConfig::default();
    let text = "function first() {}\nfunction second() {}\n";
    let report = scan_document(text, &cfg, None);
    assert_eq!(report.edits.len(), 2);
    let out = apply_edits(text, &report.edits);
    assert_eq!(
        out,
        "/**\n * [description]\n */\nfunction first() {}\n\
         /**\n * [description]\n */\nfunction second() {}\n"
    );
}

#[test]
fn class_members_documented_independently() {
    let cfg = RenderConfig::default();
    let report = scan_document(SAMPLE, &cfg, None);
    assert_eq!(report.edits.len(), 4, "add, Widget, resize, MAX");
    assert_eq!(report.skipped, 0);
    assert!(!report.cancelled);

    let out = apply_edits(SAMPLE, &report.edits);
    assert_eq!(out.matches("/**").count(), 4);
    // every original code line survives untouched
    for line in SAMPLE.lines().filter(|l| !l.is_empty()) {
        assert!(out.contains(line), "lost source line: {line:?}");
    }
    // the method block is indented with its declaration
    assert!(out.contains("  /**\n   * [description]\n   * @param {number} w"));
}

#[test]
fn function_bodies_are_not_rescanned() {
    let cfg = RenderConfig::default();
    let text = "function outer() {\n  const inner = 1;\n  return inner;\n}\n";
    let report = scan_document(text, &cfg, None);
    assert_eq!(
        report.edits.len(),
        1,
        "locals inside a body must not be documented"
    );
}

#[test]
fn interface_members_are_skipped_whole() {
    let cfg = RenderConfig::default();
    let text = "interface Options {\n  retries: number;\n  label: string;\n}\n";
    let report = scan_document(text, &cfg, None);
    assert_eq!(report.edits.len(), 1);
}

#[test]
fn object_literal_members_are_not_properties() {
    let cfg = RenderConfig::default();
    let text = "const config = {\n  retries: 3,\n  label: 'x',\n};\n";
    let report = scan_document(text, &cfg, None);
    assert_eq!(report.edits.len(), 1, "only the binding is documented");
}

#[test]
fn malformed_declarations_are_counted_not_fatal() {
    let cfg = RenderConfig::default();
    let text = "function ok(a: number): number {\n  return a;\n}\n\nfunction broken(a, (b {\n}\n";
    let report = scan_document(text, &cfg, None);
    assert_eq!(report.edits.len(), 1, "N−K edits");
    assert_eq!(report.skipped, 1, "K skips");

    // applying the surviving edits never corrupts untouched text
    let out = apply_edits(text, &report.edits);
    assert!(out.contains("function broken(a, (b {"));
    assert!(out.contains("function ok(a: number): number {"));
}

#[test]
fn rerunning_over_generated_output_is_a_fixed_point() {
    let cfg = RenderConfig::default();
    let first = apply_edits(SAMPLE, &scan_document(SAMPLE, &cfg, None).edits);
    let second_report = scan_document(&first, &cfg, None);
    assert_eq!(second_report.edits.len(), 4);
    assert_eq!(second_report.skipped, 0);
    let second = apply_edits(&first, &second_report.edits);
    assert_eq!(first, second, "regeneration must be idempotent");
}

#[test]
fn cancellation_returns_work_done_so_far() {
    let cfg = RenderConfig::default();
    let token = CancelToken::new();
    token.cancel();
    let report = scan_document(SAMPLE, &cfg, Some(&token));
    assert!(report.cancelled);
    assert!(report.edits.is_empty());
}

#[test]
fn file_round_trip_on_disk() {
    let cfg = RenderConfig::default();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("widget.ts");
    std::fs::write(&path, SAMPLE).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let documented = apply_edits(&text, &scan_document(&text, &cfg, None).edits);
    std::fs::write(&path, &documented).unwrap();

    let reread = std::fs::read_to_string(&path).unwrap();
    assert_eq!(reread.matches("/**").count(), 4);
    let again = apply_edits(&reread, &scan_document(&reread, &cfg, None).edits);
    assert_eq!(reread, again);
}
