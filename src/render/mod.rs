// src/render/mod.rs
//! Turns a `DeclarationSignature` and a `RenderConfig` into comment text.
//!
//! Pure and deterministic: the same signature and configuration always
//! produce the same block, which is what makes regeneration over an
//! existing block idempotent.

mod tags;

use crate::config::RenderConfig;
use crate::signature::{DeclarationKind, DeclarationSignature};
use std::fmt::Write;
use tags::{layout, TagLine};

/// Stateless comment builder over one configuration snapshot.
pub struct Synthesizer<'a> {
    cfg: &'a RenderConfig,
}

impl<'a> Synthesizer<'a> {
    #[must_use]
    pub fn new(cfg: &'a RenderConfig) -> Self {
        Self { cfg }
    }

    /// Renders the block for `sig`. `prior_description` is the free text
    /// lifted from a comment being replaced; it wins over the placeholder
    /// when description preservation is on. `indent` prefixes every line
    /// after the first.
    #[must_use]
    pub fn render(
        &self,
        sig: &DeclarationSignature,
        prior_description: Option<&str>,
        indent: &str,
    ) -> String {
        let cfg = self.cfg;

        let description: Vec<String> = match prior_description {
            Some(d) if cfg.preserve_description && !d.trim().is_empty() => {
                d.lines().map(str::to_string).collect()
            }
            _ if cfg.placeholders => vec![cfg.placeholder_text.clone()],
            _ => Vec::new(),
        };

        let tag_lines = layout(&self.build_tags(sig), cfg.align_columns);
        let opener = cfg.delimiter.opener();

        if tag_lines.is_empty() && description.len() <= 1 && cfg.single_line_trivial {
            return match description.first() {
                Some(d) if !d.is_empty() => format!("{opener} {d} */"),
                _ => format!("{opener} */"),
            };
        }

        let mut out = String::new();
        out.push_str(opener);
        for line in &description {
            push_line(&mut out, indent, line);
        }
        for line in &tag_lines {
            push_line(&mut out, indent, line);
        }
        let _ = write!(out, "\n{indent} */");
        out
    }

    fn placeholder(&self) -> Option<String> {
        if self.cfg.placeholders {
            Some(self.cfg.placeholder_text.clone())
        } else {
            None
        }
    }

    fn build_tags(&self, sig: &DeclarationSignature) -> Vec<TagLine> {
        let cfg = self.cfg;
        let mut tags = Vec::new();

        for tp in &sig.type_parameters {
            tags.push(TagLine {
                tag: "@template".to_string(),
                type_text: tp.constraint.clone().filter(|_| cfg.param_types),
                label: Some(tp.name.clone()),
                description: None,
            });
        }

        if sig.kind.is_function_like() {
            let mut destructured_seen = 0usize;
            for (i, p) in sig.parameters.iter().enumerate() {
                let name = if p.destructured {
                    destructured_seen += 1;
                    if destructured_seen == 1 {
                        cfg.destructure_placeholder.clone()
                    } else {
                        format!("{}{}", cfg.destructure_placeholder, i)
                    }
                } else {
                    p.name.clone()
                };
                let label = if let Some(d) = &p.default_value {
                    format!("[{name}={d}]")
                } else if p.optional {
                    format!("[{name}]")
                } else {
                    name
                };
                let type_text = if cfg.param_types {
                    match (&p.type_text, p.rest) {
                        (Some(t), true) => Some(format!("...{t}")),
                        (Some(t), false) => Some(t.clone()),
                        (None, true) => Some("...*".to_string()),
                        (None, false) => None,
                    }
                } else {
                    None
                };
                tags.push(TagLine {
                    tag: "@param".to_string(),
                    type_text,
                    label: Some(label),
                    description: self.placeholder(),
                });
            }

            if sig.has_documentable_return() {
                tags.push(TagLine {
                    tag: "@returns".to_string(),
                    type_text: sig.return_type.clone().filter(|_| cfg.return_type),
                    label: None,
                    description: self.placeholder(),
                });
            }

            if cfg.document_throws {
                for hint in &sig.throws_hints {
                    tags.push(TagLine {
                        tag: "@throws".to_string(),
                        type_text: Some(hint.clone()),
                        label: None,
                        description: self.placeholder(),
                    });
                }
            }
        }

        if matches!(
            sig.kind,
            DeclarationKind::Property | DeclarationKind::Variable
        ) {
            // the parser stores a property's declared type in `return_type`
            if let Some(t) = &sig.return_type {
                tags.push(TagLine {
                    tag: "@type".to_string(),
                    type_text: Some(t.clone()),
                    label: None,
                    description: self.placeholder().filter(|_| cfg.property_descriptions),
                });
            }
        }

        let m = &sig.modifiers;
        if m.is_async && cfg.tag_async {
            tags.push(TagLine::bare("@async"));
        }
        if m.is_generator {
            tags.push(TagLine::bare("@generator"));
        }
        if m.is_static && cfg.tag_static {
            tags.push(TagLine::bare("@static"));
        }
        if m.is_abstract && cfg.tag_abstract {
            tags.push(TagLine::bare("@abstract"));
        }
        if m.is_readonly && cfg.tag_readonly {
            tags.push(TagLine::bare("@readonly"));
        }
        if cfg.tag_access {
            if let Some(access) = m.access {
                tags.push(TagLine {
                    tag: "@access".to_string(),
                    type_text: None,
                    label: Some(access.as_str().to_string()),
                    description: None,
                });
            }
        }

        if let Some(author) = &cfg.author {
            tags.push(TagLine {
                tag: "@author".to_string(),
                type_text: None,
                label: Some(author.clone()),
                description: None,
            });
        }
        for custom in &cfg.custom_tags {
            tags.push(TagLine::bare(custom));
        }

        tags
    }
}

fn push_line(out: &mut String, indent: &str, content: &str) {
    if content.is_empty() {
        let _ = write!(out, "\n{indent} *");
    } else {
        let _ = write!(out, "\n{indent} * {content}");
    }
}

/// Lifts the free-text description out of an existing comment block: every
/// line before the first `@tag`, with delimiters and `*` gutters stripped.
#[must_use]
pub fn extract_description(comment: &str) -> Option<String> {
    let trimmed = comment.trim();
    let inner = trimmed
        .strip_prefix("/**")
        .or_else(|| trimmed.strip_prefix("/*"))
        .unwrap_or(trimmed);
    let inner = inner.strip_suffix("*/").unwrap_or(inner);

    let mut lines: Vec<String> = Vec::new();
    for raw in inner.lines() {
        let mut line = raw.trim_start();
        if let Some(r) = line.strip_prefix('*') {
            line = r.strip_prefix(' ').unwrap_or(r);
        }
        if line.trim_start().starts_with('@') {
            break;
        }
        lines.push(line.trim_end().to_string());
    }
    while lines.first().is_some_and(|l| l.is_empty()) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_lifted_before_first_tag() {
        let comment = "/**\n * Adds two numbers.\n * @param {number} a\n */";
        assert_eq!(
            extract_description(comment).as_deref(),
            Some("Adds two numbers.")
        );
    }

    #[test]
    fn multi_line_description_preserved() {
        let comment = "/**\n * First line.\n * Second line.\n * @returns x\n */";
        assert_eq!(
            extract_description(comment).as_deref(),
            Some("First line.\nSecond line.")
        );
    }

    #[test]
    fn one_liner_description() {
        assert_eq!(extract_description("/** cached value */").as_deref(), Some("cached value"));
    }

    #[test]
    fn tag_only_block_has_no_description() {
        assert_eq!(extract_description("/**\n * @type {number}\n */"), None);
    }
}
