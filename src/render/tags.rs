// src/render/tags.rs
//! Tag-line model and column layout for comment blocks.

/// One `@tag` line before layout: the pieces are kept separate so column
/// alignment can pad them against the rest of the block.
#[derive(Debug, Clone)]
pub(crate) struct TagLine {
    pub tag: String,
    /// Type text, rendered inside `{...}` at layout time.
    pub type_text: Option<String>,
    /// Name or value column, already in its final form (`[name=default]`).
    pub label: Option<String>,
    pub description: Option<String>,
}

impl TagLine {
    pub(crate) fn bare(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            type_text: None,
            label: None,
            description: None,
        }
    }
}

/// Renders tag lines to text. With `align` set, the tag, type, and label
/// columns are padded to the widest entry of this block — widths are a
/// property of one block, never shared across declarations.
pub(crate) fn layout(tags: &[TagLine], align: bool) -> Vec<String> {
    if !align {
        return tags.iter().map(render_plain).collect();
    }

    let tag_w = tags.iter().map(|t| t.tag.len()).max().unwrap_or(0);
    let type_w = tags
        .iter()
        .filter_map(|t| t.type_text.as_ref())
        .map(|t| t.len() + 2)
        .max();
    let label_w = tags
        .iter()
        .filter_map(|t| t.label.as_ref())
        .map(String::len)
        .max();

    tags.iter()
        .map(|t| {
            let mut out = format!("{:tag_w$}", t.tag);
            if let Some(w) = type_w {
                let cell = t
                    .type_text
                    .as_ref()
                    .map_or_else(String::new, |ty| format!("{{{ty}}}"));
                out.push(' ');
                out.push_str(&format!("{cell:w$}"));
            }
            if let Some(w) = label_w {
                let cell = t.label.clone().unwrap_or_default();
                out.push(' ');
                out.push_str(&format!("{cell:w$}"));
            }
            if let Some(desc) = &t.description {
                out.push(' ');
                out.push_str(desc);
            }
            out.trim_end().to_string()
        })
        .collect()
}

fn render_plain(t: &TagLine) -> String {
    let mut out = t.tag.clone();
    if let Some(ty) = &t.type_text {
        out.push_str(&format!(" {{{ty}}}"));
    }
    if let Some(label) = &t.label {
        out.push(' ');
        out.push_str(label);
    }
    if let Some(desc) = &t.description {
        out.push(' ');
        out.push_str(desc);
    }
    out
}
