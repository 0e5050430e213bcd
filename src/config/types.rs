// src/config/types.rs
use serde::{Deserialize, Serialize};

/// Which block delimiter the generated comment opens with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelimiterStyle {
    /// `/**` — the JSDoc form tooling recognizes.
    #[default]
    Jsdoc,
    /// `/*` — a plain block comment.
    Plain,
}

impl DelimiterStyle {
    #[must_use]
    pub fn opener(self) -> &'static str {
        match self {
            Self::Jsdoc => "/**",
            Self::Plain => "/*",
        }
    }
}

/// Immutable rendering snapshot, read once per generation request. Every
/// field is independently toggleable and maps to one dotted configuration
/// key (`render.<field>`).
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Emit `{type}` on `@param` and `@template` tags.
    #[serde(default = "default_true")]
    pub param_types: bool,
    /// Emit `{type}` on the `@returns` tag.
    #[serde(default = "default_true")]
    pub return_type: bool,
    /// Emit placeholder descriptions on `@type` property tags.
    #[serde(default = "default_true")]
    pub property_descriptions: bool,
    /// Pad tag/type/name columns to a shared width per block.
    #[serde(default)]
    pub align_columns: bool,
    /// Emit placeholder description text on summary and tags.
    #[serde(default = "default_true")]
    pub placeholders: bool,
    #[serde(default = "default_placeholder_text")]
    pub placeholder_text: String,
    /// Base name substituted for destructuring patterns.
    #[serde(default = "default_destructure_placeholder")]
    pub destructure_placeholder: String,
    /// Inject an `@author` tag with this value.
    #[serde(default)]
    pub author: Option<String>,
    /// Extra tag lines appended verbatim to every block.
    #[serde(default)]
    pub custom_tags: Vec<String>,
    #[serde(default)]
    pub delimiter: DelimiterStyle,
    /// Collapse blocks with no tags onto one line.
    #[serde(default)]
    pub single_line_trivial: bool,
    /// Lift the prior description when regenerating over a block.
    #[serde(default = "default_true")]
    pub preserve_description: bool,
    /// Emit `@throws` tags from thrown-expression hints.
    #[serde(default)]
    pub document_throws: bool,
    #[serde(default = "default_true")]
    pub tag_async: bool,
    #[serde(default = "default_true")]
    pub tag_static: bool,
    #[serde(default = "default_true")]
    pub tag_abstract: bool,
    #[serde(default = "default_true")]
    pub tag_readonly: bool,
    #[serde(default = "default_true")]
    pub tag_access: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            param_types: default_true(),
            return_type: default_true(),
            property_descriptions: default_true(),
            align_columns: false,
            placeholders: default_true(),
            placeholder_text: default_placeholder_text(),
            destructure_placeholder: default_destructure_placeholder(),
            author: None,
            custom_tags: Vec::new(),
            delimiter: DelimiterStyle::default(),
            single_line_trivial: false,
            preserve_description: default_true(),
            document_throws: false,
            tag_async: default_true(),
            tag_static: default_true(),
            tag_abstract: default_true(),
            tag_readonly: default_true(),
            tag_access: default_true(),
        }
    }
}

const fn default_true() -> bool {
    true
}

fn default_placeholder_text() -> String {
    "[description]".to_string()
}

fn default_destructure_placeholder() -> String {
    "props".to_string()
}

/// On-disk shape of `docsmith.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocsmithToml {
    #[serde(default)]
    pub render: RenderConfig,
}
