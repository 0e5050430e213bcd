// src/config/mod.rs
pub mod types;

pub use self::types::{DelimiterStyle, DocsmithToml, RenderConfig};

use std::fs;
use std::path::Path;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "docsmith.toml";

impl RenderConfig {
    /// Reads `docsmith.toml` from the working directory, falling back to
    /// defaults when the file is absent or malformed.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(_) => Self::default(),
        }
    }

    #[must_use]
    pub fn from_toml_str(content: &str) -> Self {
        toml::from_str::<DocsmithToml>(content)
            .map(|t| t.render)
            .unwrap_or_default()
    }

    /// Resolves one flat dotted configuration entry, the way an editor host
    /// exposes settings. Returns `false` for unknown keys or mismatched
    /// value types, leaving the field at its previous value.
    pub fn apply_entry(&mut self, key: &str, value: &toml::Value) -> bool {
        match key {
            "render.param_types" => set_bool(&mut self.param_types, value),
            "render.return_type" => set_bool(&mut self.return_type, value),
            "render.property_descriptions" => set_bool(&mut self.property_descriptions, value),
            "render.align_columns" => set_bool(&mut self.align_columns, value),
            "render.placeholders" => set_bool(&mut self.placeholders, value),
            "render.placeholder_text" => set_string(&mut self.placeholder_text, value),
            "render.destructure_placeholder" => {
                set_string(&mut self.destructure_placeholder, value)
            }
            "render.author" => match value.as_str() {
                Some(s) => {
                    self.author = Some(s.to_string());
                    true
                }
                None => false,
            },
            "render.custom_tags" => match value.as_array() {
                Some(items) => {
                    let tags: Option<Vec<String>> = items
                        .iter()
                        .map(|v| v.as_str().map(str::to_string))
                        .collect();
                    match tags {
                        Some(t) => {
                            self.custom_tags = t;
                            true
                        }
                        None => false,
                    }
                }
                None => false,
            },
            "render.delimiter" => match value.as_str() {
                Some("jsdoc") => {
                    self.delimiter = DelimiterStyle::Jsdoc;
                    true
                }
                Some("plain") => {
                    self.delimiter = DelimiterStyle::Plain;
                    true
                }
                _ => false,
            },
            "render.single_line_trivial" => set_bool(&mut self.single_line_trivial, value),
            "render.preserve_description" => set_bool(&mut self.preserve_description, value),
            "render.document_throws" => set_bool(&mut self.document_throws, value),
            "render.tag_async" => set_bool(&mut self.tag_async, value),
            "render.tag_static" => set_bool(&mut self.tag_static, value),
            "render.tag_abstract" => set_bool(&mut self.tag_abstract, value),
            "render.tag_readonly" => set_bool(&mut self.tag_readonly, value),
            "render.tag_access" => set_bool(&mut self.tag_access, value),
            _ => false,
        }
    }
}

fn set_bool(slot: &mut bool, value: &toml::Value) -> bool {
    match value.as_bool() {
        Some(b) => {
            *slot = b;
            true
        }
        None => false,
    }
}

fn set_string(slot: &mut String, value: &toml::Value) -> bool {
    match value.as_str() {
        Some(s) => {
            *slot = s.to_string();
            true
        }
        None => false,
    }
}
