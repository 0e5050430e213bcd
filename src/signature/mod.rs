// src/signature/mod.rs
//! Structured model of a parsed declaration and the lexical machinery that
//! produces it from raw source text.

mod params;
mod parser;
pub(crate) mod scanner;

pub use parser::{parse_at, ParsedDeclaration};

use serde::Serialize;

/// What kind of construct a declaration is.
///
/// The kind decides which other signature fields carry meaning: only
/// function-like kinds have parameters and a return type, only container
/// kinds have members documented separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeclarationKind {
    Function,
    ArrowFunction,
    Method,
    Constructor,
    Getter,
    Setter,
    Class,
    Interface,
    Enum,
    TypeAlias,
    Property,
    Variable,
}

impl DeclarationKind {
    /// Kinds that take a parameter list and may declare a return type.
    #[must_use]
    pub fn is_function_like(self) -> bool {
        matches!(
            self,
            Self::Function
                | Self::ArrowFunction
                | Self::Method
                | Self::Constructor
                | Self::Getter
                | Self::Setter
        )
    }

    /// Kinds whose braced body contains further declarations.
    #[must_use]
    pub fn is_container(self) -> bool {
        matches!(self, Self::Class | Self::Interface | Self::Enum)
    }
}

/// Accessibility keyword on a class member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Public,
    Private,
    Protected,
}

impl Access {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
        }
    }
}

/// Modifier keywords collected while classifying a declaration.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Modifiers {
    pub is_async: bool,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_readonly: bool,
    pub is_generator: bool,
    pub access: Option<Access>,
}

/// One generic type parameter, e.g. `T extends object = Record<string, unknown>`.
#[derive(Debug, Clone, Serialize)]
pub struct TypeParameter {
    pub name: String,
    pub constraint: Option<String>,
    pub default: Option<String>,
}

/// One declared parameter.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterInfo {
    /// Identifier, or a synthesized `param<i>` placeholder when the source
    /// uses a destructuring pattern.
    pub name: String,
    pub type_text: Option<String>,
    /// Declared optional (`?`) or carries a default value.
    pub optional: bool,
    pub default_value: Option<String>,
    pub rest: bool,
    pub destructured: bool,
}

/// The parsed shape of one declaration.
#[derive(Debug, Clone, Serialize)]
pub struct DeclarationSignature {
    pub kind: DeclarationKind,
    /// Absent for anonymous constructs; arrow functions assigned to a
    /// binding take the binding's name.
    pub name: Option<String>,
    pub modifiers: Modifiers,
    pub type_parameters: Vec<TypeParameter>,
    pub parameters: Vec<ParameterInfo>,
    /// Declared return type text; `None` means infer/omit.
    pub return_type: Option<String>,
    /// Best-effort `throw new X` type names found in the body, in order.
    pub throws_hints: Vec<String>,
}

impl DeclarationSignature {
    pub(crate) fn new(kind: DeclarationKind) -> Self {
        Self {
            kind,
            name: None,
            modifiers: Modifiers::default(),
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            return_type: None,
            throws_hints: Vec::new(),
        }
    }

    /// True when the return type warrants a `@returns` tag.
    #[must_use]
    pub fn has_documentable_return(&self) -> bool {
        if matches!(
            self.kind,
            DeclarationKind::Constructor | DeclarationKind::Setter
        ) {
            return false;
        }
        match self.return_type.as_deref() {
            None => false,
            Some(t) => {
                let t = t.trim();
                !t.is_empty() && t != "void" && t != "never"
            }
        }
    }
}
