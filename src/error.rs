// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocError {
    #[error("nothing to document here: no declaration found near the target position")]
    NotADeclaration,

    #[error("unbalanced brackets near line {line}: declaration skipped")]
    UnbalancedSyntax { line: usize },

    #[error("no active document to operate on")]
    NoActiveTarget,

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, DocError>;

// Allow `?` on std::io::Error by converting to DocError::Io with unknown path.
impl From<std::io::Error> for DocError {
    fn from(source: std::io::Error) -> Self {
        DocError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
