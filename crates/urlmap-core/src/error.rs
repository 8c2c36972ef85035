//! Error types for loading and parsing URL maps.

use thiserror::Error;

/// The static table is malformed; raised by [`NamespaceUrlResolver::load`].
///
/// Indices are zero-based positions in the input entry list.
///
/// [`NamespaceUrlResolver::load`]: crate::resolver::NamespaceUrlResolver::load
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("entry {index}: namespace is empty")]
    EmptyNamespace { index: usize },

    #[error("entry {duplicate}: namespace '{namespace}' already defined by entry {first}")]
    DuplicateNamespace {
        namespace: String,
        first: usize,
        duplicate: usize,
    },

    #[error("namespace '{namespace}': invalid base URL '{url}': {reason}")]
    InvalidUrl {
        namespace: String,
        url: String,
        reason: String,
    },
}

/// A map file could not be parsed or rendered in the requested format.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("invalid JSON url map: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML url map: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("cannot render TOML url map: {0}")]
    TomlRender(#[from] toml::ser::Error),

    #[error("line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("cannot infer map format from '{0}' (expected .json, .toml or .js)")]
    UnknownExtension(String),
}
