//! Template error types.

use std::path::PathBuf;

/// Errors raised while loading or validating templates.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// The template or variables file does not exist.
    #[error("template not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("invalid JSON in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The template's top level is not a JSON object.
    #[error("template must be a JSON object")]
    NotAnObject,

    /// A required field is absent.
    #[error("template must include a '{field}' field")]
    MissingField { field: &'static str },

    /// A field is present but has the wrong type.
    #[error("invalid value for '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("variables must be a JSON object of name/value pairs")]
    VariablesNotObject,

    /// A variable value cannot be rendered as text.
    #[error("variable '{name}' must be a string, number, or boolean")]
    InvalidVariable { name: String },

    #[error("unknown template type '{0}' (valid types: issue, project)")]
    UnknownKind(String),
}

/// A specialized `Result` type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;
