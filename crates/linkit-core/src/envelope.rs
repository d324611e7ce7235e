//! The JSON response envelope printed by the `linear` CLI in `--json` mode.
//!
//! ```json
//! {"success": false, "error": {"code": "NOT_FOUND", "message": "Issue not found"}}
//! {"success": true, "issue": {"identifier": "ENG-123"}}
//! ```
//!
//! `success` is optional: some operations omit it, and its absence is read
//! as success.

use std::fmt;

use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Error codes
// ---------------------------------------------------------------------------

/// Machine-readable error code reported by the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    NotFound,
    InvalidValue,
    MissingRequiredField,
    /// Any other code, including API errors and rate limiting.
    Other(String),
}

impl ErrorCode {
    /// Code used when a failed envelope carries no code.
    pub const UNKNOWN: &'static str = "UNKNOWN";

    pub fn as_str(&self) -> &str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::InvalidValue => "INVALID_VALUE",
            Self::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            Self::Other(code) => code,
        }
    }

    /// Terminal codes describe a definitive rejection; retrying cannot help.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for ErrorCode {
    fn from(s: &str) -> Self {
        match s {
            "NOT_FOUND" => Self::NotFound,
            "INVALID_VALUE" => Self::InvalidValue,
            "MISSING_REQUIRED_FIELD" => Self::MissingRequiredField,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `error` object of a failed envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDescriptor {
    pub code: ErrorCode,
    pub message: String,
}

impl Default for ErrorDescriptor {
    fn default() -> Self {
        Self {
            code: ErrorCode::Other(ErrorCode::UNKNOWN.to_string()),
            message: "Unknown error".to_string(),
        }
    }
}

impl ErrorDescriptor {
    /// Read `code` and `message` from an `error` value, filling in defaults
    /// for anything missing or not a string.
    fn from_value(value: Option<&Value>) -> Self {
        let mut descriptor = Self::default();
        if let Some(obj) = value.and_then(Value::as_object) {
            if let Some(code) = obj.get("code").and_then(Value::as_str) {
                descriptor.code = ErrorCode::from(code);
            }
            if let Some(message) = obj.get("message").and_then(Value::as_str) {
                descriptor.message = message.to_string();
            }
        }
        descriptor
    }
}

// ---------------------------------------------------------------------------
// Command result
// ---------------------------------------------------------------------------

/// Errors raised while interpreting a parsed JSON value as an envelope.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// A parsed envelope for a single invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResult {
    pub success: bool,
    /// Present only when `success` is false.
    pub error: Option<ErrorDescriptor>,
    /// Every other top-level field of the envelope.
    pub payload: Map<String, Value>,
}

impl CommandResult {
    /// Interpret a parsed JSON value as an envelope.
    pub fn from_value(value: Value) -> Result<Self, EnvelopeError> {
        let mut payload = match value {
            Value::Object(map) => map,
            other => return Err(EnvelopeError::NotAnObject(kind_name(&other))),
        };

        let success = payload.remove("success").is_none_or(|v| is_truthy(&v));
        let error = if success {
            None
        } else {
            Some(ErrorDescriptor::from_value(payload.get("error")))
        };
        payload.remove("error");

        Ok(Self {
            success,
            error,
            payload,
        })
    }

    /// Look up a top-level payload field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    /// `issue.identifier`, returned by issue creation.
    pub fn issue_identifier(&self) -> Option<&str> {
        self.nested_str("issue", "identifier")
    }

    /// `project.slug`, returned by project creation.
    pub fn project_slug(&self) -> Option<&str> {
        self.nested_str("project", "slug")
    }

    fn nested_str(&self, object: &str, field: &str) -> Option<&str> {
        self.payload.get(object)?.get(field)?.as_str()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
