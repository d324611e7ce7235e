//! Executor error types.

use linkit_core::ErrorCode;

use crate::transport::TransportError;

/// The single terminal cause of a failed call.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The process could not be run.
    #[error("failed to execute command")]
    Transport(#[from] TransportError),

    /// stdout was not a JSON object. Never retried.
    #[error("failed to parse JSON response: {reason}\nOutput: {output}")]
    MalformedResponse { reason: String, output: String },

    /// The CLI reported a failure in its envelope.
    #[error("{message} (code: {code})")]
    Operation { code: ErrorCode, message: String },

    /// Every attempt failed with a transient error.
    #[error("maximum retries exceeded after {attempts} attempts")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        last: Box<ExecError>,
    },

    /// A success envelope lacked the expected payload.
    #[error("response is missing `{field}`")]
    MissingPayload { field: &'static str },
}

impl ExecError {
    /// Transport failures and non-terminal operation errors may be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Operation { code, .. } => !code.is_terminal(),
            _ => false,
        }
    }

    /// The error code reported by the CLI, looking through retry exhaustion.
    pub fn code(&self) -> Option<&ErrorCode> {
        match self {
            Self::Operation { code, .. } => Some(code),
            Self::RetriesExhausted { last, .. } => last.code(),
            _ => None,
        }
    }

    /// The message reported by the CLI, looking through retry exhaustion.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Operation { message, .. } => Some(message),
            Self::RetriesExhausted { last, .. } => last.api_message(),
            _ => None,
        }
    }
}

/// A specialized `Result` type for executor operations.
pub type Result<T> = std::result::Result<T, ExecError>;
