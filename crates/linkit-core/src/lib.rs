//! Core types for the linkit wrapper.
//!
//! This crate holds the response envelope printed by the `linear` CLI and
//! the typed request structures that render the CLI's argument lists. It
//! performs no I/O; running the process lives in `linkit-exec`.

pub mod args;
pub mod document;
pub mod envelope;
pub mod issue;
pub mod label;
pub mod project;

pub use envelope::{CommandResult, EnvelopeError, ErrorCode, ErrorDescriptor};

/// A single logical operation of the external CLI.
///
/// Implementors render the operation arguments only. The executor appends
/// the output-format flag.
pub trait Request {
    /// Render the argument list, excluding the program name.
    fn to_args(&self) -> Vec<String>;
}
