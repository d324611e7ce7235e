//! The process boundary.
//!
//! A [`Transport`] runs the external program once and hands back whatever
//! it printed on stdout. Exit status and stderr do not decide success; the
//! envelope does.

use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::debug;

/// Errors at the transport level: the process could not be run at all.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The program could not be found or spawned.
    #[error("failed to spawn `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Run the external CLI once with a full argument list.
pub trait Transport {
    /// Returns captured stdout.
    fn run(&self, args: &[String]) -> Result<String, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn run(&self, args: &[String]) -> Result<String, TransportError> {
        (**self).run(args)
    }
}

/// Runs a real subprocess and waits for it without a timeout.
#[derive(Debug, Clone)]
pub struct ProcessTransport {
    program: String,
}

impl ProcessTransport {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Transport for ProcessTransport {
    fn run(&self, args: &[String]) -> Result<String, TransportError> {
        debug!(program = %self.program, ?args, "spawning");
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| TransportError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!(
            exit_code = ?output.status.code(),
            stderr = %stderr.trim(),
            "process finished"
        );
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
