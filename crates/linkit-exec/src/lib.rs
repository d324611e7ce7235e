//! Running the `linear` CLI.
//!
//! [`Executor`] runs one logical operation through a [`Transport`], parses
//! the JSON envelope, and retries transient failures with linear backoff.
//! [`LinearClient`] layers typed requests on top.

pub mod client;
pub mod error;
pub mod executor;
pub mod retry;
pub mod transport;

pub use client::LinearClient;
pub use error::{ExecError, Result};
pub use executor::{Executor, JSON_FLAG};
pub use retry::{RetryPolicy, Sleeper, ThreadSleeper};
pub use transport::{ProcessTransport, Transport, TransportError};
