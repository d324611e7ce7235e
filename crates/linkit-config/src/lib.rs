//! Configuration for the linkit wrapper.
//!
//! Settings are layered with figment: built-in defaults, then an optional
//! `linkit.yaml`, then `LINKIT_*` environment variables. Command-line flags
//! are applied on top by the binary.

pub mod settings;

pub use settings::{ConfigError, Settings};
