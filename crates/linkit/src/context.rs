//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds resolved settings and output flags. It is
//! built once in `main` after CLI parsing.

use anyhow::{Context, Result};

use linkit_config::Settings;
use linkit_exec::{Executor, LinearClient, ProcessTransport, RetryPolicy};

use crate::cli::GlobalArgs;

#[derive(Debug)]
pub struct RuntimeContext {
    /// Settings after file, environment, and flag layers.
    pub settings: Settings,

    /// Whether transient failures are retried.
    pub retry: bool,

    /// Whether to produce JSON output.
    pub json: bool,
}

impl RuntimeContext {
    /// Load settings and apply command-line overrides on top.
    pub fn from_global_args(global: &GlobalArgs) -> Result<Self> {
        let mut settings =
            Settings::load(global.config.as_deref()).context("failed to load settings")?;
        apply_overrides(&mut settings, global);
        settings.validate().context("invalid command-line settings")?;

        Ok(Self {
            settings,
            retry: !global.no_retry,
            json: global.json,
        })
    }

    /// A client that runs the configured program as a subprocess.
    pub fn client(&self) -> LinearClient<ProcessTransport> {
        let policy = RetryPolicy::new(self.settings.max_retries, self.settings.retry_delay());
        let executor = Executor::new(ProcessTransport::new(&self.settings.program), policy);
        LinearClient::new(executor).with_retry(self.retry)
    }
}

fn apply_overrides(settings: &mut Settings, global: &GlobalArgs) {
    if let Some(ref program) = global.program {
        settings.program = program.clone();
    }
    if let Some(max_retries) = global.max_retries {
        settings.max_retries = max_retries;
    }
    if let Some(delay) = global.retry_delay_ms {
        settings.retry_delay_ms = delay;
    }
}
