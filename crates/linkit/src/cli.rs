//! Clap CLI definitions for the `linkit` command.

use std::path::PathBuf;

use clap::{Args, Parser};

use linkit_template::TemplateKind;

/// linkit -- create Linear issues and projects from JSON templates.
#[derive(Parser, Debug)]
#[command(
    name = "linkit",
    about = "Create Linear issues and projects from JSON templates",
    long_about = "Reads a JSON template, substitutes {{variable}} placeholders from an optional \
                  variables file, and creates the resource through the linear CLI.",
    version,
    after_help = "Examples:\n  \
                  linkit issue templates/bug-report.json\n  \
                  linkit issue templates/feature.json vars.json\n  \
                  linkit project templates/quarterly-project.json"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Template type: issue or project.
    #[arg(value_name = "TEMPLATE_TYPE")]
    pub template_type: TemplateKind,

    /// Path to the JSON template.
    #[arg(value_name = "TEMPLATE_PATH")]
    pub template_path: PathBuf,

    /// Optional JSON object of variables to substitute.
    #[arg(value_name = "VARIABLES_PATH")]
    pub variables_path: Option<PathBuf>,
}

/// Flags that tune how the external CLI is invoked.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Settings file (default: linkit.yaml, searched upwards from the working directory).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Program to invoke instead of `linear`.
    #[arg(long)]
    pub program: Option<String>,

    /// Attempts per call when retrying transient failures.
    #[arg(long)]
    pub max_retries: Option<u32>,

    /// Base backoff delay in milliseconds.
    #[arg(long)]
    pub retry_delay_ms: Option<u64>,

    /// Make a single attempt.
    #[arg(long)]
    pub no_retry: bool,

    /// Output in JSON format.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
