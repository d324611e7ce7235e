//! `linkit` -- create Linear issues and projects from JSON templates.
//!
//! Parses CLI arguments with clap, resolves the runtime context, and runs
//! the create command. Every failure is reported on stderr with exit code 1.

mod cli;
mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use context::RuntimeContext;

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.global.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("linkit=debug,linkit_exec=debug,linkit_template=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    if let Err(e) = run(&cli) {
        if cli.global.json {
            let err_json = serde_json::json!({
                "error": format!("{:#}", e),
            });
            if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                eprintln!("{}", s);
            }
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = RuntimeContext::from_global_args(&cli.global)?;
    tracing::debug!(settings = ?ctx.settings, retry = ctx.retry, "resolved settings");
    commands::create::run(&ctx, cli)
}
