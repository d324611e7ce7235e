//! Output formatting helpers for the `linkit` CLI.

use std::io::{self, Write};

use serde_json::json;

use linkit_template::TemplateKind;

/// Print a value as pretty-printed JSON to stdout.
pub fn output_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// Report a created resource by its key (issue identifier or project slug).
pub fn print_created(kind: TemplateKind, key: &str, json: bool) {
    if json {
        let field = match kind {
            TemplateKind::Issue => "identifier",
            TemplateKind::Project => "slug",
        };
        output_json(&json!({ "type": kind.as_str(), field: key }));
    } else {
        println!("✓ Created {}: {}", kind, key);
    }
}
