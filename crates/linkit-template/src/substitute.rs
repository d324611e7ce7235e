//! `{{variable}}` substitution over JSON documents.

use std::collections::{BTreeSet, HashMap};

use serde_json::Value;

/// Placeholder name to replacement text.
pub type Variables = HashMap<String, String>;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Return a copy of `template` with placeholders replaced in every string.
///
/// Objects keep their keys, arrays keep their order and length, and
/// non-string scalars are copied unchanged.
pub fn substitute(template: &Value, vars: &Variables) -> Value {
    match template {
        Value::String(s) => Value::String(substitute_str(s, vars)),
        Value::Array(items) => Value::Array(items.iter().map(|v| substitute(v, vars)).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), substitute(v, vars)))
                .collect(),
        ),
        scalar => scalar.clone(),
    }
}

/// Replace each `{{name}}` in `text` whose name is in `vars`.
///
/// The text is scanned once, so replacement values are never rescanned.
/// Unknown placeholders are left as-is.
pub fn substitute_str(text: &str, vars: &Variables) -> String {
    if vars.is_empty() || !text.contains(OPEN) {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find(OPEN) {
        result.push_str(&rest[..open]);
        let inner = &rest[open + OPEN.len()..];
        if let Some(close) = inner.find(CLOSE) {
            if let Some(value) = vars.get(&inner[..close]) {
                result.push_str(value);
                rest = &inner[close + CLOSE.len()..];
                continue;
            }
        }
        // No match here; a placeholder may still start at the next brace.
        result.push('{');
        rest = &rest[open + 1..];
    }
    result.push_str(rest);
    result
}

/// Names of all placeholders left in a document, sorted and deduplicated.
pub fn placeholders(value: &Value) -> Vec<String> {
    let mut names = BTreeSet::new();
    collect_placeholders(value, &mut names);
    names.into_iter().collect()
}

fn collect_placeholders(value: &Value, names: &mut BTreeSet<String>) {
    match value {
        Value::String(s) => scan_placeholders(s, names),
        Value::Array(items) => items.iter().for_each(|v| collect_placeholders(v, names)),
        Value::Object(map) => map.values().for_each(|v| collect_placeholders(v, names)),
        _ => {}
    }
}

fn scan_placeholders(text: &str, names: &mut BTreeSet<String>) {
    let mut rest = text;
    while let Some(open) = rest.find(OPEN) {
        let inner = &rest[open + OPEN.len()..];
        match inner.find(CLOSE) {
            Some(close) => {
                let name = &inner[..close];
                if !name.is_empty() && !name.contains(OPEN) {
                    names.insert(name.to_string());
                }
                rest = &inner[close + CLOSE.len()..];
            }
            None => break,
        }
    }
}
