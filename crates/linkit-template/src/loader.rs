//! Load template and variable files from disk.

use std::path::Path;

use serde_json::Value;

use crate::error::{Result, TemplateError};
use crate::substitute::Variables;

/// Read and parse a JSON template file.
///
/// # Errors
///
/// [`TemplateError::NotFound`] if the file does not exist,
/// [`TemplateError::Read`] on I/O failure, [`TemplateError::Parse`] on
/// malformed JSON.
pub fn load_template(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(TemplateError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(|source| TemplateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| TemplateError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a variables file: a JSON object of name/value pairs.
pub fn load_variables(path: &Path) -> Result<Variables> {
    variables_from_value(load_template(path)?)
}

/// Convert a JSON object into a variable set.
///
/// Strings are taken verbatim; numbers and booleans use their JSON text.
pub fn variables_from_value(value: Value) -> Result<Variables> {
    let Value::Object(map) = value else {
        return Err(TemplateError::VariablesNotObject);
    };
    map.into_iter()
        .map(|(name, value)| {
            let text = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => return Err(TemplateError::InvalidVariable { name }),
            };
            Ok((name, text))
        })
        .collect()
}
