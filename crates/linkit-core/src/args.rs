//! Argument list builder shared by the request types.

/// Accumulates CLI arguments in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgList(Vec<String>);

impl ArgList {
    /// Start an argument list with a fixed command prefix, e.g. `["issue", "create"]`.
    pub fn new(prefix: &[&str]) -> Self {
        Self(prefix.iter().map(|s| s.to_string()).collect())
    }

    /// Push a bare positional argument.
    pub fn arg(&mut self, value: impl Into<String>) -> &mut Self {
        self.0.push(value.into());
        self
    }

    /// Push `flag value`.
    pub fn flag(&mut self, flag: &str, value: impl Into<String>) -> &mut Self {
        self.0.push(flag.to_string());
        self.0.push(value.into());
        self
    }

    /// Push `flag value` when the value is present.
    pub fn opt<T: ToString + ?Sized>(&mut self, flag: &str, value: Option<&T>) -> &mut Self {
        if let Some(v) = value {
            self.flag(flag, v.to_string());
        }
        self
    }

    /// Push `flag v1 v2 ...`; nothing for an empty list.
    pub fn list(&mut self, flag: &str, values: &[String]) -> &mut Self {
        if !values.is_empty() {
            self.0.push(flag.to_string());
            self.0.extend(values.iter().cloned());
        }
        self
    }

    /// Push a boolean switch when `on` is true.
    pub fn switch(&mut self, flag: &str, on: bool) -> &mut Self {
        if on {
            self.0.push(flag.to_string());
        }
        self
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}
