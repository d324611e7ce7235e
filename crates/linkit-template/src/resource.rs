//! Validate substituted templates into typed create requests.
//!
//! Issue templates require `title` and `team`; project templates require
//! `name` and `team`. Optional fields map one-to-one to CLI flags; unknown
//! fields are ignored.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use linkit_core::issue::IssueCreate;
use linkit_core::project::ProjectCreate;

use crate::error::{Result, TemplateError};

/// The kind of resource a template creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Issue,
    Project,
}

impl TemplateKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Issue => "issue",
            Self::Project => "project",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "issue" => Ok(Self::Issue),
            "project" => Ok(Self::Project),
            other => Err(TemplateError::UnknownKind(other.to_string())),
        }
    }
}

/// Build an [`IssueCreate`] from a substituted issue template.
pub fn issue_from_template(template: &Value) -> Result<IssueCreate> {
    let fields = Fields::new(template)?;
    Ok(IssueCreate {
        title: fields.required_str("title")?,
        team: fields.required_str("team")?,
        description: fields.opt_str("description")?,
        priority: fields.opt_int("priority")?,
        estimate: fields.opt_int("estimate")?,
        assignee: fields.opt_str("assignee")?,
        labels: fields.list("labels")?,
        project: fields.opt_str("project")?,
        milestone: fields.opt_str("milestone")?,
        cycle: fields.opt_str("cycle")?,
        parent: fields.opt_str("parent")?,
        state: fields.opt_str("state")?,
        due_date: fields.opt_str("due_date")?,
        blocks: fields.list("blocks")?,
        related_to: fields.list("related_to")?,
    })
}

/// Build a [`ProjectCreate`] from a substituted project template.
pub fn project_from_template(template: &Value) -> Result<ProjectCreate> {
    let fields = Fields::new(template)?;
    Ok(ProjectCreate {
        name: fields.required_str("name")?,
        team: fields.required_str("team")?,
        description: fields.opt_str("description")?,
        content: fields.opt_str("content")?,
        lead: fields.opt_str("lead")?,
        color: fields.opt_str("color")?,
        start_date: fields.opt_str("start_date")?,
        target_date: fields.opt_str("target_date")?,
        priority: fields.opt_int("priority")?,
        status: fields.opt_str("status")?,
    })
}

// ---------------------------------------------------------------------------
// Field access
// ---------------------------------------------------------------------------

struct Fields<'a>(&'a Map<String, Value>);

impl<'a> Fields<'a> {
    fn new(template: &'a Value) -> Result<Self> {
        template
            .as_object()
            .map(Fields)
            .ok_or(TemplateError::NotAnObject)
    }

    /// A present, non-null field.
    fn get(&self, field: &str) -> Option<&'a Value> {
        self.0.get(field).filter(|v| !v.is_null())
    }

    fn required_str(&self, field: &'static str) -> Result<String> {
        self.opt_str(field)?
            .ok_or(TemplateError::MissingField { field })
    }

    fn opt_str(&self, field: &'static str) -> Result<Option<String>> {
        self.get(field).map(|v| scalar_text(field, v)).transpose()
    }

    fn opt_int<T>(&self, field: &'static str) -> Result<Option<T>>
    where
        T: TryFrom<u64> + FromStr,
    {
        let Some(value) = self.get(field) else {
            return Ok(None);
        };
        let invalid = || TemplateError::InvalidField {
            field,
            reason: format!("expected a non-negative integer in range, got {value}"),
        };
        let parsed = match value {
            Value::Number(n) => n.as_u64().and_then(|n| T::try_from(n).ok()),
            Value::String(s) => s.trim().parse::<T>().ok(),
            _ => None,
        };
        parsed.map(Some).ok_or_else(invalid)
    }

    fn list(&self, field: &'static str) -> Result<Vec<String>> {
        match self.get(field) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items.iter().map(|v| scalar_text(field, v)).collect(),
            Some(other) => Err(TemplateError::InvalidField {
                field,
                reason: format!("expected an array, got {other}"),
            }),
        }
    }
}

fn scalar_text(field: &'static str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(TemplateError::InvalidField {
            field,
            reason: format!("expected text, got {other}"),
        }),
    }
}
