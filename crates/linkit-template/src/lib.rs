//! JSON templates for Linear issues and projects.
//!
//! A template is any JSON document whose strings may contain `{{name}}`
//! placeholders. Loading, substitution, and validation into typed requests
//! are separate steps so that each can fail with its own error.

pub mod error;
pub mod loader;
pub mod resource;
pub mod substitute;

pub use error::{Result, TemplateError};
pub use loader::{load_template, load_variables, variables_from_value};
pub use resource::{TemplateKind, issue_from_template, project_from_template};
pub use substitute::{Variables, placeholders, substitute, substitute_str};
