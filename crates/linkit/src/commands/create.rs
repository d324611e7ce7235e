//! `linkit <type> <template> [vars]` -- create a resource from a template.
//!
//! Loading, substitution, and validation all finish before the external
//! CLI is started, so a bad template never reaches `linear`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use linkit_exec::{LinearClient, Sleeper, Transport};
use linkit_template::{
    TemplateKind, Variables, issue_from_template, load_template, load_variables, placeholders,
    project_from_template, substitute,
};

use crate::cli::Cli;
use crate::context::RuntimeContext;
use crate::output::print_created;

/// Execute the create command.
pub fn run(ctx: &RuntimeContext, cli: &Cli) -> Result<()> {
    let key = create_from_template(
        &ctx.client(),
        cli.template_type,
        &cli.template_path,
        cli.variables_path.as_deref(),
    )?;
    print_created(cli.template_type, &key, ctx.json);
    Ok(())
}

/// Load, substitute, validate, and create. Returns the created key.
pub fn create_from_template<T: Transport, S: Sleeper>(
    client: &LinearClient<T, S>,
    kind: TemplateKind,
    template_path: &Path,
    variables_path: Option<&Path>,
) -> Result<String> {
    let template = load_template(template_path).context("error loading template")?;
    let variables = match variables_path {
        Some(path) => load_variables(path).context("error loading variables")?,
        None => Variables::new(),
    };

    let template = substitute(&template, &variables);
    let unresolved = placeholders(&template);
    if !unresolved.is_empty() {
        debug!(?unresolved, "template has unresolved placeholders");
    }

    match kind {
        TemplateKind::Issue => {
            let request = issue_from_template(&template).context("invalid issue template")?;
            client
                .create_issue_identifier(&request)
                .context("error creating issue")
        }
        TemplateKind::Project => {
            let request = project_from_template(&template).context("invalid project template")?;
            client
                .create_project_slug(&request)
                .context("error creating project")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::time::Duration;

    use linkit_exec::{Executor, RetryPolicy, TransportError};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    /// Answers every call with the same output and records the arguments.
    struct Canned {
        output: String,
        calls: RefCell<Vec<Vec<String>>>,
    }

    impl Transport for Canned {
        fn run(&self, args: &[String]) -> std::result::Result<String, TransportError> {
            self.calls.borrow_mut().push(args.to_vec());
            Ok(self.output.clone())
        }
    }

    struct NoSleep;

    impl Sleeper for NoSleep {
        fn sleep(&self, _duration: Duration) {}
    }

    fn client(output: &str) -> LinearClient<Canned, NoSleep> {
        let transport = Canned {
            output: output.to_string(),
            calls: RefCell::new(Vec::new()),
        };
        LinearClient::new(Executor::with_sleeper(transport, NoSleep, RetryPolicy::default()))
    }

    fn calls(client: &LinearClient<Canned, NoSleep>) -> Vec<Vec<String>> {
        client.executor().transport().calls.borrow().clone()
    }

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn issue_with_variables() {
        let dir = TempDir::new().unwrap();
        let template = write(
            &dir,
            "bug.json",
            r#"{"title": "Bug: {{summary}}", "team": "{{team}}", "labels": ["bug"]}"#,
        );
        let vars = write(&dir, "vars.json", r#"{"summary": "login fails", "team": "ENG"}"#);
        let client = client(r#"{"success": true, "issue": {"identifier": "ENG-123"}}"#);

        let id = create_from_template(&client, TemplateKind::Issue, &template, Some(vars.as_path())).unwrap();
        assert_eq!(id, "ENG-123");
        assert_eq!(
            calls(&client),
            vec![vec![
                "issue", "create", "--title", "Bug: login fails", "--team", "ENG", "--label", "bug",
                "--json",
            ]]
        );
    }

    #[test]
    fn project_without_variables() {
        let dir = TempDir::new().unwrap();
        let template = write(&dir, "q3.json", r#"{"name": "Q3 Platform", "team": "ENG"}"#);
        let client = client(r#"{"success": true, "project": {"slug": "q3-platform"}}"#);
        let slug = create_from_template(&client, TemplateKind::Project, &template, None).unwrap();
        assert_eq!(slug, "q3-platform");
    }

    #[test]
    fn missing_team_never_invokes_cli() {
        let dir = TempDir::new().unwrap();
        let template = write(&dir, "bug.json", r#"{"title": "Bug"}"#);
        let client = client(r#"{"success": true}"#);
        let err = create_from_template(&client, TemplateKind::Issue, &template, None).unwrap_err();
        assert!(format!("{err:#}").contains("'team'"), "{err:#}");
        assert!(calls(&client).is_empty());
    }

    #[test]
    fn bad_variables_file_never_invokes_cli() {
        let dir = TempDir::new().unwrap();
        let template = write(&dir, "bug.json", r#"{"title": "Bug", "team": "ENG"}"#);
        let vars = write(&dir, "vars.json", "not json");
        let client = client(r#"{"success": true}"#);
        let err = create_from_template(&client, TemplateKind::Issue, &template, Some(vars.as_path()))
            .unwrap_err();
        assert!(format!("{err:#}").starts_with("error loading variables"), "{err:#}");
        assert!(calls(&client).is_empty());
    }

    #[test]
    fn template_for_wrong_kind_is_rejected() {
        let dir = TempDir::new().unwrap();
        let template = write(&dir, "bug.json", r#"{"title": "Bug", "team": "ENG"}"#);
        let client = client(r#"{"success": true}"#);
        let err =
            create_from_template(&client, TemplateKind::Project, &template, None).unwrap_err();
        assert!(format!("{err:#}").contains("'name'"), "{err:#}");
    }
}
