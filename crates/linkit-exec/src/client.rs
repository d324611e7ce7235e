//! Typed operations over an [`Executor`].

use linkit_core::document::DocumentCreate;
use linkit_core::issue::{IssueCreate, IssueList, IssueUpdate, IssueView};
use linkit_core::label::LabelCreate;
use linkit_core::project::{MilestoneCreate, ProjectCreate, ProjectUpdate};
use linkit_core::{CommandResult, Request};

use crate::error::{ExecError, Result};
use crate::executor::Executor;
use crate::retry::{Sleeper, ThreadSleeper};
use crate::transport::Transport;

/// One method per supported `linear` operation.
#[derive(Debug)]
pub struct LinearClient<T, S = ThreadSleeper> {
    executor: Executor<T, S>,
    retry: bool,
}

impl<T: Transport, S: Sleeper> LinearClient<T, S> {
    /// Retries are enabled by default.
    pub fn new(executor: Executor<T, S>) -> Self {
        Self {
            executor,
            retry: true,
        }
    }

    pub fn with_retry(mut self, retry: bool) -> Self {
        self.retry = retry;
        self
    }

    pub fn executor(&self) -> &Executor<T, S> {
        &self.executor
    }

    /// Run any request.
    pub fn run<R: Request>(&self, request: &R) -> Result<CommandResult> {
        self.executor.execute(&request.to_args(), self.retry)
    }

    // -- issues --------------------------------------------------------------

    pub fn create_issue(&self, request: &IssueCreate) -> Result<CommandResult> {
        self.run(request)
    }

    /// Create an issue and return its identifier, e.g. `ENG-123`.
    pub fn create_issue_identifier(&self, request: &IssueCreate) -> Result<String> {
        let result = self.create_issue(request)?;
        result
            .issue_identifier()
            .map(str::to_string)
            .ok_or(ExecError::MissingPayload {
                field: "issue.identifier",
            })
    }

    pub fn update_issue(&self, request: &IssueUpdate) -> Result<CommandResult> {
        self.run(request)
    }

    pub fn get_issue(&self, identifier: &str) -> Result<CommandResult> {
        self.run(&IssueView {
            identifier: identifier.to_string(),
        })
    }

    pub fn list_issues(&self, team: Option<&str>) -> Result<CommandResult> {
        self.run(&IssueList {
            team: team.map(str::to_string),
        })
    }

    // -- projects ------------------------------------------------------------

    pub fn create_project(&self, request: &ProjectCreate) -> Result<CommandResult> {
        self.run(request)
    }

    /// Create a project and return its slug.
    pub fn create_project_slug(&self, request: &ProjectCreate) -> Result<String> {
        let result = self.create_project(request)?;
        result
            .project_slug()
            .map(str::to_string)
            .ok_or(ExecError::MissingPayload {
                field: "project.slug",
            })
    }

    pub fn update_project(&self, request: &ProjectUpdate) -> Result<CommandResult> {
        self.run(request)
    }

    pub fn create_milestone(&self, request: &MilestoneCreate) -> Result<CommandResult> {
        self.run(request)
    }

    // -- labels & documents --------------------------------------------------

    pub fn create_label(&self, request: &LabelCreate) -> Result<CommandResult> {
        self.run(request)
    }

    pub fn create_document(&self, request: &DocumentCreate) -> Result<CommandResult> {
        self.run(request)
    }
}
