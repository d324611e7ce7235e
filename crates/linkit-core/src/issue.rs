//! Issue requests: create, update, view, list.

use crate::Request;
use crate::args::ArgList;

/// `linear issue create`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueCreate {
    pub title: String,
    /// Team key, e.g. `ENG`.
    pub team: String,
    pub description: Option<String>,
    /// 0 (none) to 4 (low).
    pub priority: Option<u8>,
    pub estimate: Option<u32>,
    pub assignee: Option<String>,
    pub labels: Vec<String>,
    pub project: Option<String>,
    pub milestone: Option<String>,
    pub cycle: Option<String>,
    /// Parent issue identifier.
    pub parent: Option<String>,
    pub state: Option<String>,
    /// `YYYY-MM-DD`.
    pub due_date: Option<String>,
    pub blocks: Vec<String>,
    pub related_to: Vec<String>,
}

impl IssueCreate {
    pub fn new(title: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            team: team.into(),
            ..Self::default()
        }
    }
}

impl Request for IssueCreate {
    fn to_args(&self) -> Vec<String> {
        let mut args = ArgList::new(&["issue", "create"]);
        args.flag("--title", &self.title)
            .flag("--team", &self.team)
            .opt("--description", self.description.as_ref())
            .opt("--priority", self.priority.as_ref())
            .opt("--estimate", self.estimate.as_ref())
            .opt("--assignee", self.assignee.as_ref())
            .list("--label", &self.labels)
            .opt("--project", self.project.as_ref())
            .opt("--milestone", self.milestone.as_ref())
            .opt("--cycle", self.cycle.as_ref())
            .opt("--parent", self.parent.as_ref())
            .opt("--state", self.state.as_ref())
            .opt("--due-date", self.due_date.as_ref())
            .list("--blocks", &self.blocks)
            .list("--related-to", &self.related_to);
        args.into_vec()
    }
}

/// `linear issue update <identifier>`.
///
/// Only `Some` fields are sent; `labels` replaces the label set when
/// non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueUpdate {
    pub identifier: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<u8>,
    pub estimate: Option<u32>,
    pub assignee: Option<String>,
    pub labels: Vec<String>,
    pub state: Option<String>,
    pub due_date: Option<String>,
}

impl IssueUpdate {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }
}

impl Request for IssueUpdate {
    fn to_args(&self) -> Vec<String> {
        let mut args = ArgList::new(&["issue", "update"]);
        args.arg(&self.identifier)
            .opt("--title", self.title.as_ref())
            .opt("--description", self.description.as_ref())
            .opt("--priority", self.priority.as_ref())
            .opt("--estimate", self.estimate.as_ref())
            .opt("--assignee", self.assignee.as_ref())
            .list("--label", &self.labels)
            .opt("--state", self.state.as_ref())
            .opt("--due-date", self.due_date.as_ref());
        args.into_vec()
    }
}

/// `linear issue view <identifier>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueView {
    pub identifier: String,
}

impl Request for IssueView {
    fn to_args(&self) -> Vec<String> {
        let mut args = ArgList::new(&["issue", "view"]);
        args.arg(&self.identifier);
        args.into_vec()
    }
}

/// `linear issue list [--team <key>]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueList {
    pub team: Option<String>,
}

impl Request for IssueList {
    fn to_args(&self) -> Vec<String> {
        let mut args = ArgList::new(&["issue", "list"]);
        args.opt("--team", self.team.as_ref());
        args.into_vec()
    }
}
