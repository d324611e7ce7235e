//! Project and milestone requests.

use crate::Request;
use crate::args::ArgList;

/// `linear project create`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectCreate {
    pub name: String,
    pub team: String,
    pub description: Option<String>,
    /// Long-form markdown body.
    pub content: Option<String>,
    pub lead: Option<String>,
    /// Hex color, e.g. `#5e6ad2`.
    pub color: Option<String>,
    pub start_date: Option<String>,
    pub target_date: Option<String>,
    pub priority: Option<u8>,
    pub status: Option<String>,
}

impl ProjectCreate {
    pub fn new(name: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
            ..Self::default()
        }
    }
}

impl Request for ProjectCreate {
    fn to_args(&self) -> Vec<String> {
        let mut args = ArgList::new(&["project", "create"]);
        args.flag("--name", &self.name)
            .flag("--team", &self.team)
            .opt("--description", self.description.as_ref())
            .opt("--content", self.content.as_ref())
            .opt("--lead", self.lead.as_ref())
            .opt("--color", self.color.as_ref())
            .opt("--start-date", self.start_date.as_ref())
            .opt("--target-date", self.target_date.as_ref())
            .opt("--priority", self.priority.as_ref())
            .opt("--status", self.status.as_ref());
        args.into_vec()
    }
}

/// `linear project update <slug>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectUpdate {
    pub slug: String,
    pub name: Option<String>,
    pub content: Option<String>,
    pub lead: Option<String>,
    pub priority: Option<u8>,
    pub status: Option<String>,
}

impl ProjectUpdate {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            ..Self::default()
        }
    }
}

impl Request for ProjectUpdate {
    fn to_args(&self) -> Vec<String> {
        let mut args = ArgList::new(&["project", "update"]);
        args.arg(&self.slug)
            .opt("--name", self.name.as_ref())
            .opt("--content", self.content.as_ref())
            .opt("--lead", self.lead.as_ref())
            .opt("--priority", self.priority.as_ref())
            .opt("--status", self.status.as_ref());
        args.into_vec()
    }
}

/// `linear project milestone create <project>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MilestoneCreate {
    /// Project slug or id.
    pub project: String,
    pub name: String,
    pub target_date: Option<String>,
    pub description: Option<String>,
}

impl Request for MilestoneCreate {
    fn to_args(&self) -> Vec<String> {
        let mut args = ArgList::new(&["project", "milestone", "create"]);
        args.arg(&self.project)
            .flag("--name", &self.name)
            .opt("--target-date", self.target_date.as_ref())
            .opt("--description", self.description.as_ref());
        args.into_vec()
    }
}
