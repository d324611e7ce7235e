//! `linear document create`.

use crate::Request;
use crate::args::ArgList;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentCreate {
    pub title: String,
    pub content: String,
    pub project: Option<String>,
    /// Attach to the project configured for the current directory.
    pub current_project: bool,
}

impl Request for DocumentCreate {
    fn to_args(&self) -> Vec<String> {
        let mut args = ArgList::new(&["document", "create"]);
        args.flag("--title", &self.title)
            .flag("--content", &self.content)
            .opt("--project", self.project.as_ref())
            .switch("--current-project", self.current_project);
        args.into_vec()
    }
}
