//! `linear label create`.

use crate::Request;
use crate::args::ArgList;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelCreate {
    pub name: String,
    pub team: String,
    pub color: Option<String>,
    /// Create a label group instead of a plain label.
    pub is_group: bool,
    /// Parent group name.
    pub parent: Option<String>,
}

impl Request for LabelCreate {
    fn to_args(&self) -> Vec<String> {
        let mut args = ArgList::new(&["label", "create"]);
        args.flag("--name", &self.name)
            .flag("--team", &self.team)
            .opt("--color", self.color.as_ref())
            .switch("--is-group", self.is_group)
            .opt("--parent", self.parent.as_ref());
        args.into_vec()
    }
}
