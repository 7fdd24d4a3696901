//! Thematic grids: the expected roles of operations described by a verb class.

use indexmap::{IndexMap, IndexSet};

use crate::base::DescribedItem;

use super::described::ThematicRole;

/// A verb class and the roles its operations are expected to document.
///
/// `roles` maps each role to whether it is mandatory. `grid_based_rules` maps
/// a role name to a rule script of the iDocIt rule language.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThematicGrid {
    pub name: Option<String>,
    pub description: Option<String>,
    pub verbs: IndexSet<String>,
    pub roles: IndexMap<ThematicRole, bool>,
    pub reference_verb: Option<String>,
    pub grid_based_rules: IndexMap<String, String>,
}

impl ThematicGrid {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_verb(mut self, verb: impl Into<String>) -> Self {
        self.verbs.insert(verb.into());
        self
    }

    pub fn with_role(mut self, role: ThematicRole, mandatory: bool) -> Self {
        self.roles.insert(role, mandatory);
        self
    }

    pub fn with_reference_verb(mut self, verb: impl Into<String>) -> Self {
        self.reference_verb = Some(verb.into());
        self
    }

    pub fn with_rule(mut self, role_name: impl Into<String>, rule: impl Into<String>) -> Self {
        self.grid_based_rules.insert(role_name.into(), rule.into());
        self
    }

    pub fn mandatory_roles(&self) -> impl Iterator<Item = &ThematicRole> {
        self.roles
            .iter()
            .filter_map(|(role, mandatory)| mandatory.then_some(role))
    }

    pub fn optional_roles(&self) -> impl Iterator<Item = &ThematicRole> {
        self.roles
            .iter()
            .filter_map(|(role, mandatory)| (!mandatory).then_some(role))
    }

    /// Case-insensitive membership of `verb` in this grid's verb class.
    pub fn matches_verb(&self, verb: &str) -> bool {
        self.verbs.iter().any(|known| known.eq_ignore_ascii_case(verb))
    }

    pub fn rule_for(&self, role_name: &str) -> Option<&str> {
        self.grid_based_rules.get(role_name).map(String::as_str)
    }
}

impl DescribedItem for ThematicGrid {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
