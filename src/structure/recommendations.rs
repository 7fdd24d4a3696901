//! Roles recommended for documenting an element.

use super::described::ThematicRole;

/// Recommended roles split into two priority levels.
///
/// First level holds mandatory roles still missing; second level holds
/// everything else worth offering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RolesRecommendations {
    first_level: Vec<ThematicRole>,
    second_level: Vec<ThematicRole>,
}

impl RolesRecommendations {
    pub fn new(first_level: Vec<ThematicRole>, second_level: Vec<ThematicRole>) -> Self {
        Self {
            first_level,
            second_level,
        }
    }

    pub fn first_level(&self) -> &[ThematicRole] {
        &self.first_level
    }

    pub fn second_level(&self) -> &[ThematicRole] {
        &self.second_level
    }

    pub fn with_first_level(self, first_level: Vec<ThematicRole>) -> Self {
        Self {
            first_level,
            ..self
        }
    }

    pub fn with_second_level(self, second_level: Vec<ThematicRole>) -> Self {
        Self {
            second_level,
            ..self
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first_level.is_empty() && self.second_level.is_empty()
    }

    /// Whether `role` is recommended at either level (by name).
    pub fn recommends(&self, role: &ThematicRole) -> bool {
        self.first_level
            .iter()
            .chain(&self.second_level)
            .any(|known| known.same_name(role))
    }
}

/// Union of documented roles and prior second-level roles.
///
/// Documented roles come first; membership is by name and the first
/// occurrence wins.
pub fn merge_second_level(
    documented: impl IntoIterator<Item = ThematicRole>,
    prior: impl IntoIterator<Item = ThematicRole>,
) -> Vec<ThematicRole> {
    let mut merged: Vec<ThematicRole> = Vec::new();
    for role in documented.into_iter().chain(prior) {
        if !merged.iter().any(|known| known.same_name(&role)) {
            merged.push(role);
        }
    }
    merged
}
