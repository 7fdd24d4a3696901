//! What an editor shows when offering recommended roles for one element.

use indexmap::{IndexMap, IndexSet};

use crate::structure::{ThematicGrid, ThematicRole};

/// Grid name to its roles and whether each is already assigned.
pub type RecommendedGrids = IndexMap<String, IndexMap<ThematicRole, bool>>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecommendedRolesSelection {
    pub recommended_grids: RecommendedGrids,
    pub assigned_roles: Vec<ThematicRole>,
    pub reference_grid_name: Option<String>,
    pub collapsed_grid_names: IndexSet<String>,
    pub roles_with_error_documentation: Vec<ThematicRole>,
}

impl RecommendedRolesSelection {
    /// Absent containers become empty ones.
    pub fn new(
        recommended_grids: Option<RecommendedGrids>,
        assigned_roles: Option<Vec<ThematicRole>>,
        reference_grid_name: Option<String>,
        collapsed_grid_names: Option<IndexSet<String>>,
        roles_with_error_documentation: Option<Vec<ThematicRole>>,
    ) -> Self {
        Self {
            recommended_grids: recommended_grids.unwrap_or_default(),
            assigned_roles: assigned_roles.unwrap_or_default(),
            reference_grid_name,
            collapsed_grid_names: collapsed_grid_names.unwrap_or_default(),
            roles_with_error_documentation: roles_with_error_documentation.unwrap_or_default(),
        }
    }

    /// Selection over `grids`, marking each role as assigned when it is in
    /// `assigned_roles` by name.
    pub fn from_grids<'a>(
        grids: impl IntoIterator<Item = &'a ThematicGrid>,
        assigned_roles: Vec<ThematicRole>,
    ) -> Self {
        let recommended_grids = grids
            .into_iter()
            .map(|grid| {
                let roles = grid
                    .roles
                    .keys()
                    .map(|role| {
                        let assigned = assigned_roles.iter().any(|known| known.same_name(role));
                        (role.clone(), assigned)
                    })
                    .collect();
                (grid.name.clone().unwrap_or_default(), roles)
            })
            .collect();

        Self::new(Some(recommended_grids), Some(assigned_roles), None, None, None)
    }

    pub fn is_collapsed(&self, grid_name: &str) -> bool {
        self.collapsed_grid_names.contains(grid_name)
    }

    /// Whether `role` already carries error documentation.
    pub fn has_error_documentation(&self, role: &ThematicRole) -> bool {
        self.roles_with_error_documentation
            .iter()
            .any(|known| known.same_name(role))
    }
}
