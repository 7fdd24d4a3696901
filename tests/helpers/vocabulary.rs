//! Roles, addressees and grids used across tests.

use idocit::structure::{Addressee, RoleScope, ThematicGrid, ThematicRole};

pub fn role(name: &str) -> ThematicRole {
    ThematicRole::new(name)
}

pub fn role_names(roles: &[ThematicRole]) -> Vec<&str> {
    roles.iter().map(|role| role.name.as_str()).collect()
}

pub fn developer() -> Addressee {
    Addressee::new("Developer").with_description("Implements against the interface")
}

pub fn standard_roles() -> Vec<ThematicRole> {
    vec![
        role("AGENT").with_description("Who performs the operation"),
        role("ACTION").with_scope(RoleScope::Operation),
        role("OBJECT"),
        role("SOURCE"),
        role("DESTINATION"),
    ]
}

/// Grids for moving and changing operations, both matching `move`.
pub fn moving_grids() -> Vec<ThematicGrid> {
    vec![
        ThematicGrid::new("Transporting Operations")
            .with_description("Operations moving an object between places")
            .with_verb("move")
            .with_verb("transfer")
            .with_role(role("OBJECT"), true)
            .with_role(role("SOURCE"), true)
            .with_role(role("DESTINATION"), true)
            .with_role(role("AGENT"), false)
            .with_reference_verb("move"),
        ThematicGrid::new("Changing Operations")
            .with_verb("move")
            .with_verb("set")
            .with_role(role("OBJECT"), true)
            .with_role(role("ACTION"), false)
            .with_rule("ACTION", "role.interfaceLevel == false;"),
    ]
}
