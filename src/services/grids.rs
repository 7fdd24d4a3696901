//! Verb extraction and verb-based grid matching.

use indexmap::IndexMap;
use tracing::trace;

use crate::base::text::add_blanks_to_camel_syntax;
use crate::structure::{ThematicGrid, ThematicRole};

/// Leading word of a camel-case identifier, lower-cased.
///
/// ```
/// use idocit::services::extract_verb;
///
/// assert_eq!(extract_verb(Some("removeName")).as_deref(), Some("remove"));
/// assert_eq!(extract_verb(Some("RemoveName")).as_deref(), Some("remove"));
/// assert_eq!(extract_verb(Some("   ")), None);
/// assert_eq!(extract_verb(None), None);
/// ```
pub fn extract_verb(identifier: Option<&str>) -> Option<String> {
    let identifier = identifier?;
    if identifier.trim().is_empty() {
        return None;
    }
    add_blanks_to_camel_syntax(identifier)
        .split_whitespace()
        .next()
        .map(str::to_lowercase)
}

/// Grids whose verb class contains `verb`, in configuration order.
pub fn find_matching_grids<'a>(verb: &str, grids: &'a [ThematicGrid]) -> Vec<&'a ThematicGrid> {
    let matching: Vec<_> = grids.iter().filter(|grid| grid.matches_verb(verb)).collect();
    trace!(verb, matches = matching.len(), "matched thematic grids");
    matching
}

/// Grids matching the verb of `identifier`, keyed by grid name.
///
/// Unnamed grids are keyed by the empty string.
pub fn derive_thematic_grid(
    identifier: Option<&str>,
    grids: &[ThematicGrid],
) -> IndexMap<String, ThematicGrid> {
    let Some(verb) = extract_verb(identifier) else {
        return IndexMap::new();
    };

    find_matching_grids(&verb, grids)
        .into_iter()
        .map(|grid| (grid.name.clone().unwrap_or_default(), grid.clone()))
        .collect()
}

/// Whether `roles` holds a role named like `role`.
pub fn contains_role(roles: &[ThematicRole], role: &ThematicRole) -> bool {
    roles.iter().any(|known| known.same_name(role))
}

/// `existing` followed by every grid role not yet present by name.
pub fn collect_thematic_roles<'a>(
    grids: impl IntoIterator<Item = &'a ThematicGrid>,
    existing: &[ThematicRole],
) -> Vec<ThematicRole> {
    let mut roles = existing.to_vec();
    for grid in grids {
        for role in grid.roles.keys() {
            if !contains_role(&roles, role) {
                roles.push(role.clone());
            }
        }
    }
    roles
}
