//! Role selections offered to an editor.

use indexmap::IndexSet;

use crate::helpers::vocabulary::{moving_grids, role};
use idocit::services::{RecommendedGrids, RecommendedRolesSelection};

#[test]
fn test_absent_arguments_give_empty_containers() {
    let selection = RecommendedRolesSelection::new(None, None, None, None, None);
    assert!(selection.recommended_grids.is_empty());
    assert!(selection.assigned_roles.is_empty());
    assert!(selection.collapsed_grid_names.is_empty());
    assert!(selection.roles_with_error_documentation.is_empty());
}

#[test]
fn test_empty_arguments_stay_empty() {
    let selection = RecommendedRolesSelection::new(
        Some(RecommendedGrids::new()),
        Some(Vec::new()),
        Some("Transporting Operations".to_string()),
        Some(IndexSet::new()),
        None,
    );
    assert!(selection.recommended_grids.is_empty());
    assert_eq!(
        selection.reference_grid_name.as_deref(),
        Some("Transporting Operations")
    );
}

#[test]
fn test_selection_from_matching_grids() {
    let grids = moving_grids();
    let mut selection = RecommendedRolesSelection::from_grids(&grids, vec![role("OBJECT")]);
    selection.collapsed_grid_names.insert("Changing Operations".to_string());
    selection.roles_with_error_documentation.push(role("SOURCE"));

    assert_eq!(selection.recommended_grids.len(), 2);
    let transporting = &selection.recommended_grids["Transporting Operations"];
    assert_eq!(transporting.get(&role("OBJECT")), Some(&true));
    assert_eq!(transporting.get(&role("SOURCE")), Some(&false));

    assert!(selection.is_collapsed("Changing Operations"));
    assert!(!selection.is_collapsed("Transporting Operations"));
    assert!(selection.has_error_documentation(&role("SOURCE")));
}
