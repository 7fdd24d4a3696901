//! Recommending roles for signature elements.

use std::collections::HashSet;

use crate::helpers::tree_fixtures::customer_service;
use crate::helpers::vocabulary::{moving_grids, role, role_names};
use idocit::config::Configuration;
use idocit::services::{
    RecommendationCache, derive_roles_recommendation, derive_thematic_grid, extract_verb,
    find_matching_grids, unambiguous_grid,
};
use idocit::structure::{Documentation, merge_second_level};
use rstest::rstest;

#[rstest]
#[case(Some("removeName"), Some("remove"))]
#[case(Some("RemoveName"), Some("remove"))]
#[case(Some(""), None)]
#[case(Some("   "), None)]
#[case(None, None)]
fn test_extract_verb(#[case] identifier: Option<&str>, #[case] expected: Option<&str>) {
    assert_eq!(extract_verb(identifier).as_deref(), expected);
}

#[test]
fn test_second_level_merge_has_no_duplicates() {
    let documented = vec![role("SOURCE"), role("DESTINATION"), role("AGENT")];
    let prior = vec![role("ACTION"), role("AGENT")];

    let merged = merge_second_level(documented, prior);
    let names: HashSet<_> = merged.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(merged.len(), 4);
    assert_eq!(
        names,
        HashSet::from(["SOURCE", "DESTINATION", "AGENT", "ACTION"])
    );
}

#[test]
fn test_matching_grids_by_operation_verb() {
    let grids = moving_grids();
    let matching = find_matching_grids("move", &grids);
    assert_eq!(matching.len(), 2);
    assert!(find_matching_grids("delete", &grids).is_empty());

    let derived = derive_thematic_grid(Some("transferCustomer"), &grids);
    assert_eq!(
        derived.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["Transporting Operations"]
    );
}

#[test]
fn test_recommendation_for_undocumented_operation() {
    let f = customer_service();
    let grids = moving_grids();

    let recs = derive_roles_recommendation(&grids, &f.tree, f.operation);
    assert_eq!(role_names(recs.first_level()), vec!["DESTINATION", "OBJECT", "SOURCE"]);
    assert_eq!(role_names(recs.second_level()), vec!["ACTION", "AGENT"]);
}

#[test]
fn test_documented_roles_move_to_second_level() {
    let mut f = customer_service();
    f.tree
        .add_documentation(f.customer, Documentation::new().with_role(role("OBJECT")))
        .unwrap();
    f.tree
        .add_documentation(f.street, Documentation::new().with_role(role("DESTINATION")))
        .unwrap();

    let grids = moving_grids();
    let recs = derive_roles_recommendation(&grids, &f.tree, f.customer);
    assert_eq!(role_names(recs.first_level()), vec!["SOURCE"]);
    assert_eq!(
        role_names(recs.second_level()),
        vec!["ACTION", "AGENT", "DESTINATION", "OBJECT"]
    );
}

#[test]
fn test_assigned_grid_decides_first_level() {
    let mut f = customer_service();
    f.tree
        .set_thematic_grid_name(f.operation, Some("Changing Operations".to_string()))
        .unwrap();

    let grids = moving_grids();
    let matching = find_matching_grids("move", &grids);
    let reference = unambiguous_grid(&matching, &f.tree, f.street).unwrap();
    assert_eq!(reference.name.as_deref(), Some("Changing Operations"));

    let recs = derive_roles_recommendation(matching, &f.tree, f.street);
    assert_eq!(role_names(recs.first_level()), vec!["OBJECT"]);
    assert_eq!(
        role_names(recs.second_level()),
        vec!["ACTION", "AGENT", "DESTINATION", "SOURCE"]
    );
}

#[test]
fn test_cache_follows_configuration_version() {
    let f = customer_service();
    let mut config = Configuration::new();
    let mut cache = RecommendationCache::new();

    assert!(cache.recommendations(&config, &f.tree, f.operation).is_empty());

    config.set_thematic_grids(moving_grids());
    let recs = cache.recommendations(&config, &f.tree, f.operation);
    assert_eq!(role_names(recs.first_level()), vec!["DESTINATION", "OBJECT", "SOURCE"]);

    cache.clear();
    assert!(cache.is_empty());
}
