//! Persisting the configured vocabulary to preference files.

use crate::helpers::vocabulary::{developer, moving_grids, role, role_names, standard_roles};
use idocit::base::constants::{ADDRESSEES, THEMATIC_ROLES, VERBCLASS_ROLE_MAPPING};
use idocit::config::persistence::{
    are_addressees_initialized, are_thematic_grids_initialized, are_thematic_roles_initialized,
    export_thematic_grids, import_thematic_grids, load_addressees, load_thematic_roles,
    persist_thematic_roles,
};
use idocit::config::{Configuration, PersistenceError, PreferenceStore};
use idocit::structure::{RoleScope, ThematicGrid};

fn configured() -> Configuration {
    let mut config = Configuration::new();
    config.set_thematic_roles(standard_roles());
    config.add_addressee(developer());
    config.set_thematic_grids(moving_grids());
    config
}

#[test]
fn test_configuration_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("idocit.prefs.xml");
    let config = configured();

    let mut store = PreferenceStore::new();
    config.persist(&mut store).unwrap();
    store.save(&path).unwrap();

    let reloaded = PreferenceStore::load(&path).unwrap();
    assert!(are_thematic_roles_initialized(&reloaded));
    assert!(are_addressees_initialized(&reloaded));
    assert!(are_thematic_grids_initialized(&reloaded));

    let loaded = Configuration::load(&reloaded);
    assert_eq!(
        role_names(loaded.thematic_roles()),
        vec!["ACTION", "AGENT", "DESTINATION", "OBJECT", "SOURCE"]
    );
    assert_eq!(loaded.find_thematic_role("action").role_scope, RoleScope::Operation);
    assert_eq!(loaded.addressees(), config.addressees());
    assert_eq!(loaded.thematic_grids(), config.thematic_grids());
    assert_ne!(loaded.version(), config.version());
}

#[test]
fn test_missing_file_gives_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = PreferenceStore::load(&dir.path().join("absent.xml")).unwrap();

    assert!(store.is_empty());
    assert!(!are_thematic_grids_initialized(&store));
    assert!(Configuration::load(&store).thematic_grids().is_empty());
}

#[test]
fn test_descriptions_lose_line_breaks() {
    let mut store = PreferenceStore::new();
    persist_thematic_roles(
        &mut store,
        &[role("AGENT").with_description("Who performs\nthe operation")],
    )
    .unwrap();

    let roles = load_thematic_roles(&store);
    assert_eq!(roles[0].description.as_deref(), Some("Who performs the operation"));
}

#[test]
fn test_malformed_values_load_as_empty() {
    let mut store = PreferenceStore::new();
    store.put(THEMATIC_ROLES, "<list><thematicRole>");
    store.put(ADDRESSEES, "   ");
    store.put(VERBCLASS_ROLE_MAPPING, "not xml at all");

    let config = Configuration::load(&store);
    assert!(config.thematic_roles().is_empty());
    assert!(config.addressees().is_empty());
    assert!(config.thematic_grids().is_empty());
    assert!(load_addressees(&store).is_empty());
}

#[test]
fn test_export_then_import_grids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grids.xml");
    let grids = moving_grids();

    export_thematic_grids(&path, &grids).unwrap();
    assert_eq!(import_thematic_grids(&path).unwrap(), grids);
}

#[test]
fn test_exported_grid_keeps_rule_text_and_flattens_descriptions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grids.xml");
    let grid = ThematicGrid::new("Checking")
        .with_description("line1\nline2")
        .with_verb("check")
        .with_role(role("OBJECT").with_description("what\nis checked"), true)
        .with_rule("OBJECT", "  a;\n");

    export_thematic_grids(&path, std::slice::from_ref(&grid)).unwrap();
    let imported = import_thematic_grids(&path).unwrap();

    assert_eq!(imported[0].grid_based_rules["OBJECT"], "  a;\n");
    assert_eq!(imported[0].description.as_deref(), Some("line1 line2"));
    let object = imported[0].roles.keys().next().unwrap();
    assert_eq!(object.description.as_deref(), Some("what is checked"));

    export_thematic_grids(&path, &imported).unwrap();
    assert_eq!(import_thematic_grids(&path).unwrap(), imported);
}

#[test]
fn test_import_errors_propagate() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.xml");
    assert!(matches!(import_thematic_grids(&missing), Err(PersistenceError::Io(_))));

    let broken = dir.path().join("broken.xml");
    std::fs::write(&broken, "<list><thematicGrid>").unwrap();
    assert!(import_thematic_grids(&broken).is_err());
}
