//! Editing and copying signature trees.

use crate::helpers::tree_fixtures::customer_service;
use crate::helpers::vocabulary::{developer, role};
use idocit::structure::{
    Documentation, ElementVariant, NewElement, ParameterType, SignatureTree, StructureError,
};

// =============================================================================
// COPYING
// =============================================================================

#[test]
fn test_copy_within_tree_is_structurally_equal() {
    let mut f = customer_service();
    let copy = f.tree.copy(f.operation, Some(f.port_type)).unwrap();

    assert_ne!(copy, f.operation);
    assert!(f.tree.structurally_eq(f.operation, &f.tree, copy));
    assert_eq!(f.tree.size(copy), f.tree.size(f.operation));
    assert_eq!(f.tree.children(f.port_type), &[f.operation, copy]);
}

#[test]
fn test_copy_into_other_tree() {
    let f = customer_service();
    let mut target = SignatureTree::new();

    let root = f.tree.copy_into(f.artifact, &mut target, None).unwrap();
    assert_eq!(target.roots(), &[root]);
    assert_eq!(target.len(), f.tree.len());
    assert!(f.tree.structurally_eq(f.artifact, &target, root));
}

#[test]
fn test_copy_leaves_documentation_behind() {
    let mut f = customer_service();
    f.tree
        .add_documentation(
            f.street,
            Documentation::new().with_role(role("DESTINATION")).with_text(developer(), "New street"),
        )
        .unwrap();

    let copy = f.tree.copy(f.customer, Some(f.input)).unwrap();
    let copied_street = f.tree.children(copy)[0];
    assert!(f.tree.get(copied_street).unwrap().documentations().is_empty());
    assert_eq!(f.tree.get(copied_street).unwrap().identifier.as_deref(), Some("street"));
}

#[test]
fn test_copy_rejects_invalid_placement() {
    let mut f = customer_service();
    let before = f.tree.len();

    let err = f.tree.copy(f.operation, Some(f.customer)).unwrap_err();
    assert!(matches!(err, StructureError::InvalidState(_)));
    assert_eq!(f.tree.len(), before);
}

#[test]
fn test_create_signature_element_keeps_slot_only() {
    let mut f = customer_service();
    let blank = f.tree.create_signature_element(f.input, Some(f.operation)).unwrap();

    let el = f.tree.get(blank).unwrap();
    assert_eq!(el.variant(), ElementVariant::Parameters);
    assert_eq!(el.kind.slot(), Some(ParameterType::Input));
    assert_eq!(el.category(), "Input Message");
    assert_eq!(el.identifier, None);
    assert!(el.children().is_empty());
}

// =============================================================================
// EDITING
// =============================================================================

#[test]
fn test_remove_subtree() {
    let mut f = customer_service();
    let before = f.tree.len();

    let removed = f.tree.remove(f.customer).unwrap();
    assert_eq!(removed.identifier.as_deref(), Some("customer"));
    assert_eq!(f.tree.len(), before - 2);
    assert!(!f.tree.contains(f.street));
    assert!(f.tree.children(f.input).is_empty());
}

#[test]
fn test_move_child_reorders() {
    let mut f = customer_service();
    let faults = f.tree.parent(f.fault).unwrap();

    f.tree.move_child(f.operation, 1, 0).unwrap();
    assert_eq!(f.tree.children(f.operation), &[faults, f.input]);
    assert!(f.tree.move_child(f.operation, 5, 0).is_err());
}

#[test]
fn test_create_checks_nesting() {
    let mut f = customer_service();
    assert!(f.tree.create(None, NewElement::operation("Operation")).is_err());
    assert!(f.tree.create(Some(f.operation), NewElement::interface("PortType")).is_err());
    assert!(f.tree.create(Some(f.port_type), NewElement::interface("PortType")).is_ok());
}

#[test]
fn test_display_names() {
    let f = customer_service();
    assert_eq!(
        f.tree.display_name(f.customer).as_deref(),
        Some("customer (Type: Customer) [Part]")
    );
}

// =============================================================================
// DOCUMENTATION
// =============================================================================

#[test]
fn test_error_documentation_only_for_faults() {
    let mut f = customer_service();
    let error_doc = Documentation::new().with_role(role("CAUSE")).with_error_case(true);

    assert_eq!(
        f.tree.add_documentation(f.customer, error_doc.clone()),
        Err(StructureError::ErrorCaseNotSupported(f.customer))
    );
    assert!(f.tree.add_documentation(f.fault, error_doc).is_ok());
}

#[test]
fn test_documentation_not_allowed() {
    let mut f = customer_service();
    f.tree.set_documentation_allowed(f.artifact, false).unwrap();

    assert_eq!(
        f.tree.add_documentation(f.artifact, Documentation::new()),
        Err(StructureError::DocumentationNotAllowed(f.artifact))
    );
}

#[test]
fn test_associated_roles_span_operation() {
    let mut f = customer_service();
    f.tree
        .add_documentation(f.port_type, Documentation::new().with_role(role("AGENT")))
        .unwrap();
    f.tree
        .add_documentation(f.street, Documentation::new().with_role(role("DESTINATION")))
        .unwrap();
    f.tree
        .add_documentation(f.fault, Documentation::new().with_role(role("CAUSE")).with_error_case(true))
        .unwrap();

    let roles = f.tree.collect_associated_thematic_roles(f.customer);
    let names: Vec<_> = roles.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["AGENT", "DESTINATION", "CAUSE"]);
}
